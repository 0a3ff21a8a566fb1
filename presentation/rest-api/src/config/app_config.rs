use super::{
    cors_config, database_config::DatabaseSettings, jwt_config::JwtConfig, pdf_config::PdfConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub pdf: PdfConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            jwt: JwtConfig::from_env()?,
            pdf: PdfConfig::from_env(),
        })
    }
}
