use anyhow::Context;
use jsonwebtoken::DecodingKey;

/// Secret used to verify HS256 bearer tokens.
///
/// Environment variables:
/// - JWT_SECRET: shared signing secret (required)
#[derive(Clone)]
pub struct JwtConfig {
    decoding_key: DecodingKey,
}

impl JwtConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }
        Ok(Self::new(&secret))
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
