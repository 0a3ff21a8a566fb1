use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;

    pub mod favorite {
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod ingredient {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod recipe {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shopping_cart {
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod subscription {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tag {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod jwt_config;
    pub mod pdf_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Foodgram REST API entry point.
///
/// - config/: environment driven settings (server, CORS, database, JWT, font)
/// - setup/: dependency wiring and the poem server
/// - api/: routes, DTOs and error mappers per area
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env()?;

    // A missing or unreadable font aborts startup.
    let renderer = config.pdf.build_renderer()?;

    let pool = database_config::init_database(&config.database).await?;

    let container = DependencyContainer::new(pool, renderer);

    Server::run(config, container).await?;

    Ok(())
}
