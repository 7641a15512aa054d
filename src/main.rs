use crate::config::VitrinaConfig;
use crate::flags::cache::SystemClock;
use crate::flags::provider::HttpFlagProvider;
use crate::io::http::HttpContentSource;
use crate::io::local::FileContentSource;
use crate::io::ContentSource;
use crate::services::flags::FlagService;
use crate::services::portfolio::PortfolioService;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
mod domain;
mod features;
mod flags;
mod io;
mod parser;
mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<PortfolioService>,
    pub flags: Arc<FlagService>,
    pub config: Arc<VitrinaConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = VitrinaConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // pick the retrieval path: served asset URL when DATA_URL is set,
    // local file otherwise. downstream behavior is identical
    let source: Box<dyn ContentSource> = match &config.data_url {
        Some(url) => Box::new(HttpContentSource::new(url.clone())),
        None => Box::new(FileContentSource {
            path: config.data_path.clone(),
        }),
    };

    let portfolio = Arc::new(PortfolioService::new(source));

    let provider = HttpFlagProvider::new(
        config.flag_provider_url.clone(),
        config.flag_provider_secret.clone(),
    );
    let flags = Arc::new(FlagService::new(
        Box::new(provider),
        Box::new(SystemClock),
        Duration::from_secs(config.flag_ttl_secs),
    ));

    let app_state = AppState {
        portfolio,
        flags,
        config: shared_config.clone(),
    };

    info!("Starting server...");

    // api router, where features are composed
    let api_router = Router::new()
        .nest("/data", features::data::data_router())
        .nest("/flags", features::flags::flags_router());

    let app = Router::new()
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(config.frontend_path))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Server listening on http://0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
