pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

pub use api::create_router;
pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Timeout for a single metadata provider request.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let pool = domain::create_pool(&config.database_url, config.max_connections).await?;
    let http_client = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()?;
    let state = AppState::new(pool, &config, http_client);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
