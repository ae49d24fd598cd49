//! db-clock server

use std::sync::Arc;

use db_clock::api::{create_router, AppState};
use db_clock::config::{AppConfig, LogFormat};
use db_clock::database::Database;
use db_clock::errors::ClockError;
use db_clock::logging;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClockError> {
    #[cfg(feature = "dotenvy")]
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(config.log_format);

    // A failed connection is logged inside; the server starts regardless
    let database = Database::connect(&config.database()).await;

    let router = create_router(AppState::new(Arc::new(database)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("Server is running at http://localhost:{}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(logging::env_filter());

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
