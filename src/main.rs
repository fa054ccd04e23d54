
mod config;
mod error;
mod model;
mod web;

#[cfg(test)]
pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mm = ModelManager::new();
    info!("{:<12} - {} students", "SEEDED", mm.student_count().await);

    let routes_all = web::routes(mm);

    let addr = config().WEB_ADDR;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{:<12} - {addr}\n", "LISTENING");

    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{:<12} - shutdown complete", "STOPPED");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("{:<12} - ctrl+c received", "SHUTDOWN"),
        _ = terminate => info!("{:<12} - terminate received", "SHUTDOWN"),
    }
}
