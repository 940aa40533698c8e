//! Exercise tracker entry-point: reads configuration (process environment
//! plus an optional `.env` file), prepares the store and serves the REST API
//! until SIGINT or SIGTERM.

mod server;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, run_migrations};
use server::{ServerConfig, Settings, create_server, load_settings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings().map_err(std::io::Error::other)?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(addr = %settings.bind_addr(), "exercise tracker listening");

    actix_web::rt::spawn(drain_on_signal(server.handle(), health_state));
    server.await?;
    info!("server stopped");
    Ok(())
}

async fn server_config(settings: &Settings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());

    let config = match settings.database() {
        Some(database) => {
            info!(
                max_connections = database.max_connections(),
                connect_timeout_secs = database.connect_timeout().as_secs(),
                "connecting to PostgreSQL"
            );
            run_migrations(database.url())
                .await
                .map_err(std::io::Error::other)?;
            let pool = DbPool::new(database.pool_config())
                .await
                .map_err(std::io::Error::other)?;
            config.with_db_pool(pool)
        }
        None => {
            warn!("DATABASE_URL not set; records are kept in memory and lost on exit");
            config
        }
    };

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::metrics::make_metrics());

    Ok(config)
}

async fn drain_on_signal(handle: ServerHandle, health_state: web::Data<HealthState>) {
    wait_for_shutdown_signal().await;
    health_state.mark_draining();
    info!("shutdown signal received; draining connections");
    handle.stop(true).await;
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!(signal = "SIGINT", "shutting down"),
        () = terminate => info!(signal = "SIGTERM", "shutting down"),
    }
}
