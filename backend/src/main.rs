//! Backend entry-point: loads settings, prepares storage, and serves the
//! booking API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotel_booking::inbound::http::health::HealthState;
use hotel_booking::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            run_migrations(database_url)
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(fail_liveness_on_shutdown(health_state));
    info!("hotel booking server started");
    server.await
}

/// Drop liveness once an interrupt arrives so health checks fail while the server
/// drains in-flight requests.
async fn fail_liveness_on_shutdown(health_state: web::Data<HealthState>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            health_state.mark_unhealthy();
            info!("shutdown requested; liveness check now failing");
        }
        Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
    }
}
