//! Backend entry-point: loads settings, prepares the database, and serves the
//! calls and gifts API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crm_backend::inbound::http::health::HealthState;
use crm_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use crm_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use crm_backend::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let limits = settings.page_limits().wrap_err("invalid paging settings")?;
    let timestamps = settings
        .timestamps()
        .wrap_err("invalid timestamp settings")?;

    if settings.run_migrations() {
        let applied = run_pending_migrations_blocking(settings.database_url.clone())
            .await
            .wrap_err("database migrations failed")?;
        info!(applied, "database schema is current");
    }

    let pool = DbPool::new(
        PoolConfig::new(settings.database_url.clone()).with_max_size(settings.pool_max_size()),
    )
    .await
    .wrap_err("failed to build database pool")?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let config = ServerConfig::new(session, settings.bind_addr(), pool)
        .with_limits(limits)
        .with_timestamps(timestamps);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics()?);

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %settings.bind_addr(), "starting server");
    create_server(health_state, config)?.await?;
    Ok(())
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("crm")
        .endpoint("/metrics")
        .build()
        .map_err(|err| eyre!("failed to configure Prometheus metrics: {err}"))
}
