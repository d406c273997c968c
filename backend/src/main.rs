//! Travel tracker entry-point: reads settings, prepares storage and serves
//! the pages.

mod server;

use std::io;

use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use travel_tracker::inbound::http::session_config::{BuildMode, session_settings_from_env};
use travel_tracker::outbound::persistence::{DbPool, PoolConfig, apply_pending_migrations};
use travel_tracker::settings::AppSettings;

const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let env = DefaultEnv::new();
    let settings = AppSettings::from_env(&env).map_err(io::Error::other)?;
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let mut config = ServerConfig::new(session, settings.bind_addr())
        .with_default_user(settings.default_user);

    if let Some(database_url) = settings.database_url.clone() {
        if settings.run_migrations {
            apply_pending_migrations(database_url.clone())
                .await
                .map_err(io::Error::other)?;
        }
        let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size))
            .await
            .map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    } else if settings.run_migrations {
        warn!("RUN_MIGRATIONS is set but DATABASE_URL is not; skipping migrations");
    }

    let (host, port) = settings.bind_addr();
    info!(%host, port, "starting server");
    create_server(config)?.await
}
