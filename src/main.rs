use std::env;
use std::error::Error;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::store::{PayrollDb, seed};

/// Environment variable naming the configuration directory.
const CONFIG_DIR_VAR: &str = "PAYROLL_CONFIG_DIR";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var(CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./config"));
    let config = ConfigLoader::load(&config_dir)?;
    info!(config_dir = %config_dir.display(), "configuration loaded");

    let db = PayrollDb::open(&config.storage().database_path)?;
    db.initialize()?;

    if config.seed().enabled {
        seed::bootstrap(&db, config.seed(), config.settings().month_anchor_day)?;
    }

    let bind_address = config.server().bind_address.clone();
    let app = create_router(AppState::new(db, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "payroll ledger listening");
    axum::serve(listener, app).await?;
    Ok(())
}
