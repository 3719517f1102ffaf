//! Payroll engine HTTP server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::store::{EmployeeStore, InMemoryEmployeeStore};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "payroll_engine=info".into()),
        )
        .init();

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());

    let state = AppState::from_config(store, &config);

    if let Err(err) = state.roster().reload().await {
        warn!(error = %err, "Initial roster load failed");
    }
    let _watch = state.roster().watch();

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(
        addr = %bind_addr,
        policy = %config.metadata().code,
        "Payroll engine listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
