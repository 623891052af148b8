//! Order Management Service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ OrderService │───▶│  OrderStore  │
//! │  (YAML)  │    │  (axum)  │    │              │    │ (PG / memory)│
//! └──────────┘    └──────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Usage: `order_management [--env|-e <name>] [--port <port>]`

use std::sync::Arc;

use anyhow::Context;

use order_management::config::AppConfig;
use order_management::db::{Database, schema};
use order_management::gateway::{run_server, state::AppState};
use order_management::logging::init_logging;
use order_management::orders::{InMemoryOrderStore, OrderService, OrderStore, PgOrderStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn OrderStore>> {
    let Some(url) = config.postgres_url.as_deref() else {
        tracing::warn!("postgres_url not set, orders are kept in memory only");
        return Ok(Arc::new(InMemoryOrderStore::new()));
    };

    let db = Database::connect(url, &config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;
    schema::init_schema(db.pool())
        .await
        .context("Failed to initialize orders schema")?;

    Ok(Arc::new(PgOrderStore::new(db)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!(
        version = env!("GIT_HASH"),
        "Starting order management service in {} mode",
        env
    );

    let store = open_store(&app_config).await?;
    let state = Arc::new(AppState::new(OrderService::new(store)));

    let addr = app_config.bind_addr(get_port_override());
    run_server(&addr, state).await
}
