//! Order Management Service
//!
//! CRUD over customer orders, served as JSON over HTTP and persisted in
//! PostgreSQL (or an in-process store when no database is configured).
//!
//! # Modules
//!
//! - [`orders`] - Order record, store trait and backends, service layer
//! - [`gateway`] - axum router, handlers, response envelope, OpenAPI
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use gateway::create_app;
pub use gateway::state::AppState;
pub use orders::{
    InMemoryOrderStore, Order, OrderError, OrderPayload, OrderService, OrderStore,
    PgOrderStore, StoreError,
};
