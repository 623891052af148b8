//! Order management module
//!
//! Record type, store trait with its PostgreSQL and in-memory backends, and
//! the service the gateway calls into.

pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use memory::InMemoryOrderStore;
pub use models::{Order, OrderPayload};
pub use repository::PgOrderStore;
pub use service::{OrderError, OrderResult, OrderService};
pub use store::{OrderStore, StoreError, StoreResult};
