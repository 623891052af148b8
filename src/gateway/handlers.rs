//! HTTP handlers
//!
//! - [`order`]: order CRUD under `/api/orders`
//! - [`health`]: `/api/health`

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, delete_order, get_all_orders, get_order_by_id, update_order};
