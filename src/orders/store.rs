//! Store trait for order persistence
//!
//! Services only see `dyn OrderStore`; the PostgreSQL repository and the
//! in-memory store both sit behind it.

use async_trait::async_trait;
use thiserror::Error;

use super::models::Order;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All persisted orders, ascending by id
    async fn find_all(&self) -> StoreResult<Vec<Order>>;

    /// `None` when no order has this id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Order>>;

    /// Insert when `order.id` is unset, otherwise overwrite the stored row.
    ///
    /// An id that is set but unknown to the store is treated as a fresh
    /// insert and receives a newly assigned id.
    async fn save(&self, order: Order) -> StoreResult<Order>;

    /// Remove the order if present. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    /// Backend reachability probe
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
