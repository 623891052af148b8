//! Order Service - the operations the HTTP layer calls
//!
//! Every operation is a direct delegation to the store, except update which
//! reads, copies the editable fields and saves.

use std::sync::Arc;

use thiserror::Error;

use super::models::{Order, OrderPayload};
use super::store::{OrderStore, StoreError};

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_orders(&self) -> OrderResult<Vec<Order>> {
        let orders = self.store.find_all().await?;
        tracing::debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    pub async fn get_order_by_id(&self, id: i64) -> OrderResult<Option<Order>> {
        let order = self.store.find_by_id(id).await?;
        tracing::debug!(id, found = order.is_some(), "Looked up order");
        Ok(order)
    }

    pub async fn create_order(&self, order: Order) -> OrderResult<Order> {
        let saved = self.store.save(order).await?;
        tracing::info!(id = ?saved.id, product = %saved.product_name, "Order created");
        Ok(saved)
    }

    pub async fn update_order(&self, id: i64, patch: &OrderPayload) -> OrderResult<Order> {
        let Some(mut order) = self.store.find_by_id(id).await? else {
            tracing::warn!(id, "Update rejected, order not found");
            return Err(OrderError::NotFound(id));
        };

        order.apply(patch);
        let saved = self.store.save(order).await?;
        tracing::info!(id, "Order updated");
        Ok(saved)
    }

    pub async fn delete_order(&self, id: i64) -> OrderResult<()> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "Order deleted");
        Ok(())
    }

    pub async fn health_check(&self) -> OrderResult<()> {
        self.store.health_check().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::memory::InMemoryOrderStore;

    fn service() -> OrderService {
        OrderService::new(Arc::new(InMemoryOrderStore::new()))
    }

    fn laptop() -> Order {
        Order::new("A", "Laptop", 2, 1500.0)
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let service = service();

        let first = service.create_order(laptop()).await.unwrap();
        let second = service.create_order(laptop()).await.unwrap();

        assert!(first.id.unwrap() > 0);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_after_create_returns_equal_record() {
        let service = service();
        let created = service.create_order(laptop()).await.unwrap();

        let found = service
            .get_order_by_id(created.id.unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let service = service();
        assert!(service.get_order_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_copies_fields_and_keeps_id() {
        let service = service();
        let created = service.create_order(laptop()).await.unwrap();
        let id = created.id.unwrap();

        let patch = OrderPayload {
            customer_name: "B".to_string(),
            product_name: "Tablet".to_string(),
            quantity: 5,
            price: 300.0,
        };
        let updated = service.update_order(id, &patch).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.customer_name, "B");
        assert_eq!(updated.product_name, "Tablet");
        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.price, 300.0);

        let found = service.get_order_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();
        let result = service.update_order(77, &OrderPayload::default()).await;
        assert!(matches!(result, Err(OrderError::NotFound(77))));
        assert!(service.get_all_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let service = service();
        let created = service.create_order(laptop()).await.unwrap();
        let id = created.id.unwrap();

        service.delete_order(id).await.unwrap();
        assert!(service.get_order_by_id(id).await.unwrap().is_none());

        // never-existing id
        service.delete_order(9999).await.unwrap();
        assert!(service.get_order_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_returns_every_order() {
        let service = service();
        service.create_order(laptop()).await.unwrap();
        service
            .create_order(Order::new("B", "Monitor", 1, 500.0))
            .await
            .unwrap();

        let orders = service.get_all_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].product_name, "Monitor");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(OrderError::NotFound(5).to_string(), "Order not found: 5");
    }
}
