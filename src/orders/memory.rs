//! In-process order store
//!
//! Used when no PostgreSQL URL is configured, and by tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::models::Order;
use super::store::{OrderStore, StoreResult};

pub struct InMemoryOrderStore {
    orders: DashMap<i64, Order>,
    next_id: AtomicI64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.iter().map(|e| e.value().clone()).collect();
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|e| e.value().clone()))
    }

    async fn save(&self, mut order: Order) -> StoreResult<Order> {
        if let Some(id) = order.id {
            if let Some(mut existing) = self.orders.get_mut(&id) {
                *existing = order.clone();
                return Ok(order);
            }
        }

        let id = self.next_id();
        order.id = Some(id);
        self.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.orders.remove(&id);
        Ok(())
    }
}
