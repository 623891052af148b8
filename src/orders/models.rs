//! Order record and request payload

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchase line.
///
/// `id` is `None` until the order has been saved once; stores assign it on
/// first save and never change it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = "Laptop")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(example = 1500.0)]
    pub price: f64,
}

impl Order {
    /// Transient order, not yet persisted
    pub fn new(
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i32,
        price: f64,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity,
            price,
        }
    }

    #[cfg(test)]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Copy the editable fields from `patch`. `id` is left alone.
    pub fn apply(&mut self, patch: &OrderPayload) {
        self.customer_name.clone_from(&patch.customer_name);
        self.product_name.clone_from(&patch.product_name);
        self.quantity = patch.quantity;
        self.price = patch.price;
    }
}

/// Request body for create and update.
///
/// Missing fields fall back to their zero value; an `id` in the body is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPayload {
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = "Laptop")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(example = 1500.0)]
    pub price: f64,
}

impl From<OrderPayload> for Order {
    fn from(payload: OrderPayload) -> Self {
        Self {
            id: None,
            customer_name: payload.customer_name,
            product_name: payload.product_name,
            quantity: payload.quantity,
            price: payload.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_transient() {
        let order = Order::new("Alice", "Laptop", 2, 1500.0);
        assert!(!order.is_persisted());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut order = Order::new("Alice", "Laptop", 2, 1500.0);
        order.id = Some(7);

        let patch = OrderPayload {
            customer_name: "Bob".to_string(),
            product_name: "Monitor".to_string(),
            quantity: 1,
            price: 500.0,
        };
        order.apply(&patch);

        assert_eq!(order.id, Some(7));
        assert_eq!(order.customer_name, "Bob");
        assert_eq!(order.product_name, "Monitor");
        assert_eq!(order.quantity, 1);
        assert_eq!(order.price, 500.0);
    }

    #[test]
    fn test_order_json_is_camel_case() {
        let mut order = Order::new("Alice", "Laptop", 2, 1500.0);
        order.id = Some(3);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["customerName"], "Alice");
        assert_eq!(json["productName"], "Laptop");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["price"], 1500.0);
    }

    #[test]
    fn test_payload_missing_fields_default() {
        let payload: OrderPayload =
            serde_json::from_str(r#"{"productName":"Keyboard","price":100.0}"#).unwrap();
        assert_eq!(payload.customer_name, "");
        assert_eq!(payload.product_name, "Keyboard");
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.price, 100.0);
    }

    #[test]
    fn test_payload_ignores_id() {
        let payload: OrderPayload =
            serde_json::from_str(r#"{"id":99,"customerName":"A","productName":"B","quantity":1,"price":2.5}"#)
                .unwrap();
        let order = Order::from(payload);
        assert_eq!(order.id, None);
        assert_eq!(order.customer_name, "A");
    }
}
