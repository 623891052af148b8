//! Order CRUD handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::orders::{Order, OrderError, OrderPayload};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, created, ok};

/// List orders
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = [Order]),
        (status = 500, description = "Store failure")
    ),
    tag = "Orders"
)]
pub async fn get_all_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    ok(state.orders.get_all_orders().await?)
}

/// Get an order by id
///
/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Order> {
    let order = state
        .orders
        .get_order_by_id(id)
        .await?
        .ok_or(OrderError::NotFound(id))?;
    ok(order)
}

/// Create an order
///
/// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body(content = OrderPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 500, description = "Store failure")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OrderPayload>,
) -> ApiResult<Order> {
    created(state.orders.create_order(Order::from(payload)).await?)
}

/// Replace the editable fields of an order
///
/// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body(content = OrderPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderPayload>,
) -> ApiResult<Order> {
    ok(state.orders.update_order(id, &patch).await?)
}

/// Delete an order. Unknown ids succeed as well.
///
/// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 500, description = "Store failure")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
