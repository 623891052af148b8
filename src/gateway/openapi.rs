//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::orders::{Order, OrderPayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Management API",
        version = "1.0.0",
        description = "CRUD API for customer orders.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::get_all_orders,
        crate::gateway::handlers::order::get_order_by_id,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::update_order,
        crate::gateway::handlers::order::delete_order,
    ),
    components(
        schemas(
            HealthResponse,
            Order,
            OrderPayload,
        )
    ),
    tags(
        (name = "Orders", description = "Order CRUD"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
