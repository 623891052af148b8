use crate::orders::OrderService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}
