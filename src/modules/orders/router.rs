use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_order, get_order, get_orders_by_customer, update_order_status, update_payment_status,
};

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/customer/{customer_id}", get(get_orders_by_customer))
        .route("/{id}", get(get_order))
        .route("/{id}/status", patch(update_order_status))
        .route("/{id}/payment-status", patch(update_payment_status))
}
