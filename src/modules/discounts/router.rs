use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_active_discounts, validate_discount};

pub fn init_discounts_router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_discount))
        .route("/active", get(get_active_discounts))
}
