use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    get_pending_reviews, get_product_reviews, moderate_review, submit_review,
};

pub fn init_reviews_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_review))
        .route("/pending", get(get_pending_reviews))
        .route("/product/{product_id}", get(get_product_reviews))
        .route("/{id}", patch(moderate_review))
}
