use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    add_item, clear_cart, get_cart, get_or_create_cart, get_recommendations, remove_item,
    update_item,
};

pub fn init_cart_router() -> Router<AppState> {
    Router::new()
        .route("/", post(get_or_create_cart))
        .route("/{id}", get(get_cart))
        .route("/{id}/items", post(add_item).delete(clear_cart))
        .route("/{id}/recommendations", get(get_recommendations))
        .route("/items/{item_id}", patch(update_item).delete(remove_item))
}
