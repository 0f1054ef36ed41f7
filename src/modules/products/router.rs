use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_featured_products, get_new_products, get_product, get_product_accessories,
    get_product_by_slug, list_products, search_products,
};

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/featured", get(get_featured_products))
        .route("/new", get(get_new_products))
        .route("/search", get(search_products))
        .route("/slug/{slug}", get(get_product_by_slug))
        .route("/{id}", get(get_product))
        .route("/{id}/accessories", get(get_product_accessories))
}
