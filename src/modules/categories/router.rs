use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_category, get_category_by_slug, get_category_with_products, get_subcategories,
    list_categories,
};

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/slug/{slug}", get(get_category_by_slug))
        .route("/{id}", get(get_category))
        .route("/{id}/subcategories", get(get_subcategories))
        .route("/{id}/products", get(get_category_with_products))
}
