use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_free_shipping_threshold, get_method, get_methods, get_methods_by_country, get_quote,
};

pub fn init_shipping_router() -> Router<AppState> {
    Router::new()
        .route("/methods", get(get_methods))
        .route("/methods/{id}", get(get_method))
        .route("/methods/{id}/quote", get(get_quote))
        .route("/countries/{country}/methods", get(get_methods_by_country))
        .route("/free-threshold", get(get_free_shipping_threshold))
}
