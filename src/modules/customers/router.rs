use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_company_info, get_customer_orders, get_profile, lookup_company, update_company_info,
    update_profile,
};

pub fn init_customers_router() -> Router<AppState> {
    Router::new()
        .route("/company-lookup/{ico}", get(lookup_company))
        .route("/{id}", get(get_profile).patch(update_profile))
        .route("/{id}/company", get(get_company_info).put(update_company_info))
        .route("/{id}/orders", get(get_customer_orders))
}
