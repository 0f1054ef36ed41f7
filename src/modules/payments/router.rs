use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    confirm_payment, create_intent, get_payment_method, get_payment_methods, quote_fee,
};

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/methods", get(get_payment_methods))
        .route("/methods/{id}", get(get_payment_method))
        .route("/fee", post(quote_fee))
        .route("/intent", post(create_intent))
        .route("/confirm", post(confirm_payment))
}
