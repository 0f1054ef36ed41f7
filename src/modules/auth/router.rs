use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{me, session};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/session", get(session))
}
