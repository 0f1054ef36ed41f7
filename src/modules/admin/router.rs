use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_dashboard;

/// Mounted behind the admin role layer in the app router.
pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}
