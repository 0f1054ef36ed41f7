//! Role-based authorization for admin surfaces.
//!
//! Two styles are available, mirroring how handlers consume them:
//! a route layer (`require_admin`) for whole admin routers, and the
//! [`RequireAdmin`] extractor for single handlers that also want the
//! principal.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::model::Principal;
use crate::state::AppState;
use crate::utils::errors::AppError;

async fn admin_from_parts(parts: &mut Parts, state: &AppState) -> Result<Principal, AppError> {
    let CurrentUser(principal) = CurrentUser::from_request_parts(parts, state).await?;

    if !principal.is_admin() {
        return Err(AppError::forbidden(
            "Administrator privileges required".to_string(),
        ));
    }

    Ok(principal)
}

/// Route layer that rejects non-admin principals.
///
/// ```rust,ignore
/// Router::new()
///     .nest("/admin", init_admin_router())
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    match admin_from_parts(&mut parts, &state).await {
        Ok(_) => next.run(Request::from_parts(parts, body)).await,
        Err(err) => err.into_response(),
    }
}

/// Extractor variant for handlers that need the admin principal itself.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Principal);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        admin_from_parts(parts, state).await.map(RequireAdmin)
    }
}
