use axum::Json;

use crate::middleware::auth::{CurrentUser, MaybeUser};
use crate::utils::errors::AppError;

use super::model::{Principal, SessionResponse};

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated principal", body = Principal),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth",
    security(("bearer_auth" = []))
)]
pub async fn me(CurrentUser(principal): CurrentUser) -> Result<Json<Principal>, AppError> {
    Ok(Json(principal))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Session state, authenticated or not", body = SessionResponse)
    ),
    tag = "Auth"
)]
pub async fn session(MaybeUser(principal): MaybeUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: principal.is_some(),
        user: principal,
    })
}
