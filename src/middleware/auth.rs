use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Principal;
use crate::state::AppState;
use crate::utils::errors::AppError;

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Extractor that requires an authenticated principal.
///
/// Rejects with 401 when context resolution yields no principal; the
/// resolver itself never fails, so an invalid or expired token looks
/// exactly like an anonymous request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .auth
            .resolve(authorization_header(parts))
            .await
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required".to_string()))
    }
}

/// Extractor for routes that serve both anonymous and signed-in
/// customers. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Principal>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            state.auth.resolve(authorization_header(parts)).await,
        ))
    }
}
