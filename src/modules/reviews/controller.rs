use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateReviewDto, ModerateReviewDto, ProductReviews, Review};
use super::service;

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review submitted for moderation", body = Review),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<Json<Review>, AppError> {
    let review = service::submit_review(&state.db, dto).await?;
    Ok(Json(review))
}

#[utoipa::path(
    get,
    path = "/api/reviews/product/{product_id}",
    params(("product_id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Approved reviews with aggregate rating", body = ProductReviews)
    ),
    tag = "Reviews"
)]
pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ProductReviews>, AppError> {
    let reviews = service::get_product_reviews(&state.db, product_id).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    get,
    path = "/api/reviews/pending",
    responses(
        (status = 200, description = "Reviews awaiting moderation", body = [Review]),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn get_pending_reviews(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = service::get_pending_reviews(&state.db).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    patch,
    path = "/api/reviews/{id}",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = ModerateReviewDto,
    responses(
        (status = 200, description = "Review moderated", body = Review),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn moderate_review(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<ModerateReviewDto>,
) -> Result<Json<Review>, AppError> {
    let review = service::moderate_review(&state.db, id, dto.status).await?;
    Ok(Json(review))
}
