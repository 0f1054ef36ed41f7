use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{Category, CategoryWithProducts};
use super::service;

#[derive(Debug, Deserialize, ToSchema)]
pub struct WithProductsParams {
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories ordered for display", body = [Category])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = service::get_all_categories(&state.db).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, AppError> {
    let category = service::get_category_by_id(&state.db, id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>, AppError> {
    let category = service::get_category_by_slug(&state.db, &slug).await?;
    Ok(Json(category))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/subcategories",
    params(("id" = Uuid, Path, description = "Parent category ID")),
    responses(
        (status = 200, description = "Direct subcategories", body = [Category])
    ),
    tag = "Categories"
)]
pub async fn get_subcategories(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = service::get_subcategories(&state.db, id).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Category ID"),
        ("limit" = Option<i64>, Query, description = "Maximum number of products")
    ),
    responses(
        (status = 200, description = "Category with its active products", body = CategoryWithProducts),
        (status = 404, description = "Category not found")
    ),
    tag = "Categories"
)]
pub async fn get_category_with_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<WithProductsParams>,
) -> Result<Json<CategoryWithProducts>, AppError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let result = service::get_category_with_products(&state.db, id, limit).await?;
    Ok(Json(result))
}
