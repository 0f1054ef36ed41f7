use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{PaginatedProductsResponse, Product, ProductFilterParams};
use super::service;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<i64>,
}

fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, 100)
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("category_id" = Option<Uuid>, Query, description = "Filter by category"),
        ("search" = Option<String>, Query, description = "Match against name and description"),
        ("is_bazaar" = Option<bool>, Query, description = "Filter bazaar (second-hand) products")
    ),
    responses(
        (status = 200, description = "Paginated list of active products", body = PaginatedProductsResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    filters: Result<Query<ProductFilterParams>, QueryRejection>,
) -> Result<Json<PaginatedProductsResponse>, AppError> {
    let Query(filters) = filters
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;

    let products = service::get_all_products(&state.db, filters).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = service::get_product_by_id(&state.db, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = service::get_product_by_slug(&state.db, &slug).await?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/accessories",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Accessories offered with this product", body = [Product])
    ),
    tag = "Products"
)]
pub async fn get_product_accessories(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Product>>, AppError> {
    let accessories = service::get_product_accessories(&state.db, id).await?;
    Ok(Json(accessories))
}

#[utoipa::path(
    get,
    path = "/api/products/featured",
    params(("limit" = Option<i64>, Query, description = "Maximum number of products")),
    responses(
        (status = 200, description = "Featured products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn get_featured_products(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products =
        service::get_featured_products(&state.db, clamp_limit(params.limit, 10)).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/new",
    params(("limit" = Option<i64>, Query, description = "Maximum number of products")),
    responses(
        (status = 200, description = "Newly added products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn get_new_products(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service::get_new_products(&state.db, clamp_limit(params.limit, 10)).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(
        ("q" = String, Query, description = "Search phrase"),
        ("limit" = Option<i64>, Query, description = "Maximum number of products")
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products =
        service::search_products(&state.db, &params.q, clamp_limit(params.limit, 20)).await?;
    Ok(Json(products))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, 10), 10);
        assert_eq!(clamp_limit(Some(5), 10), 5);
        assert_eq!(clamp_limit(Some(0), 10), 1);
        assert_eq!(clamp_limit(Some(1000), 10), 100);
    }
}
