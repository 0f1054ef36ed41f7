use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::modules::products::model::Product;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    AddItemDto, Cart, CartItem, CartWithItems, GetOrCreateCartDto, UpdateItemDto,
};
use super::service;

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = GetOrCreateCartDto,
    responses(
        (status = 200, description = "Existing or freshly created cart", body = Cart),
        (status = 400, description = "Neither customer_id nor session_id given")
    ),
    tag = "Cart"
)]
pub async fn get_or_create_cart(
    State(state): State<AppState>,
    Json(dto): Json<GetOrCreateCartDto>,
) -> Result<Json<Cart>, AppError> {
    let cart = service::get_or_create_cart(&state.db, dto).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    get,
    path = "/api/cart/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart with items and subtotal", body = CartWithItems),
        (status = 404, description = "Cart not found")
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CartWithItems>, AppError> {
    let cart = service::get_cart_with_items(&state.db, id).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    post,
    path = "/api/cart/{id}/items",
    params(("id" = Uuid, Path, description = "Cart ID")),
    request_body = AddItemDto,
    responses(
        (status = 200, description = "Created or merged cart line", body = CartItem),
        (status = 400, description = "Invalid quantity")
    ),
    tag = "Cart"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<AddItemDto>,
) -> Result<Json<CartItem>, AppError> {
    let item = service::add_item(&state.db, id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/cart/items/{item_id}",
    params(("item_id" = Uuid, Path, description = "Cart item ID")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Updated line; null when quantity 0 removed it", body = CartItem),
        (status = 404, description = "Cart item not found")
    ),
    tag = "Cart"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(dto): Json<UpdateItemDto>,
) -> Result<Json<Option<CartItem>>, AppError> {
    let item = service::update_item(&state.db, item_id, dto.quantity).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    params(("item_id" = Uuid, Path, description = "Cart item ID")),
    responses((status = 204, description = "Line removed")),
    tag = "Cart"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service::remove_item(&state.db, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}/items",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses((status = 204, description = "Cart emptied")),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service::clear_cart(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/cart/{id}/recommendations",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Accessories recommended for the carted products", body = [Product])
    ),
    tag = "Cart"
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service::get_recommendations(&state.db, id).await?;
    Ok(Json(products))
}
