use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{FreeShippingThreshold, ShippingMethod, ShippingQuote};
use super::service;

#[utoipa::path(
    get,
    path = "/api/shipping/methods",
    responses(
        (status = 200, description = "Active shipping methods", body = [ShippingMethod])
    ),
    tag = "Shipping"
)]
pub async fn get_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShippingMethod>>, AppError> {
    let methods = service::get_methods(&state.db).await?;
    Ok(Json(methods))
}

#[utoipa::path(
    get,
    path = "/api/shipping/methods/{id}",
    params(("id" = Uuid, Path, description = "Shipping method ID")),
    responses(
        (status = 200, description = "Shipping method", body = ShippingMethod),
        (status = 404, description = "Shipping method not found")
    ),
    tag = "Shipping"
)]
pub async fn get_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShippingMethod>, AppError> {
    let method = service::get_method_by_id(&state.db, id).await?;
    Ok(Json(method))
}

#[utoipa::path(
    get,
    path = "/api/shipping/methods/{id}/quote",
    params(("id" = Uuid, Path, description = "Shipping method ID")),
    responses(
        (status = 200, description = "Shipping cost quote", body = ShippingQuote),
        (status = 404, description = "Shipping method not found")
    ),
    tag = "Shipping"
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShippingQuote>, AppError> {
    let quote = service::calculate_cost(&state.db, id).await?;
    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/shipping/countries/{country}/methods",
    params(("country" = String, Path, description = "ISO country code, e.g. SK")),
    responses(
        (status = 200, description = "Methods deliverable to the country", body = [ShippingMethod])
    ),
    tag = "Shipping"
)]
pub async fn get_methods_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<ShippingMethod>>, AppError> {
    let methods = service::get_methods_by_country(&state.db, &country).await?;
    Ok(Json(methods))
}

#[utoipa::path(
    get,
    path = "/api/shipping/free-threshold",
    responses(
        (status = 200, description = "Order total above which shipping is free", body = FreeShippingThreshold)
    ),
    tag = "Shipping"
)]
pub async fn get_free_shipping_threshold(
    State(state): State<AppState>,
) -> Result<Json<FreeShippingThreshold>, AppError> {
    let threshold = service::get_free_shipping_threshold(&state.db).await?;
    Ok(Json(FreeShippingThreshold { threshold }))
}
