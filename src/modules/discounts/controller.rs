use axum::{Json, extract::State};

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{Discount, DiscountQuote, ValidateDiscountDto};
use super::service;

#[utoipa::path(
    post,
    path = "/api/discounts/validate",
    request_body = ValidateDiscountDto,
    responses(
        (status = 200, description = "Code accepted, quote returned", body = DiscountQuote),
        (status = 404, description = "Unknown code"),
        (status = 422, description = "Code known but not applicable")
    ),
    tag = "Discounts"
)]
pub async fn validate_discount(
    State(state): State<AppState>,
    Json(dto): Json<ValidateDiscountDto>,
) -> Result<Json<DiscountQuote>, AppError> {
    let quote = service::validate_discount(&state.db, &dto.code, dto.cart_total).await?;
    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/discounts/active",
    responses(
        (status = 200, description = "Currently running discounts", body = [Discount])
    ),
    tag = "Discounts"
)]
pub async fn get_active_discounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Discount>>, AppError> {
    let discounts = service::get_active_discounts(&state.db).await?;
    Ok(Json(discounts))
}
