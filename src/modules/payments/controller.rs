use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    ConfirmPaymentDto, ConfirmPaymentResponse, CreateIntentDto, FeeQuote, FeeQuoteDto,
    PaymentIntent, PaymentMethod,
};
use super::service;

#[utoipa::path(
    get,
    path = "/api/payments/methods",
    responses(
        (status = 200, description = "Active payment methods", body = [PaymentMethod])
    ),
    tag = "Payments"
)]
pub async fn get_payment_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethod>>, AppError> {
    let methods = service::get_methods(&state.db).await?;
    Ok(Json(methods))
}

#[utoipa::path(
    get,
    path = "/api/payments/methods/{id}",
    params(("id" = Uuid, Path, description = "Payment method ID")),
    responses(
        (status = 200, description = "Payment method", body = PaymentMethod),
        (status = 404, description = "Payment method not found")
    ),
    tag = "Payments"
)]
pub async fn get_payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentMethod>, AppError> {
    let method = service::get_method_by_id(&state.db, id).await?;
    Ok(Json(method))
}

#[utoipa::path(
    post,
    path = "/api/payments/fee",
    request_body = FeeQuoteDto,
    responses(
        (status = 200, description = "Fee for paying the given amount with the method", body = FeeQuote),
        (status = 404, description = "Payment method not found")
    ),
    tag = "Payments"
)]
pub async fn quote_fee(
    State(state): State<AppState>,
    Json(dto): Json<FeeQuoteDto>,
) -> Result<Json<FeeQuote>, AppError> {
    let quote = service::quote_fee(&state.db, dto.payment_method_id, dto.amount).await?;
    Ok(Json(quote))
}

#[utoipa::path(
    post,
    path = "/api/payments/intent",
    request_body = CreateIntentDto,
    responses(
        (status = 200, description = "Payment intent for card checkout", body = PaymentIntent),
        (status = 404, description = "Order not found")
    ),
    tag = "Payments"
)]
pub async fn create_intent(
    State(state): State<AppState>,
    Json(dto): Json<CreateIntentDto>,
) -> Result<Json<PaymentIntent>, AppError> {
    let intent =
        service::create_intent(&state.db, dto.order_id, dto.amount, dto.currency).await?;
    Ok(Json(intent))
}

#[utoipa::path(
    post,
    path = "/api/payments/confirm",
    request_body = ConfirmPaymentDto,
    responses(
        (status = 200, description = "Order marked as paid", body = ConfirmPaymentResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Payments"
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    Json(dto): Json<ConfirmPaymentDto>,
) -> Result<Json<ConfirmPaymentResponse>, AppError> {
    let response =
        service::confirm_payment(&state.db, dto.order_id, dto.transaction_id).await?;
    Ok(Json(response))
}
