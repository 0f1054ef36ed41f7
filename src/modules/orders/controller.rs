use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreateOrderDto, CustomerOrdersParams, Order, OrderWithItems, PaginatedOrdersResponse,
    UpdateOrderStatusDto, UpdatePaymentStatusDto,
};
use super::service;

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Order created from cart", body = OrderWithItems),
        (status = 404, description = "Shipping or payment method not found"),
        (status = 422, description = "Cart is empty or input invalid")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> Result<Json<OrderWithItems>, AppError> {
    let order = service::create_order(&state.db, dto).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = OrderWithItems),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderWithItems>, AppError> {
    let order = service::get_order_by_id(&state.db, id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders/customer/{customer_id}",
    params(
        ("customer_id" = Uuid, Path, description = "Customer ID"),
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Orders of the customer, newest first", body = PaginatedOrdersResponse)
    ),
    tag = "Orders"
)]
pub async fn get_orders_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(params): Query<CustomerOrdersParams>,
) -> Result<Json<PaginatedOrdersResponse>, AppError> {
    let orders =
        service::get_orders_by_customer(&state.db, customer_id, &params.pagination).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated", body = Order),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<Json<Order>, AppError> {
    let order =
        service::update_order_status(&state.db, id, dto.status, dto.tracking_number).await?;
    Ok(Json(order))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/payment-status",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Payment status updated", body = Order),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_payment_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdatePaymentStatusDto>,
) -> Result<Json<Order>, AppError> {
    let order = service::update_payment_status(&state.db, id, dto.payment_status).await?;
    Ok(Json(order))
}
