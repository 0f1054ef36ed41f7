use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::modules::orders::model::{CustomerOrdersParams, PaginatedOrdersResponse};
use crate::modules::orders::service::get_orders_by_customer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CompanyInfo, CompanyLookup, Customer, UpdateCompanyInfoDto, UpdateProfileDto,
};
use super::service;

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer profile", body = Customer),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    let customer = service::get_profile(&state.db, id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    patch,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated customer profile", body = Customer),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = service::update_profile(&state.db, id, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/company",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Billing company details", body = CompanyInfo),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn get_company_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyInfo>, AppError> {
    let info = service::get_company_info(&state.db, id).await?;
    Ok(Json(info))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}/company",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateCompanyInfoDto,
    responses(
        (status = 200, description = "Updated customer profile", body = Customer),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn update_company_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCompanyInfoDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = service::update_company_info(&state.db, id, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    params(
        ("id" = Uuid, Path, description = "Customer ID"),
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Orders of the customer, newest first", body = PaginatedOrdersResponse)
    ),
    tag = "Customers"
)]
pub async fn get_customer_orders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CustomerOrdersParams>,
) -> Result<Json<PaginatedOrdersResponse>, AppError> {
    let orders = get_orders_by_customer(&state.db, id, &params.pagination).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/customers/company-lookup/{ico}",
    params(("ico" = String, Path, description = "Slovak company registration number (8 digits)")),
    responses(
        (status = 200, description = "Company record from the business register", body = CompanyLookup),
        (status = 400, description = "Malformed IČO"),
        (status = 404, description = "No company found")
    ),
    tag = "Customers"
)]
pub async fn lookup_company(
    State(state): State<AppState>,
    Path(ico): Path<String>,
) -> Result<Json<CompanyLookup>, AppError> {
    let company =
        service::lookup_company_by_ico(&state.http, &state.registry_config, &ico).await?;
    Ok(Json(company))
}
