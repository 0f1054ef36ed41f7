use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ShippingMethod {
    pub id: Uuid,
    pub code: String,
    pub name_sk: String,
    pub price: f64,
    pub estimated_days: Option<i32>,
    pub available_countries: Vec<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShippingQuote {
    pub method: String,
    pub price: f64,
    pub estimated_days: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FreeShippingThreshold {
    pub threshold: f64,
}
