use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Discount {
    pub id: Uuid,
    pub code: String,
    pub description_sk: Option<String>,
    pub discount_type: String,
    pub value: f64,
    pub min_order_amount: Option<f64>,
    pub usage_limit: Option<i32>,
    pub is_active: bool,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateDiscountDto {
    pub code: String,
    pub cart_total: f64,
}

/// Quote returned to the storefront for an accepted code.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiscountQuote {
    pub code: String,
    pub discount_type: String,
    pub value: f64,
    pub amount: f64,
    pub description: Option<String>,
}
