use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub code: String,
    pub name_sk: String,
    pub fee_type: String,
    pub fee_fixed: f64,
    pub fee_percentage: f64,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeeQuoteDto {
    pub payment_method_id: Uuid,
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeeQuote {
    pub method: String,
    pub fee_type: String,
    pub fee: f64,
    pub total: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIntentDto {
    pub order_id: Uuid,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentIntent {
    pub order_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub client_secret: String,
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmPaymentDto {
    pub order_id: Uuid,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmPaymentResponse {
    pub success: bool,
    pub order_id: Uuid,
    pub payment_status: String,
}
