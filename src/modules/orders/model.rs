use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub customer_id: Option<Uuid>,
    pub status: String,
    pub payment_status: String,
    pub subtotal: f64,
    pub vat_total: f64,
    pub shipping_cost: f64,
    pub payment_fee: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub discount_code: Option<String>,
    pub shipping_method_id: Option<Uuid>,
    pub shipping_method_name: Option<String>,
    pub payment_method_id: Option<Uuid>,
    pub payment_method_name: Option<String>,
    pub billing_first_name: String,
    pub billing_last_name: String,
    pub billing_email: String,
    pub billing_phone: String,
    pub billing_street: String,
    pub billing_city: String,
    pub billing_zip: String,
    pub billing_country: String,
    pub billing_company_name: Option<String>,
    pub billing_ico: Option<String>,
    pub billing_dic: Option<String>,
    pub billing_ic_dph: Option<String>,
    pub shipping_first_name: String,
    pub shipping_last_name: String,
    pub shipping_street: String,
    pub shipping_city: String,
    pub shipping_zip: String,
    pub shipping_country: String,
    pub shipping_phone: String,
    pub customer_note: Option<String>,
    pub tracking_number: Option<String>,
    pub transaction_id: Option<String>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub sort_order: i32,
    pub product_id: Option<Uuid>,
    pub product_sku: Option<String>,
    pub product_name: Option<String>,
    pub product_image_url: Option<String>,
    pub quantity: i32,
    pub price_without_vat: f64,
    pub price_with_vat: f64,
    pub vat_rate: f64,
    pub vat_mode: String,
    pub line_total: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BillingDataDto {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "ZIP is required"))]
    pub zip: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub company_name: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ShippingDataDto {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "ZIP is required"))]
    pub zip: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

fn default_country() -> String {
    "SK".to_string()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderDto {
    pub customer_id: Option<Uuid>,
    pub cart_id: Uuid,
    pub shipping_method_id: Uuid,
    pub payment_method_id: Uuid,
    pub discount_code: Option<String>,
    #[validate(nested)]
    pub billing_data: BillingDataDto,
    #[validate(nested)]
    pub shipping_data: Option<ShippingDataDto>,
    pub customer_note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerOrdersParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedOrdersResponse {
    pub data: Vec<Order>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }

    #[test]
    fn test_payment_status_round_trip() {
        let status: PaymentStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, PaymentStatus::Refunded);
        assert_eq!(status.as_str(), "refunded");
    }

    fn item(sort_order: i32, name: &str) -> OrderItem {
        OrderItem {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            sort_order,
            product_id: None,
            product_sku: None,
            product_name: Some(name.to_string()),
            product_image_url: None,
            quantity: 1,
            price_without_vat: 10.0,
            price_with_vat: 12.0,
            vat_rate: 20.0,
            vat_mode: "standard".to_string(),
            line_total: 12.0,
        }
    }

    #[test]
    fn test_items_sort_by_checkout_position_not_id() {
        // Item ids are random UUIDs, so insertion order is carried by
        // sort_order and that is the key reads must use.
        let mut items = vec![item(2, "charger"), item(0, "phone"), item(1, "case")];
        items.sort_by_key(|i| i.sort_order);

        let names: Vec<_> = items
            .iter()
            .map(|i| i.product_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["phone", "case", "charger"]);
    }
}
