use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::products::model::Product;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Cart {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Cart line joined with its product, as rendered by the storefront.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartWithItems {
    pub cart: Cart,
    pub items: Vec<CartLine>,
    pub subtotal: f64,
}

/// Either `customer_id` or `session_id` must be present.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GetOrCreateCartDto {
    pub customer_id: Option<Uuid>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemDto {
    pub product_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub quantity: i32,
}
