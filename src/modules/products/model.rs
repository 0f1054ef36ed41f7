use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub slug: String,
    pub name_sk: String,
    pub description_sk: Option<String>,
    pub category_id: Option<Uuid>,
    pub price_without_vat: f64,
    pub price_with_vat: f64,
    pub vat_rate: f64,
    pub vat_mode: String,
    pub stock_quantity: i32,
    pub main_image_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_bazaar: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductFilterParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub category_id: Option<Uuid>,
    pub search: Option<String>,
    pub is_bazaar: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProductsResponse {
    pub data: Vec<Product>,
    pub meta: PaginationMeta,
}
