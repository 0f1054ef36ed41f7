use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name_sk: String,
    pub slug: String,
    pub description_sk: Option<String>,
    pub parent_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub products: Vec<crate::modules::products::model::Product>,
}
