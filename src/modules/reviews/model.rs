use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub author_name: String,
    pub rating: i32,
    pub comment_sk: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// New reviews always enter moderation as pending.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    pub product_id: Uuid,
    pub customer_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Author name is required"))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment_sk: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateReviewDto {
    pub status: ReviewStatus,
}

/// Approved reviews for a product together with the aggregate rating.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductReviews {
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,
    pub count: i64,
}
