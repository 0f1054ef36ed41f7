use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct LowStockProduct {
    pub id: Uuid,
    pub name_sk: String,
    pub sku: String,
    pub stock_quantity: i32,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct RecentOrder {
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub email: String,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewStats {
    pub pending: i64,
    pub approved: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub orders_this_week: i64,
    pub orders_last_week: i64,
    pub pending_payments: i64,
    pub stale_pending_orders: i64,
    pub total_customers: i64,
    pub out_of_stock_count: i64,
    pub low_stock_products: Vec<LowStockProduct>,
    pub recent_orders: Vec<RecentOrder>,
    pub review_stats: ReviewStats,
    pub active_discounts: i64,
    pub month_revenue: f64,
}
