use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{DashboardStats, LowStockProduct, RecentOrder, ReviewStats};

const LOW_STOCK_THRESHOLD: i32 = 5;
const RECENT_ORDERS_LIMIT: i64 = 5;
const LOW_STOCK_LIMIT: i64 = 20;

async fn count(db: &PgPool, sql: &str) -> Result<i64, AppError> {
    let (n,): (i64,) = sqlx::query_as(sql).fetch_one(db).await?;
    Ok(n)
}

#[instrument(skip(db))]
pub async fn get_dashboard_stats(db: &PgPool) -> Result<DashboardStats, AppError> {
    let total_orders = count(db, "SELECT COUNT(*) FROM orders").await?;
    let orders_this_week = count(
        db,
        "SELECT COUNT(*) FROM orders WHERE created_at >= date_trunc('day', now()) - interval '7 days'",
    )
    .await?;
    let orders_last_week = count(
        db,
        "SELECT COUNT(*) FROM orders \
         WHERE created_at >= date_trunc('day', now()) - interval '14 days' \
           AND created_at < date_trunc('day', now()) - interval '7 days'",
    )
    .await?;
    let pending_payments =
        count(db, "SELECT COUNT(*) FROM orders WHERE payment_status = 'pending'").await?;
    let stale_pending_orders = count(
        db,
        "SELECT COUNT(*) FROM orders \
         WHERE status = 'pending' AND created_at < now() - interval '24 hours'",
    )
    .await?;
    let total_customers = count(db, "SELECT COUNT(*) FROM customers").await?;
    let out_of_stock_count = count(
        db,
        "SELECT COUNT(*) FROM products WHERE is_active = TRUE AND stock_quantity = 0",
    )
    .await?;
    let active_discounts =
        count(db, "SELECT COUNT(*) FROM discounts WHERE is_active = TRUE").await?;

    let low_stock_products = sqlx::query_as::<_, LowStockProduct>(
        "SELECT id, name_sk, sku, stock_quantity FROM products \
         WHERE is_active = TRUE AND stock_quantity > 0 AND stock_quantity <= $1 \
         ORDER BY stock_quantity LIMIT $2",
    )
    .bind(LOW_STOCK_THRESHOLD)
    .bind(LOW_STOCK_LIMIT)
    .fetch_all(db)
    .await?;

    let recent_orders = sqlx::query_as::<_, RecentOrder>(
        "SELECT o.id, o.order_number, \
                trim(o.billing_first_name || ' ' || o.billing_last_name) AS customer_name, \
                o.billing_email AS email, o.total, o.status, o.created_at, \
                (SELECT COUNT(*) FROM order_items oi WHERE oi.order_id = o.id) AS items_count \
         FROM orders o ORDER BY o.created_at DESC LIMIT $1",
    )
    .bind(RECENT_ORDERS_LIMIT)
    .fetch_all(db)
    .await?;

    let pending_reviews =
        count(db, "SELECT COUNT(*) FROM reviews WHERE status = 'pending'").await?;
    let approved_reviews =
        count(db, "SELECT COUNT(*) FROM reviews WHERE status = 'approved'").await?;

    let (month_revenue,): (Option<f64>,) = sqlx::query_as(
        "SELECT SUM(total) FROM orders WHERE created_at >= date_trunc('month', now())",
    )
    .fetch_one(db)
    .await?;

    Ok(DashboardStats {
        total_orders,
        orders_this_week,
        orders_last_week,
        pending_payments,
        stale_pending_orders,
        total_customers,
        out_of_stock_count,
        low_stock_products,
        recent_orders,
        review_stats: ReviewStats {
            pending: pending_reviews,
            approved: approved_reviews,
        },
        active_discounts,
        month_revenue: month_revenue.unwrap_or(0.0),
    })
}
