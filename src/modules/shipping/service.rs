use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{ShippingMethod, ShippingQuote};

#[instrument(skip(db))]
pub async fn get_methods(db: &PgPool) -> Result<Vec<ShippingMethod>, AppError> {
    let methods = sqlx::query_as::<_, ShippingMethod>(
        "SELECT * FROM shipping_methods WHERE is_active = TRUE ORDER BY sort_order",
    )
    .fetch_all(db)
    .await?;

    Ok(methods)
}

#[instrument(skip(db))]
pub async fn get_method_by_id(db: &PgPool, id: Uuid) -> Result<ShippingMethod, AppError> {
    sqlx::query_as::<_, ShippingMethod>("SELECT * FROM shipping_methods WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Shipping method not found")))
}

#[instrument(skip(db))]
pub async fn get_methods_by_country(
    db: &PgPool,
    country: &str,
) -> Result<Vec<ShippingMethod>, AppError> {
    let methods = sqlx::query_as::<_, ShippingMethod>(
        "SELECT * FROM shipping_methods \
         WHERE is_active = TRUE AND $1 = ANY(available_countries) \
         ORDER BY sort_order",
    )
    .bind(country)
    .fetch_all(db)
    .await?;

    Ok(methods)
}

/// Flat per-method pricing today; weight and country based pricing can
/// hang off this quote later.
#[instrument(skip(db))]
pub async fn calculate_cost(db: &PgPool, method_id: Uuid) -> Result<ShippingQuote, AppError> {
    let method = get_method_by_id(db, method_id).await?;

    Ok(ShippingQuote {
        method: method.code,
        price: method.price,
        estimated_days: method.estimated_days,
    })
}

#[instrument(skip(db))]
pub async fn get_free_shipping_threshold(db: &PgPool) -> Result<f64, AppError> {
    let row: Option<(Option<f64>,)> = sqlx::query_as(
        "SELECT (value #>> '{}')::float8 FROM settings WHERE key = 'free_shipping_threshold'",
    )
    .fetch_optional(db)
    .await?;

    Ok(row.and_then(|r| r.0).unwrap_or(0.0))
}
