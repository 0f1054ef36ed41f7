use anyhow::anyhow;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Discount, DiscountQuote};

/// Percentage discounts apply to the VAT-inclusive total, fixed ones
/// are taken at face value.
pub fn discount_amount(discount_type: &str, value: f64, cart_total: f64) -> f64 {
    if discount_type == "percentage" {
        cart_total * value / 100.0
    } else {
        value
    }
}

/// Validate a code against a cart total and compute the quote.
///
/// Codes are stored uppercased; the check covers the active flag, the
/// validity window, the minimum order amount and the usage limit
/// (counted over orders that recorded the code).
#[instrument(skip(db))]
pub async fn validate_discount(
    db: &PgPool,
    code: &str,
    cart_total: f64,
) -> Result<DiscountQuote, AppError> {
    let discount = sqlx::query_as::<_, Discount>(
        "SELECT * FROM discounts WHERE code = $1 AND is_active = TRUE",
    )
    .bind(code.to_uppercase())
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Discount code not found")))?;

    let now = Utc::now();
    if discount.valid_from.is_some_and(|from| from > now) {
        return Err(AppError::unprocessable(anyhow!(
            "Discount code is not yet valid"
        )));
    }
    if discount.valid_until.is_some_and(|until| until < now) {
        return Err(AppError::unprocessable(anyhow!(
            "Discount code has expired"
        )));
    }

    if let Some(min_order_amount) = discount.min_order_amount
        && cart_total < min_order_amount
    {
        return Err(AppError::unprocessable(anyhow!(
            "Minimum order amount is {} EUR",
            min_order_amount
        )));
    }

    if let Some(usage_limit) = discount.usage_limit {
        let used: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM orders WHERE discount_code = $1")
                .bind(&discount.code)
                .fetch_one(db)
                .await?;

        if used.0 >= usage_limit as i64 {
            return Err(AppError::unprocessable(anyhow!(
                "Discount code usage limit reached"
            )));
        }
    }

    let amount = discount_amount(&discount.discount_type, discount.value, cart_total);

    Ok(DiscountQuote {
        code: discount.code,
        discount_type: discount.discount_type,
        value: discount.value,
        amount,
        description: discount.description_sk,
    })
}

/// Discounts currently inside their validity window, newest first.
#[instrument(skip(db))]
pub async fn get_active_discounts(db: &PgPool) -> Result<Vec<Discount>, AppError> {
    let discounts = sqlx::query_as::<_, Discount>(
        "SELECT * FROM discounts \
         WHERE is_active = TRUE \
           AND (valid_from IS NULL OR valid_from <= now()) \
           AND (valid_until IS NULL OR valid_until >= now()) \
         ORDER BY created_at DESC",
    )
    .fetch_all(db)
    .await?;

    Ok(discounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount_amount() {
        assert_eq!(discount_amount("percentage", 10.0, 250.0), 25.0);
        assert_eq!(discount_amount("percentage", 100.0, 80.0), 80.0);
    }

    #[test]
    fn test_fixed_discount_amount_ignores_total() {
        assert_eq!(discount_amount("fixed", 5.0, 250.0), 5.0);
        assert_eq!(discount_amount("fixed", 5.0, 10.0), 5.0);
    }

    #[test]
    fn test_zero_value_yields_zero() {
        assert_eq!(discount_amount("percentage", 0.0, 99.0), 0.0);
        assert_eq!(discount_amount("fixed", 0.0, 99.0), 0.0);
    }
}
