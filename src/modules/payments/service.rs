use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{ConfirmPaymentResponse, FeeQuote, PaymentIntent, PaymentMethod};

/// Fee of a payment method applied to an order amount.
pub fn payment_fee(method: &PaymentMethod, amount: f64) -> f64 {
    match method.fee_type.as_str() {
        "percentage" => amount * method.fee_percentage / 100.0,
        _ => method.fee_fixed,
    }
}

#[instrument(skip(db))]
pub async fn get_methods(db: &PgPool) -> Result<Vec<PaymentMethod>, AppError> {
    let methods = sqlx::query_as::<_, PaymentMethod>(
        "SELECT * FROM payment_methods WHERE is_active = TRUE ORDER BY sort_order",
    )
    .fetch_all(db)
    .await?;

    Ok(methods)
}

#[instrument(skip(db))]
pub async fn get_method_by_id(db: &PgPool, id: Uuid) -> Result<PaymentMethod, AppError> {
    sqlx::query_as::<_, PaymentMethod>("SELECT * FROM payment_methods WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Payment method not found")))
}

#[instrument(skip(db))]
pub async fn quote_fee(db: &PgPool, method_id: Uuid, amount: f64) -> Result<FeeQuote, AppError> {
    let method = get_method_by_id(db, method_id).await?;
    let fee = payment_fee(&method, amount);

    Ok(FeeQuote {
        method: method.code,
        fee_type: method.fee_type,
        fee,
        total: amount + fee,
    })
}

/// Provider stub: issues a client secret for card checkout. A real
/// gateway integration would replace only this function.
#[instrument(skip(db))]
pub async fn create_intent(
    db: &PgPool,
    order_id: Uuid,
    amount: f64,
    currency: String,
) -> Result<PaymentIntent, AppError> {
    let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(db)
        .await?;

    if exists.is_none() {
        return Err(AppError::not_found(anyhow!("Order not found")));
    }

    Ok(PaymentIntent {
        order_id,
        amount,
        currency,
        client_secret: format!("pi_test_{}", Uuid::new_v4().simple()),
        status: "requires_payment_method".to_string(),
    })
}

/// Mark an order paid and store the gateway transaction id.
#[instrument(skip(db))]
pub async fn confirm_payment(
    db: &PgPool,
    order_id: Uuid,
    transaction_id: Option<String>,
) -> Result<ConfirmPaymentResponse, AppError> {
    let updated = sqlx::query(
        "UPDATE orders \
         SET payment_status = 'paid', paid_at = now(), transaction_id = $2 \
         WHERE id = $1",
    )
    .bind(order_id)
    .bind(transaction_id.as_deref())
    .execute(db)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(AppError::not_found(anyhow!("Order not found")));
    }

    Ok(ConfirmPaymentResponse {
        success: true,
        order_id,
        payment_status: "paid".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(fee_type: &str, fee_fixed: f64, fee_percentage: f64) -> PaymentMethod {
        PaymentMethod {
            id: Uuid::new_v4(),
            code: "card".to_string(),
            name_sk: "Karta".to_string(),
            fee_type: fee_type.to_string(),
            fee_fixed,
            fee_percentage,
            is_active: true,
            sort_order: 0,
        }
    }

    #[test]
    fn test_fixed_fee() {
        let m = method("fixed", 1.5, 0.0);
        assert_eq!(payment_fee(&m, 100.0), 1.5);
    }

    #[test]
    fn test_percentage_fee() {
        let m = method("percentage", 0.0, 2.5);
        assert_eq!(payment_fee(&m, 200.0), 5.0);
    }

    #[test]
    fn test_unknown_fee_type_falls_back_to_fixed() {
        let m = method("surcharge", 0.9, 50.0);
        assert_eq!(payment_fee(&m, 100.0), 0.9);
    }
}
