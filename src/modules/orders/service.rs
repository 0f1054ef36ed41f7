use anyhow::anyhow;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::discounts::service::discount_amount;
use crate::modules::payments::model::PaymentMethod;
use crate::modules::payments::service::payment_fee;
use crate::modules::shipping::model::ShippingMethod;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{
    CreateOrderDto, Order, OrderItem, OrderStatus, OrderWithItems, PaginatedOrdersResponse,
    PaymentStatus,
};

/// Cart line joined with the product columns an order snapshot needs.
#[derive(Debug, FromRow)]
struct CartLineRow {
    product_id: Uuid,
    quantity: i32,
    sku: String,
    name_sk: String,
    main_image_url: Option<String>,
    price_without_vat: f64,
    price_with_vat: f64,
    vat_rate: f64,
    vat_mode: String,
}

/// Allocate the next sequential order number. Runs inside the creation
/// transaction so concurrent checkouts cannot collide.
async fn next_order_number(tx: &mut Transaction<'_, Postgres>) -> Result<String, AppError> {
    let (next,): (i64,) = sqlx::query_as(
        "SELECT (value #>> '{}')::bigint FROM settings \
         WHERE key = 'order_next_number' FOR UPDATE",
    )
    .fetch_one(&mut **tx)
    .await?;

    sqlx::query("UPDATE settings SET value = to_jsonb($1::bigint) WHERE key = 'order_next_number'")
        .bind(next + 1)
        .execute(&mut **tx)
        .await?;

    Ok(format_order_number(next))
}

pub fn format_order_number(sequence: i64) -> String {
    format!("OBJ{:06}", sequence)
}

#[instrument(skip(db, dto))]
pub async fn create_order(db: &PgPool, dto: CreateOrderDto) -> Result<OrderWithItems, AppError> {
    let mut tx = db.begin().await?;

    let lines = sqlx::query_as::<_, CartLineRow>(
        "SELECT ci.product_id, ci.quantity, p.sku, p.name_sk, p.main_image_url, \
                p.price_without_vat, p.price_with_vat, p.vat_rate, p.vat_mode \
         FROM cart_items ci \
         JOIN products p ON p.id = ci.product_id \
         WHERE ci.cart_id = $1",
    )
    .bind(dto.cart_id)
    .fetch_all(&mut *tx)
    .await?;

    if lines.is_empty() {
        return Err(AppError::unprocessable(anyhow!("Cart is empty")));
    }

    let shipping_method =
        sqlx::query_as::<_, ShippingMethod>("SELECT * FROM shipping_methods WHERE id = $1")
            .bind(dto.shipping_method_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Shipping method not found")))?;

    let payment_method =
        sqlx::query_as::<_, PaymentMethod>("SELECT * FROM payment_methods WHERE id = $1")
            .bind(dto.payment_method_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Payment method not found")))?;

    let mut subtotal = 0.0;
    let mut vat_total = 0.0;
    for line in &lines {
        let qty = f64::from(line.quantity);
        subtotal += line.price_without_vat * qty;
        vat_total += (line.price_with_vat - line.price_without_vat) * qty;
    }
    let goods_total = subtotal + vat_total;

    let shipping_cost = shipping_method.price;
    let fee = payment_fee(&payment_method, goods_total);

    let mut applied_discount = 0.0;
    let discount_code = dto.discount_code.map(|c| c.trim().to_uppercase());
    if let Some(code) = discount_code.as_deref() {
        let discount: Option<(String, f64)> = sqlx::query_as(
            "SELECT discount_type, value FROM discounts WHERE code = $1 AND is_active = TRUE",
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some((discount_type, value)) = discount {
            applied_discount = discount_amount(&discount_type, value, goods_total);
        }
    }

    let total = goods_total + shipping_cost + fee - applied_discount;

    let order_number = next_order_number(&mut tx).await?;

    let billing = &dto.billing_data;
    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders ( \
            order_number, customer_id, status, payment_status, \
            subtotal, vat_total, shipping_cost, payment_fee, discount_amount, total, \
            discount_code, shipping_method_id, shipping_method_name, \
            payment_method_id, payment_method_name, \
            billing_first_name, billing_last_name, billing_email, billing_phone, \
            billing_street, billing_city, billing_zip, billing_country, \
            billing_company_name, billing_ico, billing_dic, billing_ic_dph, \
            shipping_first_name, shipping_last_name, shipping_street, shipping_city, \
            shipping_zip, shipping_country, shipping_phone, customer_note \
         ) VALUES ( \
            $1, $2, 'pending', 'pending', \
            $3, $4, $5, $6, $7, $8, \
            $9, $10, $11, $12, $13, \
            $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, \
            $26, $27, $28, $29, $30, $31, $32, $33 \
         ) RETURNING *",
    )
    .bind(&order_number)
    .bind(dto.customer_id)
    .bind(subtotal)
    .bind(vat_total)
    .bind(shipping_cost)
    .bind(fee)
    .bind(applied_discount)
    .bind(total)
    .bind(discount_code.as_deref())
    .bind(dto.shipping_method_id)
    .bind(&shipping_method.name_sk)
    .bind(dto.payment_method_id)
    .bind(&payment_method.name_sk)
    .bind(&billing.first_name)
    .bind(&billing.last_name)
    .bind(&billing.email)
    .bind(&billing.phone)
    .bind(&billing.street)
    .bind(&billing.city)
    .bind(&billing.zip)
    .bind(&billing.country)
    .bind(billing.company_name.as_deref())
    .bind(billing.ico.as_deref())
    .bind(billing.dic.as_deref())
    .bind(billing.ic_dph.as_deref())
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.first_name.as_str(), |s| s.first_name.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.last_name.as_str(), |s| s.last_name.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.street.as_str(), |s| s.street.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.city.as_str(), |s| s.city.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.zip.as_str(), |s| s.zip.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.country.as_str(), |s| s.country.as_str()),
    )
    .bind(
        dto.shipping_data
            .as_ref()
            .map_or(billing.phone.as_str(), |s| s.phone.as_str()),
    )
    .bind(dto.customer_note.as_deref())
    .fetch_one(&mut *tx)
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let line_total = line.price_with_vat * f64::from(line.quantity);
        let item = sqlx::query_as::<_, OrderItem>(
            "INSERT INTO order_items ( \
                order_id, sort_order, product_id, product_sku, product_name, product_image_url, \
                quantity, price_without_vat, price_with_vat, vat_rate, vat_mode, line_total \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(order.id)
        .bind(index as i32)
        .bind(line.product_id)
        .bind(&line.sku)
        .bind(&line.name_sk)
        .bind(line.main_image_url.as_deref())
        .bind(line.quantity)
        .bind(line.price_without_vat)
        .bind(line.price_with_vat)
        .bind(line.vat_rate)
        .bind(&line.vat_mode)
        .bind(line_total)
        .fetch_one(&mut *tx)
        .await?;
        items.push(item);
    }

    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
        .bind(dto.cart_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(OrderWithItems { order, items })
}

#[instrument(skip(db))]
pub async fn get_order_by_id(db: &PgPool, id: Uuid) -> Result<OrderWithItems, AppError> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Order not found")))?;

    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT * FROM order_items WHERE order_id = $1 ORDER BY sort_order",
    )
    .bind(id)
    .fetch_all(db)
    .await?;

    Ok(OrderWithItems { order, items })
}

#[instrument(skip(db))]
pub async fn get_orders_by_customer(
    db: &PgPool,
    customer_id: Uuid,
    params: &PaginationParams,
) -> Result<PaginatedOrdersResponse, AppError> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE customer_id = $1")
        .bind(customer_id)
        .fetch_one(db)
        .await?;

    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE customer_id = $1 \
         ORDER BY created_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(customer_id)
    .bind(params.limit())
    .bind(params.offset())
    .fetch_all(db)
    .await?;

    let meta = PaginationMeta::new(total, params, orders.len());
    Ok(PaginatedOrdersResponse { data: orders, meta })
}

#[instrument(skip(db))]
pub async fn update_order_status(
    db: &PgPool,
    order_id: Uuid,
    status: OrderStatus,
    tracking_number: Option<String>,
) -> Result<Order, AppError> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders SET \
            status = $2, \
            tracking_number = COALESCE($3, tracking_number), \
            shipped_at = CASE WHEN $2 = 'shipped' THEN now() ELSE shipped_at END, \
            delivered_at = CASE WHEN $2 = 'delivered' THEN now() ELSE delivered_at END \
         WHERE id = $1 RETURNING *",
    )
    .bind(order_id)
    .bind(status.as_str())
    .bind(tracking_number.as_deref())
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Order not found")))?;

    Ok(order)
}

#[instrument(skip(db))]
pub async fn update_payment_status(
    db: &PgPool,
    order_id: Uuid,
    payment_status: PaymentStatus,
) -> Result<Order, AppError> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders SET \
            payment_status = $2, \
            paid_at = CASE WHEN $2 = 'paid' THEN now() ELSE paid_at END \
         WHERE id = $1 RETURNING *",
    )
    .bind(order_id)
    .bind(payment_status.as_str())
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Order not found")))?;

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_is_zero_padded() {
        assert_eq!(format_order_number(1), "OBJ000001");
        assert_eq!(format_order_number(42), "OBJ000042");
        assert_eq!(format_order_number(1_234_567), "OBJ1234567");
    }
}
