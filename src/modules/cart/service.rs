use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::products::model::Product;
use crate::utils::errors::AppError;

use super::model::{AddItemDto, Cart, CartItem, CartLine, CartWithItems, GetOrCreateCartDto};

/// Subtotal over VAT-inclusive prices, the figure the storefront shows.
pub fn cart_subtotal(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .map(|line| line.product.price_with_vat * line.item.quantity as f64)
        .sum()
}

/// Find the cart for a customer or anonymous session, creating one when
/// none exists yet.
#[instrument(skip(db))]
pub async fn get_or_create_cart(db: &PgPool, dto: GetOrCreateCartDto) -> Result<Cart, AppError> {
    if dto.customer_id.is_none() && dto.session_id.is_none() {
        return Err(AppError::bad_request(anyhow!(
            "Either customer_id or session_id is required"
        )));
    }

    let existing = if let Some(customer_id) = dto.customer_id {
        sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE customer_id = $1 LIMIT 1")
            .bind(customer_id)
            .fetch_optional(db)
            .await?
    } else {
        sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE session_id = $1 LIMIT 1")
            .bind(dto.session_id.as_deref())
            .fetch_optional(db)
            .await?
    };

    if let Some(cart) = existing {
        return Ok(cart);
    }

    let cart = sqlx::query_as::<_, Cart>(
        "INSERT INTO carts (customer_id, session_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(dto.customer_id)
    .bind(dto.session_id.as_deref())
    .fetch_one(db)
    .await?;

    Ok(cart)
}

#[instrument(skip(db))]
pub async fn get_cart_with_items(db: &PgPool, cart_id: Uuid) -> Result<CartWithItems, AppError> {
    let cart = sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE id = $1")
        .bind(cart_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Cart not found")))?;

    let items = load_lines(db, cart_id).await?;
    let subtotal = cart_subtotal(&items);

    Ok(CartWithItems {
        cart,
        items,
        subtotal,
    })
}

pub(crate) async fn load_lines(db: &PgPool, cart_id: Uuid) -> Result<Vec<CartLine>, AppError> {
    let items =
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .fetch_all(db)
            .await?;

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(item.product_id)
            .fetch_optional(db)
            .await?;

        // A product deleted after being carted simply drops its line.
        if let Some(product) = product {
            lines.push(CartLine { item, product });
        }
    }

    Ok(lines)
}

/// Add a product to the cart; an existing line gets its quantity bumped.
#[instrument(skip(db))]
pub async fn add_item(db: &PgPool, cart_id: Uuid, dto: AddItemDto) -> Result<CartItem, AppError> {
    if dto.quantity < 1 {
        return Err(AppError::bad_request(anyhow!("Quantity must be at least 1")));
    }

    let item = sqlx::query_as::<_, CartItem>(
        "INSERT INTO cart_items (cart_id, product_id, quantity) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (cart_id, product_id) \
         DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity \
         RETURNING *",
    )
    .bind(cart_id)
    .bind(dto.product_id)
    .bind(dto.quantity)
    .fetch_one(db)
    .await?;

    Ok(item)
}

/// Set a line's quantity; zero removes the line.
#[instrument(skip(db))]
pub async fn update_item(
    db: &PgPool,
    item_id: Uuid,
    quantity: i32,
) -> Result<Option<CartItem>, AppError> {
    if quantity < 0 {
        return Err(AppError::bad_request(anyhow!("Quantity must not be negative")));
    }

    if quantity == 0 {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(item_id)
            .execute(db)
            .await?;
        return Ok(None);
    }

    let item = sqlx::query_as::<_, CartItem>(
        "UPDATE cart_items SET quantity = $2 WHERE id = $1 RETURNING *",
    )
    .bind(item_id)
    .bind(quantity)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Cart item not found")))?;

    Ok(Some(item))
}

#[instrument(skip(db))]
pub async fn remove_item(db: &PgPool, item_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM cart_items WHERE id = $1")
        .bind(item_id)
        .execute(db)
        .await?;

    Ok(())
}

#[instrument(skip(db))]
pub async fn clear_cart(db: &PgPool, cart_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
        .bind(cart_id)
        .execute(db)
        .await?;

    Ok(())
}

/// Cross-sell: accessories of carted products, at most five.
#[instrument(skip(db))]
pub async fn get_recommendations(db: &PgPool, cart_id: Uuid) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE is_active = TRUE AND id IN ( \
             SELECT DISTINCT accessory_id FROM product_accessories \
             WHERE product_id IN (SELECT product_id FROM cart_items WHERE cart_id = $1) \
         ) \
         LIMIT 5",
    )
    .bind(cart_id)
    .fetch_all(db)
    .await?;

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cart::model::CartItem;
    use chrono::Utc;

    fn line(price_with_vat: f64, quantity: i32) -> CartLine {
        CartLine {
            item: CartItem {
                id: Uuid::new_v4(),
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                quantity,
                created_at: Utc::now(),
            },
            product: Product {
                id: Uuid::new_v4(),
                sku: "SKU-1".to_string(),
                slug: "slug-1".to_string(),
                name_sk: "Produkt".to_string(),
                description_sk: None,
                category_id: None,
                price_without_vat: price_with_vat / 1.2,
                price_with_vat,
                vat_rate: 20.0,
                vat_mode: "standard".to_string(),
                stock_quantity: 10,
                main_image_url: None,
                is_active: true,
                is_featured: false,
                is_new: false,
                is_bazaar: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_subtotal_sums_vat_inclusive_lines() {
        let lines = vec![line(10.0, 2), line(5.5, 1)];
        assert!((cart_subtotal(&lines) - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subtotal_of_empty_cart_is_zero() {
        assert_eq!(cart_subtotal(&[]), 0.0);
    }
}
