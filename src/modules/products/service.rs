use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{PaginatedProductsResponse, Product, ProductFilterParams};

// Listing filters are expressed as null-tolerant predicates so one
// statement covers every filter combination.
const LIST_WHERE: &str = "is_active = TRUE \
    AND ($1::uuid IS NULL OR category_id = $1) \
    AND ($2::boolean IS NULL OR is_bazaar = $2) \
    AND ($3::text IS NULL OR name_sk ILIKE '%' || $3 || '%' \
        OR description_sk ILIKE '%' || $3 || '%')";

#[instrument(skip(db))]
pub async fn get_all_products(
    db: &PgPool,
    params: ProductFilterParams,
) -> Result<PaginatedProductsResponse, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT * FROM products WHERE {LIST_WHERE} \
         ORDER BY created_at DESC LIMIT $4 OFFSET $5"
    ))
    .bind(params.category_id)
    .bind(params.is_bazaar)
    .bind(params.search.as_deref())
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    let total: (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM products WHERE {LIST_WHERE}"))
            .bind(params.category_id)
            .bind(params.is_bazaar)
            .bind(params.search.as_deref())
            .fetch_one(db)
            .await?;

    let meta = PaginationMeta::new(total.0, &params.pagination, products.len());

    Ok(PaginatedProductsResponse {
        data: products,
        meta,
    })
}

#[instrument(skip(db))]
pub async fn get_product_by_id(db: &PgPool, id: Uuid) -> Result<Product, AppError> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Product not found")))
}

#[instrument(skip(db))]
pub async fn get_product_by_slug(db: &PgPool, slug: &str) -> Result<Product, AppError> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE slug = $1")
        .bind(slug)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Product not found")))
}

/// Cross-sell accessories of a product, in curated order.
#[instrument(skip(db))]
pub async fn get_product_accessories(
    db: &PgPool,
    product_id: Uuid,
) -> Result<Vec<Product>, AppError> {
    let accessories = sqlx::query_as::<_, Product>(
        "SELECT p.* FROM product_accessories pa \
         JOIN products p ON p.id = pa.accessory_id \
         WHERE pa.product_id = $1 AND p.is_active = TRUE \
         ORDER BY pa.sort_order",
    )
    .bind(product_id)
    .fetch_all(db)
    .await?;

    Ok(accessories)
}

#[instrument(skip(db))]
pub async fn get_products_by_category(
    db: &PgPool,
    category_id: Uuid,
    limit: i64,
) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE category_id = $1 AND is_active = TRUE \
         ORDER BY created_at DESC LIMIT $2",
    )
    .bind(category_id)
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(products)
}

#[instrument(skip(db))]
pub async fn get_featured_products(db: &PgPool, limit: i64) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE is_featured = TRUE AND is_active = TRUE \
         ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(products)
}

#[instrument(skip(db))]
pub async fn get_new_products(db: &PgPool, limit: i64) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE is_new = TRUE AND is_active = TRUE \
         ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(products)
}

/// Free-text search over name, description and SKU.
#[instrument(skip(db))]
pub async fn search_products(
    db: &PgPool,
    query: &str,
    limit: i64,
) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE is_active = TRUE \
           AND (name_sk ILIKE '%' || $1 || '%' \
                OR description_sk ILIKE '%' || $1 || '%' \
                OR sku ILIKE '%' || $1 || '%') \
         LIMIT $2",
    )
    .bind(query)
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(products)
}
