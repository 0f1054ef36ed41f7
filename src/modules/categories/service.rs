use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::products::service::get_products_by_category;
use crate::utils::errors::AppError;

use super::model::{Category, CategoryWithProducts};

#[instrument(skip(db))]
pub async fn get_all_categories(db: &PgPool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT * FROM categories ORDER BY sort_order, name_sk",
    )
    .fetch_all(db)
    .await?;

    Ok(categories)
}

#[instrument(skip(db))]
pub async fn get_category_by_id(db: &PgPool, id: Uuid) -> Result<Category, AppError> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))
}

#[instrument(skip(db))]
pub async fn get_category_by_slug(db: &PgPool, slug: &str) -> Result<Category, AppError> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
        .bind(slug)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))
}

#[instrument(skip(db))]
pub async fn get_subcategories(db: &PgPool, parent_id: Uuid) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE parent_id = $1 ORDER BY sort_order, name_sk",
    )
    .bind(parent_id)
    .fetch_all(db)
    .await?;

    Ok(categories)
}

#[instrument(skip(db))]
pub async fn get_category_with_products(
    db: &PgPool,
    id: Uuid,
    limit: i64,
) -> Result<CategoryWithProducts, AppError> {
    let category = get_category_by_id(db, id).await?;
    let products = get_products_by_category(db, id, limit).await?;

    Ok(CategoryWithProducts { category, products })
}
