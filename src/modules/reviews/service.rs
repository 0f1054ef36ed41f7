use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateReviewDto, ProductReviews, Review, ReviewStatus};

/// Average of approved ratings, rounded to one decimal place.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i32 = ratings.iter().sum();
    let avg = f64::from(sum) / ratings.len() as f64;
    Some((avg * 10.0).round() / 10.0)
}

#[instrument(skip(db, dto))]
pub async fn submit_review(db: &PgPool, dto: CreateReviewDto) -> Result<Review, AppError> {
    let product: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
        .bind(dto.product_id)
        .fetch_optional(db)
        .await?;

    if product.is_none() {
        return Err(AppError::not_found(anyhow!("Product not found")));
    }

    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (product_id, customer_id, author_name, rating, comment_sk, status) \
         VALUES ($1, $2, $3, $4, $5, 'pending') RETURNING *",
    )
    .bind(dto.product_id)
    .bind(dto.customer_id)
    .bind(&dto.author_name)
    .bind(dto.rating)
    .bind(dto.comment_sk.as_deref())
    .fetch_one(db)
    .await?;

    Ok(review)
}

#[instrument(skip(db))]
pub async fn get_product_reviews(
    db: &PgPool,
    product_id: Uuid,
) -> Result<ProductReviews, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE product_id = $1 AND status = 'approved' \
         ORDER BY created_at DESC",
    )
    .bind(product_id)
    .fetch_all(db)
    .await?;

    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    let count = reviews.len() as i64;

    Ok(ProductReviews {
        average_rating: average_rating(&ratings),
        count,
        reviews,
    })
}

#[instrument(skip(db))]
pub async fn get_pending_reviews(db: &PgPool) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE status = 'pending' ORDER BY created_at",
    )
    .fetch_all(db)
    .await?;

    Ok(reviews)
}

#[instrument(skip(db))]
pub async fn moderate_review(
    db: &PgPool,
    review_id: Uuid,
    status: ReviewStatus,
) -> Result<Review, AppError> {
    let review =
        sqlx::query_as::<_, Review>("UPDATE reviews SET status = $2 WHERE id = $1 RETURNING *")
            .bind(review_id)
            .bind(status.as_str())
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Review not found")))?;

    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating_empty() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[5, 4]), Some(4.5));
        assert_eq!(average_rating(&[5, 4, 4]), Some(4.3));
        assert_eq!(average_rating(&[1]), Some(1.0));
    }
}
