use sqlx::PgPool;
use tracing::info;

use crate::feedback::models::{encode_image_urls, FeedbackCategory, FeedbackEntry, FeedbackRow};

/// A validated review ready for insertion.
pub struct NewFeedback<'a> {
    pub city: &'a str,
    pub name: &'a str,
    pub review: &'a str,
    pub image_urls: &'a [String],
    pub rating: i16,
    pub category: FeedbackCategory,
}

/// Inserts one review row. Positional binds throughout; no retry — a
/// failure surfaces to the caller as-is.
pub async fn submit(pool: &PgPool, feedback: NewFeedback<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_feedback (city, name, review, image_urls, rating, category)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(feedback.city)
    .bind(feedback.name)
    .bind(feedback.review)
    .bind(encode_image_urls(feedback.image_urls))
    .bind(feedback.rating)
    .bind(feedback.category.as_str())
    .execute(pool)
    .await?;

    info!("Saved feedback for {}", feedback.city);
    Ok(())
}

/// All reviews for one city, newest first. An empty result is `Ok(vec![])`;
/// a store failure is an `Err` — the two are never conflated.
pub async fn fetch_for_city(pool: &PgPool, city: &str) -> Result<Vec<FeedbackEntry>, sqlx::Error> {
    let rows: Vec<FeedbackRow> = sqlx::query_as(
        r#"
        SELECT name, review, image_urls, rating, category, created_on
        FROM user_feedback
        WHERE city = $1
        ORDER BY created_on DESC
        "#,
    )
    .bind(city)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(FeedbackEntry::from).collect())
}
