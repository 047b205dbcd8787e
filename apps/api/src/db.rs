use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the feedback schema exists. Idempotent, safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_feedback (
            id BIGSERIAL PRIMARY KEY,
            city TEXT NOT NULL,
            name TEXT NOT NULL,
            review TEXT NOT NULL,
            image_urls TEXT NOT NULL DEFAULT '[]',
            rating SMALLINT NOT NULL,
            category TEXT NOT NULL,
            created_on TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_user_feedback_city_created
         ON user_feedback (city, created_on DESC)",
    )
    .execute(pool)
    .await?;

    info!("Feedback schema ensured");
    Ok(())
}
