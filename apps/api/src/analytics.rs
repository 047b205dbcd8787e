use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::FromRow;

use crate::errors::AppError;
use crate::state::AppState;

/// Cities averaging below this are flagged for attention.
pub const LOW_RATING_THRESHOLD: f64 = 3.0;

/// One GROUP BY bucket as the database returns it.
#[derive(Debug, FromRow)]
pub struct AnalyticsRow {
    pub city: String,
    pub total_reviews: i64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityFeedbackStats {
    pub city: String,
    pub total_reviews: i64,
    pub avg_rating: f64,
    pub low_rated: bool,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    /// Per-city stats, most reviewed first.
    pub cities: Vec<CityFeedbackStats>,
    /// The subset averaging below `LOW_RATING_THRESHOLD`.
    pub low_rated: Vec<CityFeedbackStats>,
}

/// Rounds averages to two decimals and flags low-rated cities. Order is
/// preserved from the query (most reviewed first).
pub fn summarize(rows: Vec<AnalyticsRow>) -> Vec<CityFeedbackStats> {
    rows.into_iter()
        .map(|row| {
            let avg_rating = (row.avg_rating * 100.0).round() / 100.0;
            CityFeedbackStats {
                city: row.city,
                total_reviews: row.total_reviews,
                avg_rating,
                low_rated: avg_rating < LOW_RATING_THRESHOLD,
            }
        })
        .collect()
}

/// GET /api/v1/analytics/feedback
/// Recomputed in full on every request; there is no caching layer.
pub async fn handle_feedback_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let rows: Vec<AnalyticsRow> = sqlx::query_as(
        r#"
        SELECT
            city,
            COUNT(*) AS total_reviews,
            AVG(rating)::float8 AS avg_rating
        FROM user_feedback
        GROUP BY city
        ORDER BY total_reviews DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let cities = summarize(rows);
    let low_rated = cities.iter().filter(|c| c.low_rated).cloned().collect();
    Ok(Json(AnalyticsResponse { cities, low_rated }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(city: &str, total: i64, avg: f64) -> AnalyticsRow {
        AnalyticsRow {
            city: city.to_string(),
            total_reviews: total,
            avg_rating: avg,
        }
    }

    #[test]
    fn flags_only_cities_below_threshold() {
        // ratings {(A,5),(A,3),(B,2)} grouped: A count 2 avg 4.0, B count 1 avg 2.0
        let stats = summarize(vec![row("CityA", 2, 4.0), row("CityB", 1, 2.0)]);
        assert_eq!(stats[0].city, "CityA");
        assert_eq!(stats[0].total_reviews, 2);
        assert_eq!(stats[0].avg_rating, 4.0);
        assert!(!stats[0].low_rated);
        assert_eq!(stats[1].avg_rating, 2.0);
        assert!(stats[1].low_rated);
    }

    #[test]
    fn averages_round_to_two_decimals() {
        let stats = summarize(vec![row("Mandu", 3, 8.0 / 3.0)]);
        assert_eq!(stats[0].avg_rating, 2.67);
        assert!(stats[0].low_rated);
    }

    #[test]
    fn threshold_is_strict() {
        let stats = summarize(vec![row("Ziro", 4, 3.0)]);
        assert!(!stats[0].low_rated);
    }
}
