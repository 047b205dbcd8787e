pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::analytics;
use crate::atlas::handlers as atlas_handlers;
use crate::content::handlers as content_handlers;
use crate::feedback::handlers as feedback_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let gallery_dir = state.config.gallery_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Heritage map & city selection
        .route("/api/v1/cities", get(atlas_handlers::handle_list_cities))
        .route(
            "/api/v1/cities/locate",
            get(atlas_handlers::handle_locate_city),
        )
        .route(
            "/api/v1/cities/:slug",
            get(atlas_handlers::handle_city_detail),
        )
        .route(
            "/api/v1/cities/:slug/gallery",
            get(atlas_handlers::handle_city_gallery),
        )
        // Feedback
        .route(
            "/api/v1/cities/:slug/feedback",
            get(feedback_handlers::handle_list_feedback)
                .post(feedback_handlers::handle_submit_feedback),
        )
        // Static cultural content
        .route("/api/v1/trivia", get(content_handlers::handle_trivia))
        .route(
            "/api/v1/calendar/:month",
            get(content_handlers::handle_calendar_month),
        )
        .route("/api/v1/etiquette", get(content_handlers::handle_etiquette))
        // Admin analytics
        .route(
            "/api/v1/analytics/feedback",
            get(analytics::handle_feedback_analytics),
        )
        // Trivia quiz
        .route(
            "/api/v1/quiz/sessions",
            post(quiz_handlers::handle_create_session),
        )
        .route(
            "/api/v1/quiz/sessions/:id",
            get(quiz_handlers::handle_get_session),
        )
        .route(
            "/api/v1/quiz/sessions/:id/answer",
            post(quiz_handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/quiz/sessions/:id/next",
            post(quiz_handlers::handle_advance),
        )
        // Curated local gallery files and the single-page dashboard shell
        .nest_service("/gallery", ServeDir::new(gallery_dir))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}
