use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::feedback::images::upload_review_image;
use crate::feedback::models::{FeedbackCategory, FeedbackEntry};
use crate::feedback::store::{self, NewFeedback};
use crate::feedback::validation::{normalize_reviewer, validate_rating, validate_review};
use crate::state::AppState;

#[derive(Serialize)]
pub struct FeedbackListResponse {
    pub city: String,
    pub entries: Vec<FeedbackEntry>,
}

/// GET /api/v1/cities/:slug/feedback
/// Reviews for one city, newest first. Zero reviews is an empty list;
/// a store failure is a 500 — the client can tell the two apart.
pub async fn handle_list_feedback(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<FeedbackListResponse>, AppError> {
    let city = state
        .atlas
        .by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown city '{slug}'")))?;

    let entries = store::fetch_for_city(&state.db, &city.name).await?;
    Ok(Json(FeedbackListResponse {
        city: city.name.clone(),
        entries,
    }))
}

#[derive(Serialize)]
pub struct UploadFailure {
    pub file: String,
    pub reason: String,
}

#[derive(Serialize)]
pub struct SubmitFeedbackResponse {
    pub city: String,
    pub image_urls: Vec<String>,
    /// Per-file upload failures. The review is still saved with whichever
    /// uploads succeeded.
    pub failed_uploads: Vec<UploadFailure>,
}

/// POST /api/v1/cities/:slug/feedback
/// Multipart form: `name` (optional), `review`, `rating`, `category`, and
/// any number of `photos` file parts.
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SubmitFeedbackResponse>, AppError> {
    let city = state
        .atlas
        .by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown city '{slug}'")))?
        .clone();

    let mut name = String::new();
    let mut review = String::new();
    let mut rating: Option<i16> = None;
    let mut category: Option<FeedbackCategory> = None;
    let mut photos: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = read_text(field).await?,
            "review" => review = read_text(field).await?,
            "rating" => rating = Some(validate_rating(&read_text(field).await?)?),
            "category" => {
                let raw = read_text(field).await?;
                category = Some(FeedbackCategory::parse(&raw).ok_or_else(|| {
                    AppError::Validation(format!("Unknown feedback category '{raw}'"))
                })?);
            }
            "photos" => {
                let filename = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read '{filename}': {e}")))?;
                photos.push((filename, data));
            }
            _ => {} // ignore unknown fields
        }
    }

    let review = validate_review(&review)?;
    let name = normalize_reviewer(&name);
    let rating = rating.ok_or_else(|| AppError::Validation("Rating is required".to_string()))?;
    let category =
        category.ok_or_else(|| AppError::Validation("Feedback category is required".to_string()))?;

    // Each photo uploads independently: one failure is reported but does not
    // block the rest, and the review is saved with whatever succeeded.
    let mut image_urls = Vec::new();
    let mut failed_uploads = Vec::new();
    for (filename, data) in photos {
        match upload_review_image(
            &state.s3,
            &state.config.s3_bucket,
            &state.config.s3_endpoint,
            &city.slug,
            &filename,
            data,
        )
        .await
        {
            Ok(url) => image_urls.push(url),
            Err(e) => {
                warn!("Review photo '{filename}' failed to upload: {e}");
                failed_uploads.push(UploadFailure {
                    file: filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    store::submit(
        &state.db,
        NewFeedback {
            city: &city.name,
            name: &name,
            review: &review,
            image_urls: &image_urls,
            rating,
            category,
        },
    )
    .await?;

    Ok(Json(SubmitFeedbackResponse {
        city: city.name,
        image_urls,
        failed_uploads,
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form field: {e}")))
}
