use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::atlas::HeritageCity;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CityFilterQuery {
    /// Comma-separated art-form tags; absent means no filter.
    pub art_forms: Option<String>,
}

#[derive(Serialize)]
pub struct CityListResponse {
    pub cities: Vec<HeritageCity>,
    /// Every distinct art form in the atlas, for the sidebar filter.
    pub art_forms: Vec<String>,
}

pub(crate) fn parse_art_forms(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// GET /api/v1/cities
pub async fn handle_list_cities(
    State(state): State<AppState>,
    Query(query): Query<CityFilterQuery>,
) -> Json<CityListResponse> {
    let filter = parse_art_forms(&query.art_forms);
    let cities = state
        .atlas
        .filtered(&filter)
        .into_iter()
        .cloned()
        .collect();
    let art_forms = state
        .atlas
        .art_forms()
        .into_iter()
        .map(String::from)
        .collect();
    Json(CityListResponse { cities, art_forms })
}

#[derive(Debug, Deserialize)]
pub struct LocateQuery {
    pub lat: f64,
    pub lon: f64,
    pub art_forms: Option<String>,
}

/// GET /api/v1/cities/locate
/// Resolves a clicked map coordinate to a city, or 404 when the click is
/// outside tolerance of every visible marker.
pub async fn handle_locate_city(
    State(state): State<AppState>,
    Query(query): Query<LocateQuery>,
) -> Result<Json<HeritageCity>, AppError> {
    let filter = parse_art_forms(&query.art_forms);
    state
        .atlas
        .locate(query.lat, query.lon, &filter)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No city within tolerance of ({}, {})",
                query.lat, query.lon
            ))
        })
}

/// GET /api/v1/cities/:slug
pub async fn handle_city_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<HeritageCity>, AppError> {
    state
        .atlas
        .by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown city '{slug}'")))
}

#[derive(Serialize)]
pub struct GalleryResponse {
    pub city: String,
    pub images: Vec<String>,
}

/// GET /api/v1/cities/:slug/gallery
/// Lists the curated local photos for a city. A missing gallery folder is
/// an empty gallery, not an error.
pub async fn handle_city_gallery(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<GalleryResponse>, AppError> {
    let city = state
        .atlas
        .by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown city '{slug}'")))?;

    let dir = state.config.gallery_dir.join(&city.slug);
    let mut images = Vec::new();
    if dir.is_dir() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| AppError::Storage(format!("Failed to read gallery {dir:?}: {e}")))?;
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if has_image_extension(&name) {
                images.push(format!("/gallery/{}/{}", city.slug, name));
            }
        }
        images.sort();
    }

    Ok(Json(GalleryResponse {
        city: city.name.clone(),
        images,
    }))
}

fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_form_query_splits_and_trims() {
        let parsed = parse_art_forms(&Some("Terracotta Temples, Frescoes ,".to_string()));
        assert_eq!(parsed, vec!["Terracotta Temples", "Frescoes"]);
        assert!(parse_art_forms(&None).is_empty());
    }

    #[test]
    fn gallery_accepts_only_image_files() {
        assert!(has_image_extension("ghat.JPG"));
        assert!(has_image_extension("temple.jpeg"));
        assert!(has_image_extension("mural.png"));
        assert!(!has_image_extension("notes.txt"));
        assert!(!has_image_extension("photo.webp"));
    }
}
