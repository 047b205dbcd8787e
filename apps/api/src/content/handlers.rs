use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::content::calendar::Month;
use crate::content::etiquette::ETIQUETTE_MD;
use crate::content::trivia::TRIVIA;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TriviaItem {
    pub city: String,
    pub fact: String,
    /// Present when the city is in the atlas, so the browser can place a
    /// trivia marker for it.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// GET /api/v1/trivia
pub async fn handle_trivia(State(state): State<AppState>) -> Json<Vec<TriviaItem>> {
    let items = TRIVIA
        .iter()
        .map(|(city, fact)| {
            let coords = state
                .atlas
                .cities()
                .iter()
                .find(|c| c.name == *city)
                .map(|c| (c.latitude, c.longitude));
            TriviaItem {
                city: city.to_string(),
                fact: fact.to_string(),
                latitude: coords.map(|(lat, _)| lat),
                longitude: coords.map(|(_, lon)| lon),
            }
        })
        .collect();
    Json(items)
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub month: Month,
    pub events: Vec<String>,
}

/// GET /api/v1/calendar/:month
pub async fn handle_calendar_month(
    Path(month): Path<String>,
) -> Result<Json<CalendarResponse>, AppError> {
    let month = Month::parse(&month)
        .ok_or_else(|| AppError::Validation(format!("Unknown month '{month}'")))?;
    Ok(Json(CalendarResponse {
        month,
        events: month.events().iter().map(|e| e.to_string()).collect(),
    }))
}

#[derive(Serialize)]
pub struct EtiquetteResponse {
    pub markdown: &'static str,
}

/// GET /api/v1/etiquette
pub async fn handle_etiquette() -> Json<EtiquetteResponse> {
    Json(EtiquetteResponse {
        markdown: ETIQUETTE_MD,
    })
}
