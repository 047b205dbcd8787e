use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed set of categories offered by the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackCategory {
    General,
    Hospitality,
    #[serde(rename = "Art & Culture")]
    ArtCulture,
    #[serde(rename = "Tourism Tips")]
    TourismTips,
    Other,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 5] = [
        FeedbackCategory::General,
        FeedbackCategory::Hospitality,
        FeedbackCategory::ArtCulture,
        FeedbackCategory::TourismTips,
        FeedbackCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::General => "General",
            FeedbackCategory::Hospitality => "Hospitality",
            FeedbackCategory::ArtCulture => "Art & Culture",
            FeedbackCategory::TourismTips => "Tourism Tips",
            FeedbackCategory::Other => "Other",
        }
    }

    /// Parses a form value, case-insensitively. Unknown values are rejected
    /// at the boundary rather than stored verbatim.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

/// A `user_feedback` row as fetched, with the image list still JSON-encoded.
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRow {
    pub name: String,
    pub review: String,
    pub image_urls: String,
    pub rating: i16,
    pub category: String,
    pub created_on: DateTime<Utc>,
}

/// A review as returned to the client, image list decoded.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub review: String,
    pub images: Vec<String>,
    pub rating: i16,
    pub category: String,
    pub created_on: DateTime<Utc>,
}

impl From<FeedbackRow> for FeedbackEntry {
    fn from(row: FeedbackRow) -> Self {
        FeedbackEntry {
            name: row.name,
            review: row.review,
            images: decode_image_urls(&row.image_urls),
            rating: row.rating,
            category: row.category,
            created_on: row.created_on,
        }
    }
}

/// JSON-encodes an image URL list for storage. An empty list stores as `[]`.
pub fn encode_image_urls(urls: &[String]) -> String {
    serde_json::to_string(urls).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored image URL list. Malformed values decode to an empty
/// list rather than failing the whole fetch.
pub fn decode_image_urls(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_matches_display_names() {
        assert_eq!(
            FeedbackCategory::parse("Art & Culture"),
            Some(FeedbackCategory::ArtCulture)
        );
        assert_eq!(
            FeedbackCategory::parse(" tourism tips "),
            Some(FeedbackCategory::TourismTips)
        );
        assert_eq!(FeedbackCategory::parse("Complaints"), None);
    }

    #[test]
    fn empty_image_list_round_trips_as_brackets() {
        let encoded = encode_image_urls(&[]);
        assert_eq!(encoded, "[]");
        assert!(decode_image_urls(&encoded).is_empty());
    }

    #[test]
    fn image_list_round_trips() {
        let urls = vec![
            "https://img.example/a.jpg".to_string(),
            "https://img.example/b.png".to_string(),
        ];
        assert_eq!(decode_image_urls(&encode_image_urls(&urls)), urls);
    }

    #[test]
    fn malformed_image_json_decodes_to_empty() {
        assert!(decode_image_urls("not json").is_empty());
        assert!(decode_image_urls("").is_empty());
    }
}
