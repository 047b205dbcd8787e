use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// All review uploads live under this prefix, one folder per city slug.
const UPLOAD_PREFIX: &str = "heritage-feedback";

/// Maps an accepted image extension to its content type. The form widget
/// already restricts uploads to jpg/jpeg/png; anything else is rejected
/// here too.
pub fn content_type_for(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Object key for an uploaded review photo. The uuid keeps concurrent
/// uploads of identically-named files from clobbering each other.
pub fn object_key(city_slug: &str, file_id: Uuid, filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{UPLOAD_PREFIX}/{city_slug}/{file_id}-{safe}")
}

/// Public HTTPS URL for a stored object.
pub fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
}

/// Uploads one review photo and returns its public URL. Each file is
/// uploaded independently; the caller decides what to do with failures.
pub async fn upload_review_image(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    endpoint: &str,
    city_slug: &str,
    filename: &str,
    data: Bytes,
) -> Result<String, AppError> {
    let content_type = content_type_for(filename).ok_or_else(|| {
        AppError::Validation(format!(
            "'{filename}' is not an accepted image type (jpg, jpeg, png)"
        ))
    })?;

    let key = object_key(city_slug, Uuid::new_v4(), filename);
    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .body(ByteStream::from(data))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| AppError::Storage(format!("Upload of '{filename}' failed: {e}")))?;

    info!("Uploaded review photo to s3://{bucket}/{key}");
    Ok(public_url(endpoint, bucket, &key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_for_accepted_extensions() {
        assert_eq!(content_type_for("ghat.jpg"), Some("image/jpeg"));
        assert_eq!(content_type_for("GHAT.JPEG"), Some("image/jpeg"));
        assert_eq!(content_type_for("mural.png"), Some("image/png"));
        assert_eq!(content_type_for("clip.gif"), None);
        assert_eq!(content_type_for("noextension"), None);
    }

    #[test]
    fn object_key_is_slug_scoped_and_sanitized() {
        let id = Uuid::nil();
        let key = object_key("bishnupur", id, "rash mela 2024.jpg");
        assert_eq!(
            key,
            format!("heritage-feedback/bishnupur/{id}-rash-mela-2024.jpg")
        );
    }

    #[test]
    fn public_url_joins_without_double_slash() {
        assert_eq!(
            public_url("https://img.example/", "photos", "heritage-feedback/mandu/a.jpg"),
            "https://img.example/photos/heritage-feedback/mandu/a.jpg"
        );
    }
}
