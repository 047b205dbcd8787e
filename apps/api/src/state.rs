use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::atlas::Atlas;
use crate::config::Config;
use crate::quiz::SessionMap;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// City atlas loaded once at startup; immutable for the process lifetime.
    pub atlas: Arc<Atlas>,
    /// In-memory quiz sessions, keyed by session id.
    pub quiz_sessions: SessionMap,
}
