mod analytics;
mod atlas;
mod config;
mod content;
mod db;
mod errors;
mod feedback;
mod quiz;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::atlas::Atlas;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::quiz::new_session_map;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dharohar API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the feedback table exists
    let pool = create_pool(&config.database_url).await?;
    ensure_schema(&pool).await?;

    // Initialize S3 / MinIO image store
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Load the city atlas from CSV
    let atlas = Arc::new(Atlas::load(&config.cities_csv)?);
    info!(
        "Loaded {} heritage cities from {}",
        atlas.len(),
        config.cities_csv.display()
    );

    // Build app state
    let state = AppState {
        db: pool,
        s3,
        config: config.clone(),
        atlas,
        quiz_sessions: new_session_map(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "dharohar-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
