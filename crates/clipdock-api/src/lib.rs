//! Clipdock API Library
//!
//! HTTP surface for the video ingestion service: routing, auth, multipart
//! handlers, and the ingestion orchestrator.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod state;
pub mod telemetry;

pub use error::ErrorResponse;
pub use ingest::VideoIngestor;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let video_limit = state.config.max_video_upload_bytes();
    let thumbnail_limit = state.config.max_thumbnail_upload_bytes();
    let cors = cors_layer(&state.config.cors_origins);

    // Thumbnails (and dev-mode videos) live in the local asset root and are
    // served by the API itself. URLs are random per upload, so caching is
    // disabled to keep a re-uploaded record's old URL from lingering.
    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .service(ServeDir::new(&state.config.assets_root));

    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route(
            "/videos/{video_id}/upload",
            post(handlers::videos::upload_video),
        )
        .route(
            "/thumbnails/{video_id}",
            post(handlers::thumbnails::upload_thumbnail)
                .layer(DefaultBodyLimit::max(thumbnail_limit)),
        )
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(video_limit))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
