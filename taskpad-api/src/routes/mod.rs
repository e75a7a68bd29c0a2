//! REST API Routes Module
//!
//! Route handlers for the note collection plus health checks and the
//! OpenAPI document, assembled into one router with CORS and tracing.

pub mod health;
pub mod note;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use taskpad_storage::NoteStore;

pub use health::create_router as health_router;
pub use note::create_router as note_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Create the complete API router.
///
/// - Note CRUD under /api/v1/notes
/// - Health checks at /health/* (always reachable, even when the store is down)
/// - OpenAPI spec at /openapi.json
pub fn create_api_router(store: Arc<dyn NoteStore>, api_config: &ApiConfig) -> Router {
    let api_routes = Router::new().nest("/notes", note::create_router(store.clone()));

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health::create_router(store))
        .route("/openapi.json", get(openapi_json));

    let cors = build_cors_layer(api_config);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
