//! Route table.

use crate::{AppState, image, media};
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;

/// Build the gallery router.
///
/// - `GET /api/media?order=&offset=` shuffled feed page
/// - `GET /api/image?key=` image proxy
/// - `GET /health` liveness
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/media", get(media::list_media))
        .route("/api/image", get(image::proxy_image))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
