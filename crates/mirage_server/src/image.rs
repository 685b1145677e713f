//! `GET /api/image`: re-serve a bucket image with a content type browsers trust.

use crate::AppState;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use mirage_core::content_type_for_key;
use serde::Deserialize;
use tracing::{error, instrument, warn};

/// Uploaded objects never change in place.
pub const IMAGE_CACHE_CONTROL: &str = "public, s-maxage=31536000, immutable";

/// Query parameters of an image request.
#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    /// Bucket key of the image
    pub key: Option<String>,
}

fn passthrough(headers: &mut HeaderMap, name: header::HeaderName, value: Option<&str>) {
    if let Some(value) = value.and_then(|v| HeaderValue::from_str(v).ok()) {
        headers.insert(name, value);
    }
}

#[instrument(skip(state))]
pub(crate) async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Response {
    let key = query.key.unwrap_or_default();
    if key.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing key").into_response();
    }

    let object = match state.objects().fetch(&key).await {
        Ok(object) => object,
        Err(e) => {
            error!(error = %e, "Image proxy error");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    };

    if !object.is_success() {
        let status = StatusCode::from_u16(object.status)
            .ok()
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::NOT_FOUND);
        warn!(%status, "Image not available upstream");
        return (status, "Not found").into_response();
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for_key(&key)),
    );
    passthrough(&mut headers, header::CONTENT_LENGTH, object.content_length.as_deref());
    passthrough(&mut headers, header::ETAG, object.etag.as_deref());
    passthrough(&mut headers, header::LAST_MODIFIED, object.last_modified.as_deref());
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMAGE_CACHE_CONTROL),
    );

    (StatusCode::OK, headers, Body::from_stream(object.body)).into_response()
}
