//! `GET /api/media`: one page of the shuffled feed.

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use mirage_core::{OrderToken, paginate, parse_offset};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, instrument};

/// Lets a CDN reuse identical page requests briefly.
pub const MEDIA_CACHE_CONTROL: &str = "public, s-maxage=30, stale-while-revalidate=120";

/// Query parameters of a feed request.
#[derive(Debug, Default, Deserialize)]
pub struct MediaQuery {
    /// Order token from a previous page; a new tour starts without it
    pub order: Option<String>,
    /// Index of the first item to return
    pub offset: Option<String>,
    /// Cache buster sent by clients on reshuffle; ignored
    pub nonce: Option<String>,
}

#[instrument(skip(state))]
pub(crate) async fn list_media(
    State(state): State<AppState>,
    Query(query): Query<MediaQuery>,
) -> Response {
    let order = OrderToken::resolve(query.order.as_deref());
    let offset = parse_offset(query.offset.as_deref());

    let keys = match state.keys().list_keys().await {
        Ok(keys) => keys,
        Err(e) => {
            error!(error = %e, "Error fetching media");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch media"})),
            )
                .into_response();
        }
    };

    let page = paginate(keys.as_slice(), Some(order), offset, *state.feed().page_size());
    debug!(%order, offset, items = page.items().len(), "Serving feed page");

    ([(header::CACHE_CONTROL, MEDIA_CACHE_CONTROL)], Json(page)).into_response()
}
