//! Client for walking a gallery feed over HTTP.

use mirage_core::{OrderToken, Page};
use mirage_error::{HttpError, MirageResult, ServerError, ServerErrorKind};
use std::time::Duration;
use tracing::{debug, instrument};

/// Thin HTTP client for `GET /api/media`.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a client for the gallery at `base_url` (e.g. "http://localhost:3000").
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> MirageResult<Self> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(&base_url, format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the page at `offset` of the tour named by `order`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a feed page.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_page(&self, order: Option<OrderToken>, offset: usize) -> MirageResult<Page> {
        let url = format!("{}/api/media", self.base_url);
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(order) = order {
            query.push(("order", order.to_string()));
        }
        if offset > 0 {
            query.push(("offset", offset.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| HttpError::new(&self.base_url, format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServerError::new(ServerErrorKind::Api(format!("{}: {}", status, body))).into());
        }

        let page: Page = response
            .json()
            .await
            .map_err(|e| ServerError::new(ServerErrorKind::Deserialization(e.to_string())))?;
        debug!(items = page.items().len(), next_offset = ?page.next_offset(), "Fetched page");
        Ok(page)
    }
}

/// Cursor over one shuffled tour.
///
/// The first request carries no order token, so the server picks one; every
/// later request replays it with the previous `nextOffset`.
#[derive(Debug, Clone)]
pub struct FeedSession {
    client: FeedClient,
    order: Option<OrderToken>,
    next_offset: usize,
    exhausted: bool,
}

impl FeedSession {
    /// Start a session that lets the server choose the order.
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            order: None,
            next_offset: 0,
            exhausted: false,
        }
    }

    /// Start a session on a known tour.
    pub fn with_order(client: FeedClient, order: OrderToken) -> Self {
        Self {
            order: Some(order),
            ..Self::new(client)
        }
    }

    /// Token of the current tour, once the server has assigned one.
    pub fn order(&self) -> Option<OrderToken> {
        self.order
    }

    /// Whether the last page has been delivered.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetch the next page, or `None` after the last one.
    ///
    /// # Errors
    ///
    /// Propagates [`FeedClient::fetch_page`] failures; the cursor does not move.
    pub async fn next_page(&mut self) -> MirageResult<Option<Page>> {
        if self.exhausted {
            return Ok(None);
        }
        let page = self.client.fetch_page(self.order, self.next_offset).await?;
        self.order = Some(*page.order());
        match page.next_offset() {
            Some(next) => self.next_offset = *next,
            None => self.exhausted = true,
        }
        Ok(Some(page))
    }

    /// Abandon the current tour; the next page starts a new one at offset 0.
    pub fn reshuffle(&mut self) {
        debug!(previous = ?self.order, "Reshuffling feed");
        self.order = None;
        self.next_offset = 0;
        self.exhausted = false;
    }
}

/// Totals gathered by walking a whole tour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaReport {
    /// Pages fetched
    pub pages: usize,
    /// Items seen
    pub items: usize,
    /// Keys of video items, in tour order
    pub videos: Vec<String>,
}

impl MediaReport {
    /// Items that are not videos.
    pub fn images(&self) -> usize {
        self.items - self.videos.len()
    }
}

/// Walk `session` to the end, calling `on_page` with each page's index.
///
/// # Errors
///
/// Stops at the first failed page.
pub async fn survey(
    session: &mut FeedSession,
    mut on_page: impl FnMut(usize, &Page),
) -> MirageResult<MediaReport> {
    let mut report = MediaReport::default();
    while let Some(page) = session.next_page().await? {
        on_page(report.pages, &page);
        report.pages += 1;
        report.items += page.items().len();
        report.videos.extend(
            page.items()
                .iter()
                .filter(|item| item.is_video())
                .map(|item| item.key().clone()),
        );
    }
    Ok(report)
}
