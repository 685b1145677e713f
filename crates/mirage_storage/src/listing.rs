//! One-page-at-a-time bucket listing.

use mirage_error::MirageResult;

/// An object as reported by a listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// Object key
    pub key: String,
    /// Size in bytes
    pub size: i64,
}

impl ObjectSummary {
    /// Create a summary.
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    /// Objects on this page, in upstream order
    pub objects: Vec<ObjectSummary>,
    /// Whether more pages follow
    pub is_truncated: bool,
    /// Token to request the following page
    pub next_continuation_token: Option<String>,
}

/// Upstream that lists a bucket in pages.
#[async_trait::async_trait]
pub trait BucketListing: Send + Sync {
    /// Fetch the page after `continuation_token` (the first page when `None`).
    async fn list_page(&self, continuation_token: Option<String>) -> MirageResult<ListingPage>;
}
