//! Streaming object reads through the bucket's public URL.

use crate::{BucketConfig, object_url};
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use mirage_error::{HttpError, MirageResult, StorageError, StorageErrorKind};
use reqwest::header::{CONTENT_LENGTH, ETAG, HeaderMap, LAST_MODIFIED};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Body of a fetched object, streamed chunk by chunk.
pub type ObjectBody = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// Upstream response for one object.
pub struct FetchedObject {
    /// Upstream HTTP status
    pub status: u16,
    /// Upstream `Content-Length`
    pub content_length: Option<String>,
    /// Upstream `ETag`
    pub etag: Option<String>,
    /// Upstream `Last-Modified`
    pub last_modified: Option<String>,
    /// Object bytes; empty when the status is not a success
    pub body: ObjectBody,
}

impl FetchedObject {
    /// Whether upstream answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Build a fully buffered object, mostly useful for fakes.
    pub fn from_bytes(status: u16, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            status,
            content_length: Some(data.len().to_string()),
            etag: None,
            last_modified: None,
            body: futures::stream::once(async move { Ok(data) }).boxed(),
        }
    }
}

impl std::fmt::Debug for FetchedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedObject")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .field("etag", &self.etag)
            .field("last_modified", &self.last_modified)
            .finish_non_exhaustive()
    }
}

/// Reads single objects from the bucket.
#[async_trait::async_trait]
pub trait ObjectFetcher: Send + Sync {
    /// Fetch `key`. Upstream error statuses are returned, not raised.
    async fn fetch(&self, key: &str) -> MirageResult<FetchedObject>;
}

/// Fetches objects over plain HTTP from the bucket's public URL.
#[derive(Debug, Clone)]
pub struct HttpObjectFetcher {
    client: reqwest::Client,
    public_url: String,
    timeout: Duration,
}

impl HttpObjectFetcher {
    /// Create a fetcher for `public_url`; `timeout` bounds the wait for headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(public_url: impl Into<String>, timeout: Duration) -> MirageResult<Self> {
        let public_url = public_url.into();
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(&public_url, format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            public_url,
            timeout,
        })
    }

    /// Create a fetcher from bucket settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &BucketConfig) -> MirageResult<Self> {
        Self::new(config.public_url().clone(), config.timeout())
    }
}

fn header_string(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[async_trait::async_trait]
impl ObjectFetcher for HttpObjectFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, key: &str) -> MirageResult<FetchedObject> {
        let url = object_url(&self.public_url, key)?;
        debug!(%url, "Fetching object");

        let response = tokio::time::timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| StorageError::new(StorageErrorKind::Timeout(self.timeout.as_secs())))?
            .map_err(|e| StorageError::new(StorageErrorKind::FetchFailed(e.to_string())))?;

        let status = response.status().as_u16();
        let headers = response.headers();
        let content_length = header_string(headers, CONTENT_LENGTH);
        let etag = header_string(headers, ETAG);
        let last_modified = header_string(headers, LAST_MODIFIED);

        if !response.status().is_success() {
            warn!(status, "Upstream rejected object fetch");
            return Ok(FetchedObject {
                status,
                content_length: None,
                etag: None,
                last_modified: None,
                body: futures::stream::empty().boxed(),
            });
        }

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other))
            .boxed();

        Ok(FetchedObject {
            status,
            content_length,
            etag,
            last_modified,
            body,
        })
    }
}

#[async_trait::async_trait]
impl<T: ObjectFetcher + ?Sized> ObjectFetcher for std::sync::Arc<T> {
    async fn fetch(&self, key: &str) -> MirageResult<FetchedObject> {
        (**self).fetch(key).await
    }
}
