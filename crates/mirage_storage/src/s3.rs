//! S3-compatible bucket listing.

use crate::{BucketConfig, BucketListing, ListingPage, ObjectSummary};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use mirage_error::{MirageResult, StorageError, StorageErrorKind};
use tracing::{debug, instrument};

/// Bucket reached through the S3 `ListObjectsV2` API.
///
/// Uses static credentials, a fixed region and path-style addressing, which is
/// what Backblaze B2's S3 endpoint expects.
#[derive(Debug, Clone)]
pub struct S3Bucket {
    client: Client,
    bucket: String,
    max_keys: i32,
}

impl S3Bucket {
    /// Wrap an existing client.
    pub fn new(client: Client, bucket: impl Into<String>, max_keys: i32) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            max_keys,
        }
    }

    /// Build a client from bucket settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key id or application key is missing.
    pub fn from_config(config: &BucketConfig) -> MirageResult<Self> {
        let key_id = config.key_id().clone().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidConfig(
                "bucket key id not set (B2_KEY_ID)".to_string(),
            ))
        })?;
        let app_key = config.app_key().clone().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidConfig(
                "bucket application key not set (B2_APP_KEY)".to_string(),
            ))
        })?;

        let credentials = Credentials::new(key_id, app_key, None, None, "mirage");
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region().clone()))
            .endpoint_url(config.endpoint())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        debug!(
            bucket = %config.name(),
            endpoint = %config.endpoint(),
            region = %config.region(),
            "Configured S3 client"
        );

        Ok(Self::new(
            Client::from_conf(s3_config),
            config.name().clone(),
            *config.list_page_size(),
        ))
    }
}

#[async_trait::async_trait]
impl BucketListing for S3Bucket {
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn list_page(&self, continuation_token: Option<String>) -> MirageResult<ListingPage> {
        let mut request = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .max_keys(self.max_keys);
        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        let response = request.send().await.map_err(|e| {
            StorageError::new(StorageErrorKind::ListFailed(
                DisplayErrorContext(&e).to_string(),
            ))
        })?;

        let objects: Vec<ObjectSummary> = response
            .contents()
            .iter()
            .filter_map(|object| {
                let key = object.key()?;
                Some(ObjectSummary::new(key, object.size().unwrap_or(0)))
            })
            .collect();

        debug!(objects = objects.len(), "Listed bucket page");

        Ok(ListingPage {
            objects,
            is_truncated: response.is_truncated().unwrap_or(false),
            next_continuation_token: response.next_continuation_token().map(str::to_string),
        })
    }
}
