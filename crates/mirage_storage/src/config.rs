//! Bucket connection settings.

use derive_getters::Getters;
use mirage_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Where the media bucket lives and how to reach it.
///
/// Credentials are optional here because only listing needs them; the image
/// proxy reads through the public URL.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct BucketConfig {
    /// Bucket name
    #[serde(default = "default_name")]
    name: String,

    /// Signing region
    #[serde(default = "default_region")]
    region: String,

    /// S3-compatible API endpoint
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Public base URL objects are readable from
    #[serde(default = "default_public_url")]
    public_url: String,

    /// Access key id
    #[serde(default)]
    key_id: Option<String>,

    /// Secret application key
    #[serde(default)]
    app_key: Option<String>,

    /// Keys requested per listing call
    #[serde(default = "default_list_page_size")]
    list_page_size: i32,

    /// Upper bound on one upstream operation (seconds)
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_name() -> String {
    "supermirage".to_string()
}

fn default_region() -> String {
    "us-west-004".to_string()
}

fn default_endpoint() -> String {
    "https://s3.us-west-004.backblazeb2.com".to_string()
}

fn default_public_url() -> String {
    "https://supermirage.s3.us-west-004.backblazeb2.com".to_string()
}

fn default_list_page_size() -> i32 {
    1000
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            region: default_region(),
            endpoint: default_endpoint(),
            public_url: default_public_url(),
            key_id: None,
            app_key: None,
            list_page_size: default_list_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BucketConfig {
    /// Check the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty bucket name or public URL, a listing page
    /// size outside `1..=1000`, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::new("bucket.name", "must not be empty"));
        }
        if self.public_url.trim().is_empty() {
            return Err(ConfigError::new("bucket.public_url", "must not be empty"));
        }
        if !(1..=1000).contains(&self.list_page_size) {
            return Err(ConfigError::new(
                "bucket.list_page_size",
                format!("must be in 1..=1000, got {}", self.list_page_size),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::new("bucket.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    /// Upstream timeout as a duration.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
