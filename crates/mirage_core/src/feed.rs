//! Feed tuning knobs.

use derive_getters::Getters;
use mirage_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the paginated feed.
///
/// # Examples
///
/// ```
/// use mirage_core::FeedConfig;
///
/// let config = FeedConfig::default();
/// assert_eq!(*config.page_size(), 24);
/// assert_eq!(*config.key_cache_ttl_secs(), 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct FeedConfig {
    /// Items per page
    #[serde(default = "default_page_size")]
    page_size: usize,

    /// How long a bucket listing is reused (seconds)
    #[serde(default = "default_key_cache_ttl_secs")]
    key_cache_ttl_secs: u64,
}

fn default_page_size() -> usize {
    24
}

fn default_key_cache_ttl_secs() -> u64 {
    60
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            key_cache_ttl_secs: default_key_cache_ttl_secs(),
        }
    }
}

impl FeedConfig {
    /// Reject settings that would stall paging.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::new("feed.page_size", "must be at least 1"));
        }
        Ok(())
    }
}
