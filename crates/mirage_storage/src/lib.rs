//! Bucket access for the Mirage gallery.
//!
//! Two collaborators feed the HTTP layer:
//!
//! - **Key listing**: [`BucketKeyLister`] walks every page of a [`BucketListing`]
//!   (the S3-compatible [`S3Bucket`] in production) and keeps non-empty objects;
//!   [`CachedKeyLister`] reuses that snapshot for a fixed TTL.
//! - **Object fetching**: [`HttpObjectFetcher`] streams one object from the
//!   bucket's public URL so images can be re-served with a proper content type.
//!
//! Both sit behind traits ([`KeyLister`], [`ObjectFetcher`]) so the server can
//! be exercised against in-memory fakes.
//!
//! # Example
//!
//! ```rust,no_run
//! use mirage_storage::{BucketConfig, BucketKeyLister, CachedKeyLister, KeyLister, S3Bucket};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BucketConfig::default()
//!     .with_key_id(Some("key-id".to_string()))
//!     .with_app_key(Some("app-key".to_string()));
//! let bucket = S3Bucket::from_config(&config)?;
//! let lister = CachedKeyLister::new(
//!     BucketKeyLister::new(bucket, Duration::from_secs(10)),
//!     Duration::from_secs(60),
//! );
//!
//! let keys = lister.list_keys().await?;
//! println!("{} objects", keys.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fetch;
mod lister;
mod listing;
mod s3;
mod url;

pub use config::BucketConfig;
pub use fetch::{FetchedObject, HttpObjectFetcher, ObjectBody, ObjectFetcher};
pub use lister::{BucketKeyLister, CachedKeyLister, KeyLister};
pub use listing::{BucketListing, ListingPage, ObjectSummary};
pub use mirage_error::{StorageError, StorageErrorKind};
pub use s3::S3Bucket;
pub use url::{download_url, encode_key, object_url};
