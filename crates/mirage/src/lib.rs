//! Mirage - a shuffled gallery over a media bucket.
//!
//! Every object in the bucket is shown exactly once per tour, in an order
//! derived from a small integer token. The server keeps no per-client state:
//! the client echoes the token and an offset back, and the server reshuffles
//! the (cached) key list to cut the requested window.
//!
//! # Architecture
//!
//! - `mirage_error` - error types
//! - `mirage_core` - shuffle, order tokens, pagination, media types
//! - `mirage_cache` - TTL snapshot cache with an injectable clock
//! - `mirage_storage` - bucket listing, object fetching, URL helpers
//! - `mirage_server` - axum routes, configuration, logging, feed client
//!
//! This crate re-exports the public surface and ships the `mirage` binary.
//!
//! # Quick Start
//!
//! ```rust
//! use mirage::{OrderToken, paginate};
//!
//! let keys = ["a", "b", "c", "d", "e"];
//! let page = paginate(&keys, Some(OrderToken::new(42)), 0, 2);
//! assert_eq!(page.items()[0].key(), "c");
//! assert_eq!(*page.next_offset(), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;

pub use mirage_error::{
    ConfigError, HttpError, MirageError, MirageErrorKind, MirageResult, ServerError,
    ServerErrorKind, StorageError, StorageErrorKind,
};

pub use mirage_core::{
    DEFAULT_CONTENT_TYPE, FeedConfig, FeedConfigBuilder, Lcg, MediaItem, MediaType, OrderToken,
    Page, VIDEO_EXTENSIONS, content_type_for_key, image_mime_for_key, paginate, parse_offset,
    seeded_shuffle, shuffle_in_place,
};

pub use mirage_cache::{Clock, ManualClock, SnapshotCache, SystemClock};

pub use mirage_storage::{
    BucketConfig, BucketKeyLister, BucketListing, CachedKeyLister, FetchedObject,
    HttpObjectFetcher, KeyLister, ListingPage, ObjectFetcher, ObjectSummary, S3Bucket,
    download_url, encode_key, object_url,
};

pub use mirage_server::{
    AppState, FeedClient, FeedSession, LoggingConfig, MediaReport, MirageConfig, ServerConfig,
    create_router, init_logging, run, serve, shutdown_logging, survey,
};
