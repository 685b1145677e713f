//! Core data types for the Mirage media gallery.
//!
//! This crate holds the pieces every other Mirage crate agrees on: how a bucket
//! key becomes a [`MediaItem`], how an [`OrderToken`] seeds a reproducible
//! shuffle, and how [`paginate`] cuts that shuffle into [`Page`]s.
//!
//! # Example
//!
//! ```
//! use mirage_core::{paginate, OrderToken};
//!
//! let keys = ["a.jpg", "b.mp4", "c.png", "d.webp", "e.mov"];
//! let first = paginate(&keys, Some(OrderToken::new(42)), 0, 2);
//! assert_eq!(first.items().len(), 2);
//! assert_eq!(*first.next_offset(), Some(2));
//!
//! // The same token reproduces the same tour, so the next window continues it.
//! let second = paginate(&keys, Some(*first.order()), 2, 2);
//! assert_eq!(*second.next_offset(), Some(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod feed;
mod media;
mod mime;
mod order;
mod page;
mod shuffle;

pub use feed::{FeedConfig, FeedConfigBuilder};
pub use media::{MediaItem, MediaType, VIDEO_EXTENSIONS};
pub use mime::{DEFAULT_CONTENT_TYPE, content_type_for_key, image_mime_for_key};
pub use order::OrderToken;
pub use page::{Page, paginate, parse_offset};
pub use shuffle::{Lcg, seeded_shuffle, shuffle_in_place};
