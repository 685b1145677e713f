//! HTTP surface of the Mirage gallery.
//!
//! Serves a randomized, infinitely scrolling feed of everything in a media
//! bucket, plus an image proxy that fixes up content types.
//!
//! # Endpoints
//!
//! - `GET /api/media?order=<token>&offset=<n>` returns
//!   `{"items": [{"key", "type"}], "order", "nextOffset"?}`. Omit `order` to
//!   start a new tour; pass the returned `order` and `nextOffset` to continue it.
//! - `GET /api/image?key=<path>` streams the object with an inferred
//!   `Content-Type` and long-lived cache headers.
//! - `GET /health` reports liveness.
//!
//! # Example
//!
//! ```rust,no_run
//! use mirage_server::{MirageConfig, init_logging, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MirageConfig::load()?;
//!     init_logging(config.logging())?;
//!     run(&config).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod config;
mod image;
mod media;
mod observability;
mod server;
mod state;

pub use api::create_router;
pub use client::{FeedClient, FeedSession, MediaReport, survey};
pub use config::{MirageConfig, ServerConfig};
pub use image::{IMAGE_CACHE_CONTROL, ImageQuery};
pub use media::{MEDIA_CACHE_CONTROL, MediaQuery};
pub use mirage_error::{ServerError, ServerErrorKind};
pub use observability::{LoggingConfig, init_logging, shutdown_logging};
pub use server::{run, serve};
pub use state::AppState;
