//! Error types for the Mirage gallery.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific failure
//! - `*Error` struct wraps the kind with the source location where it was raised
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! # Examples
//!
//! ```
//! use mirage_error::{HttpError, MirageResult};
//!
//! fn fetch_page() -> MirageResult<String> {
//!     Err(HttpError::new("http://localhost:3000", "connection refused"))?
//! }
//!
//! assert!(fetch_page().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod server;
mod storage;

pub use config::ConfigError;
pub use error::{MirageError, MirageErrorKind, MirageResult};
pub use http::HttpError;
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
