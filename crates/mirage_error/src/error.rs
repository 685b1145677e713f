//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, ServerError, StorageError};

/// Every error the gallery can raise.
///
/// # Examples
///
/// ```
/// use mirage_error::{HttpError, MirageError};
///
/// let err: MirageError = HttpError::new("https://bucket.example.com", "connection reset").into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MirageErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Bucket access error
    #[from(StorageError)]
    Storage(StorageError),
    /// Server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Mirage error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mirage_error::{ConfigError, MirageErrorKind, MirageResult};
///
/// fn load() -> MirageResult<()> {
///     Err(ConfigError::new("bucket.name", "must not be empty"))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), MirageErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mirage Error: {}", _0)]
pub struct MirageError(Box<MirageErrorKind>);

impl MirageError {
    /// Create a new error from a kind.
    pub fn new(kind: MirageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MirageErrorKind {
        &self.0
    }
}

impl<T> From<T> for MirageError
where
    T: Into<MirageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mirage operations.
pub type MirageResult<T> = std::result::Result<T, MirageError>;
