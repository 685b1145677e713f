//! Bucket access error types.

/// Kinds of bucket access errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Listing the bucket failed
    #[display("Failed to list bucket: {}", _0)]
    ListFailed(String),
    /// Fetching an object failed before a response arrived
    #[display("Failed to fetch object: {}", _0)]
    FetchFailed(String),
    /// Upstream did not answer within the configured timeout
    #[display("Upstream timed out after {}s", _0)]
    Timeout(u64),
    /// Object key cannot be turned into a URL
    #[display("Invalid object key: {}", _0)]
    InvalidKey(String),
    /// Invalid bucket configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfig(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use mirage_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Timeout(10));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
