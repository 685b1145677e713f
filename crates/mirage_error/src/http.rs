//! Errors talking to the gallery or the bucket's public URL over HTTP.

/// HTTP failure against a named endpoint, with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error ({}): {} at line {} in {}", endpoint, message, line, file)]
pub struct HttpError {
    /// Base URL of the gallery or bucket that was being contacted
    pub endpoint: String,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create an error for `endpoint` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirage_error::HttpError;
    ///
    /// let err = HttpError::new("http://localhost:3000", "GET /api/media: connection refused");
    /// assert_eq!(err.endpoint, "http://localhost:3000");
    /// assert!(err.to_string().contains("/api/media"));
    /// ```
    #[track_caller]
    pub fn new(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            endpoint: endpoint.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
