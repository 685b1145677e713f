//! Invalid or unreadable gallery settings.

/// Configuration problem tied to the setting (or source) it concerns.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error ({}): {} at line {} in {}", setting, message, line, file)]
pub struct ConfigError {
    /// Dotted setting path such as `feed.page_size`, or the source being read
    pub setting: String,
    /// Why the setting was rejected
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create an error about `setting` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirage_error::ConfigError;
    ///
    /// let err = ConfigError::new("feed.page_size", "must be at least 1");
    /// assert_eq!(err.setting, "feed.page_size");
    /// assert!(err.to_string().contains("must be at least 1"));
    /// ```
    #[track_caller]
    pub fn new(setting: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: setting.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
