//! Content types for proxied images.

/// Fallback when a key carries no known image extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("webp", "image/webp"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

/// Image MIME type for a key's extension, if it is a known image format.
pub fn image_mime_for_key(key: &str) -> Option<&'static str> {
    let extension = key.rsplit('.').next().unwrap_or_default().to_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// `Content-Type` to serve a key with.
///
/// # Examples
///
/// ```
/// use mirage_core::content_type_for_key;
///
/// assert_eq!(content_type_for_key("album/cover.JPEG"), "image/jpeg");
/// assert_eq!(content_type_for_key("notes.txt"), "application/octet-stream");
/// ```
pub fn content_type_for_key(key: &str) -> &'static str {
    image_mime_for_key(key).unwrap_or(DEFAULT_CONTENT_TYPE)
}
