//! Public URLs for bucket objects.

use mirage_core::MediaType;
use mirage_error::{MirageResult, StorageError, StorageErrorKind};
use reqwest::Url;

/// Percent-encode each `/`-separated segment of a key, keeping the slashes.
///
/// # Examples
///
/// ```
/// use mirage_storage::encode_key;
///
/// assert_eq!(encode_key("summer 2024/beach #1.jpg"), "summer%202024/beach%20%231.jpg");
/// ```
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Absolute URL of `key` under the bucket's public base URL.
///
/// # Errors
///
/// Returns an error if the combined URL does not parse.
pub fn object_url(public_url: &str, key: &str) -> MirageResult<Url> {
    let raw = format!("{}/{}", public_url.trim_end_matches('/'), encode_key(key));
    Url::parse(&raw).map_err(|e| {
        StorageError::new(StorageErrorKind::InvalidKey(format!("{}: {}", key, e))).into()
    })
}

/// Where a browser should load `key` from.
///
/// Keys under `test/` are bundled with the site, images go through the
/// content-type proxy, and videos stream straight from the bucket.
pub fn download_url(public_url: &str, key: &str) -> String {
    if key.starts_with("test/") {
        return format!("/{}", key);
    }
    match MediaType::from_key(key) {
        MediaType::Image => format!("/api/image?key={}", encode_key(key)),
        MediaType::Video => format!("{}/{}", public_url.trim_end_matches('/'), encode_key(key)),
    }
}
