//! Media item types derived from bucket keys.

use serde::{Deserialize, Serialize};

/// Extensions (lowercase, without the dot) served as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm", "mkv", "m4v"];

/// Kind of media an object key points at.
///
/// # Examples
///
/// ```
/// use mirage_core::MediaType;
///
/// assert_eq!(MediaType::from_key("a/b/c.mp4"), MediaType::Video);
/// assert_eq!(MediaType::from_key("x.JPG"), MediaType::Image);
/// assert_eq!(format!("{}", MediaType::Video), "video");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image (JPEG, PNG, WebP, ...), also the fallback for unknown extensions
    #[display("image")]
    Image,
    /// Video (MP4, MOV, WebM, ...)
    #[display("video")]
    Video,
}

impl MediaType {
    /// Classify a key by the text after its last `.`, case-insensitively.
    ///
    /// A key without any `.` is matched as a whole, so only exact video
    /// extension names would classify as video.
    pub fn from_key(key: &str) -> Self {
        let extension = key.rsplit('.').next().unwrap_or_default().to_lowercase();
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }

    /// String form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

/// One entry of the gallery feed.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct MediaItem {
    /// Bucket object key
    key: String,
    /// Kind inferred from the key
    #[serde(rename = "type")]
    media_type: MediaType,
}

impl MediaItem {
    /// Build an item, inferring its type from the key.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let media_type = MediaType::from_key(&key);
        Self { key, media_type }
    }

    /// Whether this item is a video.
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }
}
