//! Order tokens: the client-visible seed of one shuffled tour.

use serde::{Deserialize, Serialize};

/// Decimal-encoded `u32` seed identifying one deterministic shuffle.
///
/// Serialized as a string so clients treat it as opaque.
///
/// # Examples
///
/// ```
/// use mirage_core::OrderToken;
///
/// let token: OrderToken = "42".parse().unwrap();
/// assert_eq!(token.seed(), 42);
/// assert_eq!(token.to_string(), "42");
/// assert!("forty-two".parse::<OrderToken>().is_err());
/// assert!("042".parse::<OrderToken>().is_err());
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
    derive_more::Display,
    derive_more::From,
)]
#[serde(into = "String", try_from = "String")]
#[display("{}", _0)]
pub struct OrderToken(u32);

impl OrderToken {
    /// Wrap an explicit seed.
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Draw a fresh token uniformly over the whole `u32` range.
    pub fn mint() -> Self {
        Self(rand::random::<u32>())
    }

    /// Use the client's token when it parses, otherwise start a new tour.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<OrderToken>) {
            Some(Ok(token)) => token,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "Discarding malformed order token");
                Self::mint()
            }
            None => Self::mint(),
        }
    }

    /// Seed fed to the shuffle.
    pub fn seed(&self) -> u32 {
        self.0
    }
}

impl std::str::FromStr for OrderToken {
    type Err = String;

    /// Only canonical decimal is accepted, so a parsed token always displays
    /// as the exact string the client sent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(format!("Invalid order token '{}': not canonical decimal", s));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|e| format!("Invalid order token '{}': {}", s, e))
    }
}

impl From<OrderToken> for String {
    fn from(token: OrderToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for OrderToken {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
