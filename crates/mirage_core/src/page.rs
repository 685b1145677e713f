//! Windowing over a shuffled key list.

use crate::{MediaItem, OrderToken, seeded_shuffle};
use serde::{Deserialize, Serialize};

/// One window of the shuffled feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Items in this window, in tour order
    items: Vec<MediaItem>,
    /// Token that reproduces the tour
    order: OrderToken,
    /// Offset of the next window; absent once the tour is exhausted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_offset: Option<usize>,
}

impl Page {
    /// Assemble a page from its parts.
    pub fn new(items: Vec<MediaItem>, order: OrderToken, next_offset: Option<usize>) -> Self {
        Self {
            items,
            order,
            next_offset,
        }
    }

    /// Whether this is the last window of the tour.
    pub fn is_last(&self) -> bool {
        self.next_offset.is_none()
    }
}

/// Cut window `[offset, offset + page_size)` out of the tour seeded by `order`.
///
/// Without an `order` a fresh token is minted. The whole key list is shuffled
/// on every call, so no state has to survive between requests. An `offset`
/// past the end yields an empty, final page.
#[tracing::instrument(level = "debug", skip(keys), fields(keys = keys.len()))]
pub fn paginate<S: AsRef<str>>(
    keys: &[S],
    order: Option<OrderToken>,
    offset: usize,
    page_size: usize,
) -> Page {
    let order = order.unwrap_or_else(OrderToken::mint);

    let refs: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    let tour = seeded_shuffle(&refs, order.seed());

    let start = offset.min(tour.len());
    let end = start.saturating_add(page_size).min(tour.len());
    let items: Vec<MediaItem> = tour[start..end]
        .iter()
        .map(|key| MediaItem::from_key(*key))
        .collect();

    let consumed = start + items.len();
    let next_offset = (consumed < tour.len()).then_some(consumed);

    tracing::debug!(%order, items = items.len(), ?next_offset, "Paginated feed");
    Page::new(items, order, next_offset)
}

/// Read an `offset` query value the lenient way browsers send it.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, and anything negative or unparseable becomes 0. Values too
/// large for `usize` saturate, which lands past the end of any feed.
///
/// # Examples
///
/// ```
/// use mirage_core::parse_offset;
///
/// assert_eq!(parse_offset(Some("48")), 48);
/// assert_eq!(parse_offset(Some("12abc")), 12);
/// assert_eq!(parse_offset(Some("-5")), 0);
/// assert_eq!(parse_offset(Some("abc")), 0);
/// assert_eq!(parse_offset(None), 0);
/// ```
pub fn parse_offset(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(usize::from(digit - b'0'))
        });
    if negative { 0 } else { value }
}
