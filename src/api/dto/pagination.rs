//! Pagination cursor parameters carried in the query string.

use super::query::QueryParams;

/// Default page size for collection listings.
pub const DEFAULT_PAGE_SIZE: i64 = 60;

/// Highest offset a `next` link may point at for collection listings.
pub const MAX_LIST_OFFSET: i64 = 500;

/// Offset cursor for collection listings (`start` + `num`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCursor {
    pub start: i64,
    pub num: i64,
}

impl OffsetCursor {
    /// Reads `start` (default 0) and `num` (default 60).
    ///
    /// Returns `None` when either value is present but does not start with
    /// an integer; the response is then served without `prev`/`next` links.
    pub fn from_query(query: &QueryParams) -> Option<Self> {
        Some(Self {
            start: int_param(query, "start", 0)?,
            num: int_param(query, "num", DEFAULT_PAGE_SIZE)?,
        })
    }

    /// Offset of the previous page, if it does not go below zero.
    pub fn prev_start(&self) -> Option<i64> {
        let start = self.start.checked_sub(self.num)?;
        (start >= 0).then_some(start)
    }

    /// Offset of the next page, if it stays within [`MAX_LIST_OFFSET`].
    pub fn next_start(&self) -> Option<i64> {
        let start = self.start.checked_add(self.num)?;
        (start <= MAX_LIST_OFFSET).then_some(start)
    }
}

/// Page-number cursor for reviews (`page`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: i64,
}

impl PageCursor {
    /// Reads `page` (default 0). `None` when present but not starting with
    /// an integer.
    pub fn from_query(query: &QueryParams) -> Option<Self> {
        Some(Self {
            page: int_param(query, "page", 0)?,
        })
    }

    pub fn prev_page(&self) -> Option<i64> {
        (self.page > 0).then(|| self.page - 1)
    }

    /// Next page number; the caller decides whether one exists.
    pub fn next_page(&self) -> Option<i64> {
        self.page.checked_add(1)
    }
}

/// Integer parameter with a default for absent or empty values.
fn int_param(query: &QueryParams, key: &str, default: i64) -> Option<i64> {
    match query.get_non_empty(key) {
        None => Some(default),
        Some(raw) => leading_int(raw),
    }
}

/// Parses the leading integer of `raw`, ignoring anything after the digits.
///
/// Surrounding whitespace and one sign are accepted, so `" 60.0"` is 60 and
/// `"-3x"` is -3. `None` when no digit follows, or on overflow.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
