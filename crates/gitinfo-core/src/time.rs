//! UTC timestamp formatting with strftime-style patterns.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::domain::error::{GitInfoError, Result};

/// Pattern used for `authored_date` and `build_date`.
pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format seconds since the Unix epoch as UTC using `pattern`.
///
/// Fractional seconds are dropped (rounded towards negative infinity).
pub fn format_time(epoch_secs: f64, pattern: &str) -> Result<String> {
    if !epoch_secs.is_finite() {
        return Err(GitInfoError::InvalidTimestamp(epoch_secs.to_string()));
    }
    let secs = epoch_secs.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return Err(GitInfoError::InvalidTimestamp(epoch_secs.to_string()));
    }
    let dt = DateTime::<Utc>::from_timestamp(secs as i64, 0)
        .ok_or_else(|| GitInfoError::InvalidTimestamp(epoch_secs.to_string()))?;
    format_datetime(&dt, pattern)
}

/// Format a UTC datetime using `pattern`.
///
/// chrono panics when displaying an invalid pattern, so the pattern is
/// checked before formatting.
pub fn format_datetime(dt: &DateTime<Utc>, pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(GitInfoError::InvalidTimeFormat(pattern.to_string()));
    }
    Ok(dt.format_with_items(items.into_iter()).to_string())
}
