//! # Slot Rules
//!
//! Interval arithmetic shared by the store: overlap under half-open
//! semantics, the accepted slot lengths, the booking email shape, and the
//! slicing of a slot into fixed availability windows.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// Slot lengths in minutes a newly created slot may be a multiple of.
pub const SLOT_GRANULARITY_MINUTES: [i64; 3] = [15, 30, 60];

/// Length of each window emitted by the availability query.
pub const AVAILABILITY_WINDOW_MINUTES: i64 = 30;

const MILLIS_PER_MINUTE: i64 = 60_000;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `[a_start, a_end)` and `[b_start, b_end)` share at least one instant.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whether a slot of this length may be created.
///
/// The length must be a whole number of minutes divisible by 15, 30 or 60.
/// Every multiple of 60 or 30 is also a multiple of 15; the three-way check
/// is kept as the accepted rule.
pub fn is_valid_duration(duration: Duration) -> bool {
    let millis = duration.num_milliseconds();
    SLOT_GRANULARITY_MINUTES
        .iter()
        .any(|minutes| millis % (minutes * MILLIS_PER_MINUTE) == 0)
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Splits `[start, end)` into consecutive windows of `window` length.
///
/// Returns `None` when the interval is not an exact multiple of the window,
/// or when either is empty. Windows are produced lazily.
pub fn split_into_windows(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    window: Duration,
) -> Option<impl Iterator<Item = (DateTime<Utc>, DateTime<Utc>)>> {
    let total = (end - start).num_milliseconds();
    let step = window.num_milliseconds();
    if total <= 0 || step <= 0 || total % step != 0 {
        return None;
    }

    Some((0..total / step).map(move |index| window_at(start, window, index)))
}

/// The `index`-th window of `window` length counted from `start`.
pub fn window_at(
    start: DateTime<Utc>,
    window: Duration,
    index: i64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let window_start = start + Duration::milliseconds(window.num_milliseconds() * index);
    (window_start, window_start + window)
}

/// The availability window length as a `Duration`.
pub fn availability_window() -> Duration {
    Duration::minutes(AVAILABILITY_WINDOW_MINUTES)
}
