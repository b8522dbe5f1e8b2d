//! Wall-clock source for `iat` and expiry checks

use chrono::Utc;

/// Current time in whole seconds since the Unix epoch.
///
/// Clocks set before 1970 read as 0.
#[must_use]
pub fn now_epoch_seconds() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
