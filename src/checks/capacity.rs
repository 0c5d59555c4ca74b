//! Capacity check - bounds the number of users per run.

use super::{CheckResult, ValidationError};

/// Default maximum number of users accepted in one run.
pub const MAX_ENTRIES: usize = 20000;

/// Returns the configured maximum number of users.
///
/// Priority:
/// 1. Environment variable `PWD_MAX_ENTRIES`
/// 2. Default `MAX_ENTRIES` (20000)
pub fn max_entries() -> usize {
    std::env::var("PWD_MAX_ENTRIES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(MAX_ENTRIES)
}

/// Rejects a run declared for more users than the configured maximum.
/// The diagnostic quotes the maximum in effect.
pub fn capacity_check(count: usize) -> CheckResult {
    let max = max_entries();
    if count > max {
        return Err(ValidationError::TooManyEntries(max));
    }
    Ok(())
}
