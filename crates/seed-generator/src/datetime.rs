//! Timestamp generators.

use crate::error::ConstraintError;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generate a random timestamp in the given inclusive range.
///
/// Sub-second precision is dropped; generated timestamps are whole seconds.
pub fn datetime_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, ConstraintError> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();
    if start_ts > end_ts {
        return Err(ConstraintError::invalid_range(start, end));
    }

    let ts = rng.random_range(start_ts..=end_ts);
    Ok(DateTime::from_timestamp(ts, 0).unwrap_or(start))
}

/// Generate a timestamp within the last `within_days` days.
pub fn recent<R: Rng + ?Sized>(
    rng: &mut R,
    within_days: u32,
) -> Result<DateTime<Utc>, ConstraintError> {
    let now = Utc::now();
    datetime_in_range(rng, now - Duration::days(within_days as i64), now)
}

/// Generate a timestamp within the next `within_days` days.
pub fn future<R: Rng + ?Sized>(
    rng: &mut R,
    within_days: u32,
) -> Result<DateTime<Utc>, ConstraintError> {
    let now = Utc::now();
    datetime_in_range(rng, now, now + Duration::days(within_days as i64))
}
