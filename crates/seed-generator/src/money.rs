//! Money generation and conversion in integer cents.
//!
//! All pricing math in the engine runs on integer cents so that derived
//! totals are exact: `total = subtotal + tax + shipping` holds to the
//! cent, with no float accumulation error. Dollar values only appear at
//! the document boundary.

use crate::error::ConstraintError;
use rand::Rng;

/// Generate a random amount of cents in the given inclusive range.
pub fn money_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min_cents: i64,
    max_cents: i64,
) -> Result<i64, ConstraintError> {
    if min_cents > max_cents {
        return Err(ConstraintError::invalid_range(min_cents, max_cents));
    }
    Ok(rng.random_range(min_cents..=max_cents))
}

/// Convert a dollar amount to cents, rounding to the nearest cent.
pub fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Convert cents to a dollar amount with two fraction digits.
pub fn to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Tax on a subtotal, rounded to the nearest cent.
pub fn tax_cents(subtotal_cents: i64, rate: f64) -> i64 {
    (subtotal_cents as f64 * rate).round() as i64
}
