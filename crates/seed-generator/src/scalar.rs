//! Scalar value generators.

use crate::error::ConstraintError;
use rand::Rng;

/// Generate a random integer in the given inclusive range.
pub fn int_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, ConstraintError> {
    if min > max {
        return Err(ConstraintError::invalid_range(min, max));
    }
    Ok(rng.random_range(min..=max))
}

/// Generate a random float in the given inclusive range, rounded to
/// `precision` fraction digits.
pub fn float_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    precision: u32,
) -> Result<f64, ConstraintError> {
    if min > max {
        return Err(ConstraintError::invalid_range(min, max));
    }
    if precision > 9 {
        return Err(ConstraintError::InvalidPrecision(precision));
    }
    let factor = 10f64.powi(precision as i32);
    let value = rng.random_range(min..=max);
    Ok((value * factor).round() / factor)
}

/// Generate a boolean that is `true` with the given probability.
pub fn bool_with_probability<R: Rng + ?Sized>(
    rng: &mut R,
    probability: f64,
) -> Result<bool, ConstraintError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(ConstraintError::InvalidProbability(probability));
    }
    Ok(rng.random_bool(probability))
}

/// Generate an uppercase alphanumeric code of the given length.
///
/// Used for SKUs, order numbers, tracking numbers and discount codes.
pub fn alphanumeric_upper<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Generate a string of exactly `len` digits without a leading zero.
pub fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    if len == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(len);

    // First digit is 1-9 to keep the length stable when parsed
    result.push(char::from_digit(rng.random_range(1..10), 10).unwrap());
    for _ in 1..len {
        result.push(char::from_digit(rng.random_range(0..10), 10).unwrap());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = int_in_range(&mut rng, 10, 20).unwrap();
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_int_in_range_single_point() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(int_in_range(&mut rng, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_int_in_range_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = int_in_range(&mut rng, 20, 10).unwrap_err();
        assert!(matches!(err, ConstraintError::InvalidRange { .. }));
    }

    #[test]
    fn test_float_in_range_precision() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = float_in_range(&mut rng, 10.0, 500.0, 2).unwrap();
            assert!((10.0..=500.0).contains(&value));
            // Exactly two fraction digits survive a round trip through cents
            let cents = (value * 100.0).round();
            assert!((value - cents / 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_float_in_range_invalid_precision() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = float_in_range(&mut rng, 0.0, 1.0, 12).unwrap_err();
        assert_eq!(err, ConstraintError::InvalidPrecision(12));
    }

    #[test]
    fn test_bool_with_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(bool_with_probability(&mut rng, 1.0).unwrap());
        assert!(!bool_with_probability(&mut rng, 0.0).unwrap());
        assert!(bool_with_probability(&mut rng, 1.5).is_err());
        assert!(bool_with_probability(&mut rng, -0.1).is_err());
    }

    #[test]
    fn test_alphanumeric_upper() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = alphanumeric_upper(&mut rng, 8);
        assert_eq!(code.len(), 8);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let isbn = digits(&mut rng, 13);
        assert_eq!(isbn.len(), 13);
        assert!(!isbn.starts_with('0'));
        assert!(isbn.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(digits(&mut rng, 0), "");
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            int_in_range(&mut rng1, 0, 1000).unwrap(),
            int_in_range(&mut rng2, 0, 1000).unwrap()
        );
        assert_eq!(
            alphanumeric_upper(&mut rng1, 12),
            alphanumeric_upper(&mut rng2, 12)
        );
    }
}
