//! Pick-one and pick-many generators over template pools.

use crate::error::ConstraintError;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Pick one element from a pool.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> Result<&'a T, ConstraintError> {
    pool.choose(rng).ok_or(ConstraintError::EmptyPool)
}

/// Pick one element from a pool with per-element weights.
///
/// Weights must be finite and non-negative, with at least one positive
/// weight. Heavier elements are proportionally more likely.
pub fn pick_weighted<'a, T, R, F>(
    rng: &mut R,
    pool: &'a [T],
    weight: F,
) -> Result<&'a T, ConstraintError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    if pool.is_empty() {
        return Err(ConstraintError::EmptyPool);
    }
    pool.choose_weighted(rng, weight)
        .map_err(|e| ConstraintError::InvalidWeights(e.to_string()))
}

/// Pick a subset of unique elements from a pool.
///
/// The requested bounds are clamped to the pool size; `min_len > max_len`
/// is a malformed constraint. Element order in the result is randomized.
pub fn subset<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    min_len: usize,
    max_len: usize,
) -> Result<Vec<T>, ConstraintError> {
    if min_len > max_len {
        return Err(ConstraintError::invalid_range(min_len, max_len));
    }
    if pool.is_empty() || max_len == 0 {
        return Ok(Vec::new());
    }

    let effective_max = max_len.min(pool.len());
    let effective_min = min_len.min(effective_max);
    let len = rng.random_range(effective_min..=effective_max);

    let mut shuffled: Vec<T> = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(len);

    Ok(shuffled)
}
