//! Error type for malformed generation constraints.

/// Error raised when generation constraints are malformed.
///
/// Generation itself never fails; only the constraints can be invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstraintError {
    /// Lower bound exceeds upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// Probability outside `0.0..=1.0`.
    #[error("invalid probability {0}: must be within 0.0..=1.0")]
    InvalidProbability(f64),

    /// Pick or subset requested from an empty pool.
    #[error("cannot pick from an empty pool")]
    EmptyPool,

    /// Too many fraction digits for exact rounding.
    #[error("unsupported precision {0}: at most 9 fraction digits")]
    InvalidPrecision(u32),

    /// Weighted pick with negative, non-finite or all-zero weights.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

impl ConstraintError {
    /// Build an [`ConstraintError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range<T: std::fmt::Display>(min: T, max: T) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
