//! Synthetic value generation for sandbox-seed.
//!
//! This crate provides the pure value-generation layer used by the entity
//! seeders: scalar values under constraints (integers, floats, money in
//! cents, booleans with a probability), picks and subsets from template
//! pools, timestamps in ranges, and realistic person/address/text values
//! backed by the `fake` crate.
//!
//! Every function takes a caller-supplied [`rand::Rng`], so determinism is
//! the caller's choice: seed the RNG (see [`rng::seed_rng`]) and the same
//! inputs produce the same values; leave it unseeded and generation is
//! non-deterministic, which is acceptable for fixture data.
//!
//! Functions fail only on malformed constraints (e.g. `min > max`),
//! signalled as [`ConstraintError`].

pub mod datetime;
pub mod error;
pub mod money;
pub mod pick;
pub mod rng;
pub mod scalar;
pub mod text;

// Re-exports for convenience
pub use error::ConstraintError;
