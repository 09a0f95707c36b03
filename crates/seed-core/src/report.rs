//! Seeding pass outcomes and run summaries.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one seeding pass for one module.
///
/// A result is either fully successful (`success = true`, no error) or
/// failed with an error message. `created` and `deleted` report the writes
/// and deletes that actually completed, so a failed pass with partial
/// writes is observable rather than silently reported as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResult {
    /// Name of the module.
    pub module: String,

    /// Number of documents created.
    pub created: u64,

    /// Number of documents updated.
    #[serde(default)]
    pub updated: u64,

    /// Number of documents deleted (when the clear option was used).
    #[serde(default)]
    pub deleted: u64,

    /// Execution time in milliseconds.
    pub duration_ms: u64,

    /// Success status.
    pub success: bool,

    /// Error message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedResult {
    /// Build a successful result.
    pub fn succeeded(module: impl Into<String>, created: u64, deleted: u64, took: Duration) -> Self {
        Self {
            module: module.into(),
            created,
            updated: 0,
            deleted,
            duration_ms: took.as_millis() as u64,
            success: true,
            error: None,
        }
    }

    /// Build a failed result, keeping any counts that landed before the failure.
    pub fn failed(
        module: impl Into<String>,
        created: u64,
        deleted: u64,
        took: Duration,
        error: impl std::fmt::Display,
    ) -> Self {
        Self {
            module: module.into(),
            created,
            updated: 0,
            deleted,
            duration_ms: took.as_millis() as u64,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Ordered results of one orchestrated run, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateSummary {
    results: Vec<SeedResult>,
}

impl AggregateSummary {
    /// Append a module result. Results are kept in execution order.
    pub fn push(&mut self, result: SeedResult) {
        debug_assert!(
            !self.results.iter().any(|r| r.module == result.module),
            "duplicate module result: {}",
            result.module
        );
        self.results.push(result);
    }

    /// All module results in execution order.
    pub fn results(&self) -> &[SeedResult] {
        &self.results
    }

    /// Consume the summary, yielding the results.
    pub fn into_results(self) -> Vec<SeedResult> {
        self.results
    }

    /// Total documents created across all successful and failed passes.
    pub fn total_created(&self) -> u64 {
        self.results.iter().map(|r| r.created).sum()
    }

    /// Number of modules that succeeded.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of modules that failed.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }

    /// Sum of per-module durations in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.results.iter().map(|r| r.duration_ms).sum()
    }

    /// Whether every attempted module succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
}
