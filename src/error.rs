//! Engine error taxonomy.

use seed_core::TemplateError;
use seed_gateway::GatewayError;
use seed_generator::ConstraintError;
use std::time::Duration;

/// Errors that can end a single seeding pass.
///
/// All of these are caught at the pass boundary and converted into a
/// failed [`seed_core::SeedResult`]; they never abort the orchestrator's
/// loop over other modules.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Template missing or malformed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Malformed generation constraints (e.g. min > max).
    #[error(transparent)]
    InvalidConstraint(#[from] ConstraintError),

    /// The gateway could not be queried while resolving a parent pool.
    #[error("dependency pool unavailable for collection '{collection}': {source}")]
    DependencyUnavailable {
        collection: String,
        #[source]
        source: GatewayError,
    },

    /// A write or delete against the gateway failed.
    #[error("persistence failure on collection '{collection}': {source}")]
    Persistence {
        collection: String,
        #[source]
        source: GatewayError,
    },

    /// A persistence batch exceeded the configured timeout.
    #[error("persistence on collection '{collection}' timed out after {timeout:?}")]
    Timeout {
        collection: String,
        timeout: Duration,
    },
}

/// Errors raised by the orchestrator before any pass runs.
///
/// Unlike [`SeedError`] these are fatal for the whole invocation: there
/// is nothing meaningful to seed.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// Requested module is not in the registry.
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// Declared dependencies do not form a DAG.
    #[error("dependency cycle detected among modules: {0:?}")]
    DependencyCycle(Vec<String>),

    /// Fixture templates failed to load.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
