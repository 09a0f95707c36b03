//! Persistence gateway for the sandbox-seed engine.
//!
//! The engine treats the document backend as an opaque gateway with three
//! collection-scoped operations: create, bounded list, and delete. The
//! [`DocumentGateway`] trait is that seam; [`MemoryBackend`] is the
//! emulated in-process backend used by the CLI and the test suite.
//!
//! The gateway handle is constructed once at process start and passed down
//! explicitly into the orchestrator and each seeder; there is no global
//! client state.

pub mod error;
pub mod gateway;
pub mod memory;

// Re-exports for convenience
pub use error::GatewayError;
pub use gateway::{DocumentGateway, DocumentId, FieldMap, StoredDocument};
pub use memory::MemoryBackend;
