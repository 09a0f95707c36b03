//! Seed orchestration engine for sandbox environments.
//!
//! Populates an emulated document backend with relationally consistent
//! fixture data across entity types (users, products, orders, config).
//! Modules declare their parent collections; the orchestrator runs one
//! pass per module in dependency order, isolates pass failures, and
//! aggregates per-module results into a run summary.

pub mod api;
pub mod error;
pub mod modules;
pub mod orchestrator;
pub mod registry;
pub mod resolver;
pub mod seeder;

pub use api::{handle_seed_request, list_modules, ModuleInfo, SeedRequest, SeedResponse};
pub use error::{OrchestratorError, SeedError};
pub use orchestrator::Orchestrator;
pub use registry::{ModuleRegistry, ModuleSelection};
pub use resolver::{resolve_pool, DependencyPool, PoolSet};
pub use seeder::{Dependency, EntitySeeder, RunnerSettings, SeedRunner, DEFAULT_COUNT};
