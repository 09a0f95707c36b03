//! Shared types for the sandbox-seed engine.
//!
//! This crate defines the contract between the orchestrator and the
//! per-module entity seeders:
//!
//! - [`SeedOptions`] - per-invocation options, constructed once from CLI
//!   flags or an API request body and passed unchanged into every seeder.
//! - [`SeedResult`] - the outcome of one seeding pass for one module.
//! - [`AggregateSummary`] - ordered results of a multi-module run plus
//!   derived totals.
//! - [`TemplateStore`] - read-only, hand-authored business-rule templates
//!   (category catalogs, status workflows, pricing tiers, tax rates)
//!   embedded as JSON documents and parsed once per process.
//!
//! None of these types touch the network or the document backend.

pub mod options;
pub mod report;
pub mod template;

// Re-exports for convenience
pub use options::SeedOptions;
pub use report::{AggregateSummary, SeedResult};
pub use template::{
    CategorySpec, ConfigTemplate, EntityTemplate, OrdersTemplate, ProductsTemplate, TemplateError,
    TemplateStore, UsersTemplate,
};
