//! The entity seeder contract and the pass runner.
//!
//! One seeding pass walks the states `START → (CLEARING) →
//! RESOLVING_DEPENDENCIES → GENERATING → PERSISTING → DONE`, with `FAILED`
//! reachable from any of them. [`SeedRunner::run_pass`] drives the walk
//! and converts every failure into a failed [`SeedResult`] at the pass
//! boundary, so one module's failure can never abort another's pass.

use crate::error::SeedError;
use crate::resolver::{resolve_pool, PoolSet};
use futures::future::join_all;
use rand::rngs::StdRng;
use seed_core::{SeedOptions, SeedResult, TemplateStore};
use seed_gateway::{DocumentGateway, FieldMap};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default number of documents per module.
pub const DEFAULT_COUNT: u64 = 10;

/// Default timeout for one persistence batch (deletes or writes).
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(30);

/// A declared dependency on another module's collection.
#[derive(Debug, Clone, Copy)]
pub struct Dependency {
    /// Parent collection to sample from.
    pub collection: &'static str,
    /// Maximum number of parent documents to snapshot.
    pub limit: usize,
}

/// One entity type's generation logic.
///
/// Implementations are pure on the generation side: `generate` builds one
/// document from the RNG, the templates and the dependency pools, without
/// touching the gateway. All I/O belongs to the runner.
pub trait EntitySeeder: Send + Sync {
    /// Module name, unique within the registry.
    fn module(&self) -> &'static str;

    /// Destination collection. Defaults to the module name.
    fn collection(&self) -> &'static str {
        self.module()
    }

    /// Parent collections this module samples foreign keys from.
    fn dependencies(&self) -> &'static [Dependency] {
        &[]
    }

    /// Document count used when the options carry none.
    fn default_count(&self) -> u64 {
        DEFAULT_COUNT
    }

    /// Build the document for one record.
    ///
    /// `index` is the zero-based position within the pass; records are
    /// independent of one another and may only reference parents from
    /// `pools`, never siblings generated in the same pass.
    fn generate(
        &self,
        rng: &mut StdRng,
        templates: &TemplateStore,
        pools: &PoolSet,
        index: u64,
    ) -> Result<FieldMap, SeedError>;
}

impl std::fmt::Debug for dyn EntitySeeder + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntitySeeder")
            .field("module", &self.module())
            .finish()
    }
}

/// Tunables shared by every pass of one invocation.
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// Optional seed for deterministic generation.
    pub seed: Option<u64>,
    /// Timeout applied to each persistence batch.
    pub persist_timeout: Duration,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            seed: None,
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }
}

/// Counts that survive a pass failure.
#[derive(Debug, Default)]
struct PassProgress {
    created: u64,
    deleted: u64,
}

/// Drives seeding passes against one gateway handle.
pub struct SeedRunner<'a> {
    gateway: &'a dyn DocumentGateway,
    templates: &'a TemplateStore,
    settings: RunnerSettings,
}

impl<'a> SeedRunner<'a> {
    pub fn new(gateway: &'a dyn DocumentGateway, templates: &'a TemplateStore) -> Self {
        Self::with_settings(gateway, templates, RunnerSettings::default())
    }

    pub fn with_settings(
        gateway: &'a dyn DocumentGateway,
        templates: &'a TemplateStore,
        settings: RunnerSettings,
    ) -> Self {
        Self {
            gateway,
            templates,
            settings,
        }
    }

    /// Run one complete pass for one module.
    ///
    /// Never returns an error: failures become a `success = false` result
    /// carrying the counts that landed before the failure.
    pub async fn run_pass(&self, seeder: &dyn EntitySeeder, options: &SeedOptions) -> SeedResult {
        let start = Instant::now();
        let mut progress = PassProgress::default();

        match self.execute(seeder, options, &mut progress).await {
            Ok(()) => {
                info!(
                    module = seeder.module(),
                    created = progress.created,
                    deleted = progress.deleted,
                    "seeding pass complete"
                );
                SeedResult::succeeded(
                    seeder.module(),
                    progress.created,
                    progress.deleted,
                    start.elapsed(),
                )
            }
            Err(e) => {
                warn!(module = seeder.module(), error = %e, "seeding pass failed");
                SeedResult::failed(
                    seeder.module(),
                    progress.created,
                    progress.deleted,
                    start.elapsed(),
                    e,
                )
            }
        }
    }

    async fn execute(
        &self,
        seeder: &dyn EntitySeeder,
        options: &SeedOptions,
        progress: &mut PassProgress,
    ) -> Result<(), SeedError> {
        let collection = seeder.collection();

        // CLEARING: must fully complete before anything else touches the
        // collection, so deletes of old data never interleave with inserts.
        if options.clear {
            self.clear_collection(collection, progress).await?;
        }

        // RESOLVING_DEPENDENCIES: one bounded snapshot per declared parent,
        // captured after the clear and never refreshed mid-pass.
        let mut pools = PoolSet::default();
        for dependency in seeder.dependencies() {
            let pool = resolve_pool(self.gateway, dependency.collection, dependency.limit).await?;
            pools.insert(dependency.collection, pool);
        }

        // GENERATING: exactly `count` independent records.
        let count = options.effective_count(seeder.default_count());
        let mut rng = seed_generator::rng::seed_rng(self.settings.seed);
        let mut records = Vec::with_capacity(count as usize);
        for index in 0..count {
            records.push(seeder.generate(&mut rng, self.templates, &pools, index)?);
        }
        debug!(module = seeder.module(), count, "generated records");

        // PERSISTING
        self.persist(collection, records, progress).await
    }

    /// Delete every document currently in the collection.
    async fn clear_collection(
        &self,
        collection: &str,
        progress: &mut PassProgress,
    ) -> Result<(), SeedError> {
        let existing = self
            .gateway
            .list_documents(collection, None)
            .await
            .map_err(|source| SeedError::Persistence {
                collection: collection.to_string(),
                source,
            })?;

        let deletes = existing
            .iter()
            .map(|doc| self.gateway.delete_document(collection, &doc.id));
        let outcomes = tokio::time::timeout(self.settings.persist_timeout, join_all(deletes))
            .await
            .map_err(|_| SeedError::Timeout {
                collection: collection.to_string(),
                timeout: self.settings.persist_timeout,
            })?;

        let mut first_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(()) => progress.deleted += 1,
                Err(source) => {
                    first_error.get_or_insert(source);
                }
            }
        }

        info!(collection, deleted = progress.deleted, "cleared collection");

        match first_error {
            None => Ok(()),
            Some(source) => Err(SeedError::Persistence {
                collection: collection.to_string(),
                source,
            }),
        }
    }

    /// Write the generated batch concurrently.
    ///
    /// `created` counts the writes that actually succeeded, so a failed
    /// pass with partial writes is observable instead of implying zero.
    async fn persist(
        &self,
        collection: &str,
        records: Vec<FieldMap>,
        progress: &mut PassProgress,
    ) -> Result<(), SeedError> {
        let writes = records
            .into_iter()
            .map(|fields| self.gateway.create_document(collection, fields));
        let outcomes = tokio::time::timeout(self.settings.persist_timeout, join_all(writes))
            .await
            .map_err(|_| SeedError::Timeout {
                collection: collection.to_string(),
                timeout: self.settings.persist_timeout,
            })?;

        let mut first_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(_) => progress.created += 1,
                Err(source) => {
                    first_error.get_or_insert(source);
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(source) => Err(SeedError::Persistence {
                collection: collection.to_string(),
                source,
            }),
        }
    }
}
