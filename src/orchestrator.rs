//! Top-level run coordination.
//!
//! The orchestrator owns the registry, the template store and the runner
//! settings, and drives one pass per selected module in dependency order.
//! A failed pass is recorded in the summary and never stops the remaining
//! modules.

use crate::error::OrchestratorError;
use crate::registry::{ModuleRegistry, ModuleSelection};
use crate::seeder::{RunnerSettings, SeedRunner};
use seed_core::{AggregateSummary, SeedOptions, TemplateStore};
use seed_gateway::DocumentGateway;
use std::sync::Arc;
use tracing::info;

/// Coordinates seeding runs against one gateway handle.
pub struct Orchestrator {
    gateway: Arc<dyn DocumentGateway>,
    registry: ModuleRegistry,
    templates: TemplateStore,
    settings: RunnerSettings,
}

impl Orchestrator {
    /// Orchestrator over the built-in modules and templates.
    pub fn new(gateway: Arc<dyn DocumentGateway>) -> Result<Self, OrchestratorError> {
        Ok(Self {
            gateway,
            registry: ModuleRegistry::builtin(),
            templates: TemplateStore::builtin()?,
            settings: RunnerSettings::default(),
        })
    }

    pub fn with_settings(mut self, settings: RunnerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The module registry backing this orchestrator.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Run one pass per selected module, in dependency order.
    ///
    /// Returns an error only for invalid selections (unknown module,
    /// dependency cycle). Pass failures are reported inside the summary.
    pub async fn run(
        &self,
        selection: &ModuleSelection,
        options: &SeedOptions,
    ) -> Result<AggregateSummary, OrchestratorError> {
        let ordered = self.registry.execution_order(selection)?;
        let runner = SeedRunner::with_settings(
            self.gateway.as_ref(),
            &self.templates,
            self.settings.clone(),
        );

        let mut summary = AggregateSummary::default();
        for seeder in ordered {
            if options.skips(seeder.module()) {
                info!(module = seeder.module(), "module skipped");
                continue;
            }
            summary.push(runner.run_pass(seeder, options).await);
        }

        info!(
            modules = summary.results().len(),
            created = summary.total_created(),
            failed = summary.failure_count(),
            "run complete"
        );
        Ok(summary)
    }
}
