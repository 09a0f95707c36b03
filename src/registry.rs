//! Static module registry and dependency-respecting execution order.
//!
//! Every entity type is registered here explicitly, mapping its name to
//! its seeder. Declared dependencies form a small DAG; the execution
//! order is a topological sort of the requested set, so adding a module
//! never requires editing a hand-maintained sequence.

use crate::error::OrchestratorError;
use crate::modules::{ConfigSeeder, OrdersSeeder, ProductsSeeder, UsersSeeder};
use crate::seeder::EntitySeeder;
use std::collections::HashSet;

/// Which modules an invocation asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleSelection {
    /// Every registered module.
    All,
    /// An explicit set of module names.
    Modules(Vec<String>),
}

impl ModuleSelection {
    /// Interpret a CLI/API target string: `"all"` or one module name.
    pub fn parse(target: &str) -> Self {
        if target.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Modules(vec![target.to_string()])
        }
    }
}

/// The set of registered entity seeders.
pub struct ModuleRegistry {
    seeders: Vec<Box<dyn EntitySeeder>>,
}

impl ModuleRegistry {
    /// The four built-in modules.
    pub fn builtin() -> Self {
        Self::from_seeders(vec![
            Box::new(UsersSeeder),
            Box::new(ProductsSeeder),
            Box::new(OrdersSeeder),
            Box::new(ConfigSeeder),
        ])
    }

    pub fn from_seeders(seeders: Vec<Box<dyn EntitySeeder>>) -> Self {
        Self { seeders }
    }

    /// Registered module names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.seeders.iter().map(|s| s.module()).collect()
    }

    /// All registered seeders, in registration order.
    pub fn seeders(&self) -> impl Iterator<Item = &dyn EntitySeeder> {
        self.seeders.iter().map(Box::as_ref)
    }

    /// Look up one seeder by module name.
    pub fn get(&self, module: &str) -> Option<&dyn EntitySeeder> {
        self.seeders
            .iter()
            .find(|s| s.module() == module)
            .map(Box::as_ref)
    }

    /// Resolve the requested selection into a dependency-respecting order.
    ///
    /// Dependency edges are only honored between selected modules:
    /// requesting `orders` alone does not pull in `users`, it just samples
    /// whatever parents already exist. A module named more than once is
    /// scheduled once. Ties keep registration order, so the result is
    /// deterministic.
    pub fn execution_order(
        &self,
        selection: &ModuleSelection,
    ) -> Result<Vec<&dyn EntitySeeder>, OrchestratorError> {
        let selected: Vec<&dyn EntitySeeder> = match selection {
            ModuleSelection::All => self.seeders.iter().map(Box::as_ref).collect(),
            ModuleSelection::Modules(names) => {
                let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
                let mut picked = Vec::with_capacity(names.len());
                for name in names {
                    let seeder = self
                        .get(name)
                        .ok_or_else(|| OrchestratorError::UnknownModule(name.clone()))?;
                    if seen.insert(seeder.module()) {
                        picked.push(seeder);
                    }
                }
                picked
            }
        };

        // Kahn's algorithm over the selected subgraph.
        let selected_collections: HashSet<&str> =
            selected.iter().map(|s| s.collection()).collect();
        let mut ordered: Vec<&dyn EntitySeeder> = Vec::with_capacity(selected.len());
        let mut done: HashSet<&str> = HashSet::new();
        let mut remaining: Vec<&dyn EntitySeeder> = selected;

        while !remaining.is_empty() {
            let mut progressed = false;
            let mut next_round = Vec::new();

            for seeder in remaining {
                let ready = seeder.dependencies().iter().all(|dep| {
                    !selected_collections.contains(dep.collection) || done.contains(dep.collection)
                });
                if ready {
                    done.insert(seeder.collection());
                    ordered.push(seeder);
                    progressed = true;
                } else {
                    next_round.push(seeder);
                }
            }

            if !progressed {
                let stuck = next_round.iter().map(|s| s.module().to_string()).collect();
                return Err(OrchestratorError::DependencyCycle(stuck));
            }
            remaining = next_round;
        }

        Ok(ordered)
    }
}
