//! JSON request/response surface.
//!
//! Mirrors the wire contract of an HTTP trigger: a request names a target
//! module (or `"all"`) plus options, and the response is either the single
//! module's result or the list of results in execution order.

use crate::error::OrchestratorError;
use crate::orchestrator::Orchestrator;
use crate::registry::ModuleSelection;
use seed_core::{SeedOptions, SeedResult};
use serde::{Deserialize, Serialize};

fn default_module() -> String {
    "all".to_string()
}

/// One seeding request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRequest {
    /// Target module name, or `"all"`.
    #[serde(default = "default_module")]
    pub module: String,

    /// Per-invocation options.
    #[serde(default, flatten)]
    pub options: SeedOptions,
}

impl Default for SeedRequest {
    fn default() -> Self {
        Self {
            module: default_module(),
            options: SeedOptions::default(),
        }
    }
}

/// Response payload for one seeding request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SeedResponse {
    /// Result of seeding a single named module.
    Single(SeedResult),
    /// Results of a multi-module run, in execution order.
    Many(Vec<SeedResult>),
}

/// One registered module, as reported by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub module: &'static str,
    pub default_count: u64,
    pub dependencies: Vec<&'static str>,
}

/// Describe the registered modules, in registration order.
pub fn list_modules(orchestrator: &Orchestrator) -> Vec<ModuleInfo> {
    orchestrator
        .registry()
        .seeders()
        .map(|seeder| ModuleInfo {
            module: seeder.module(),
            default_count: seeder.default_count(),
            dependencies: seeder
                .dependencies()
                .iter()
                .map(|d| d.collection)
                .collect(),
        })
        .collect()
}

/// Execute one request against the orchestrator.
///
/// A single-module target yields `Single`; `"all"` yields `Many` even when
/// the skip list narrows the run down to one module.
pub async fn handle_seed_request(
    orchestrator: &Orchestrator,
    request: &SeedRequest,
) -> Result<SeedResponse, OrchestratorError> {
    let selection = ModuleSelection::parse(&request.module);
    let summary = orchestrator.run(&selection, &request.options).await?;
    let mut results = summary.into_results();

    match selection {
        ModuleSelection::All => Ok(SeedResponse::Many(results)),
        ModuleSelection::Modules(_) => {
            // A one-module selection produces exactly one result unless the
            // module also appears on the skip list.
            match results.pop() {
                Some(result) if results.is_empty() => Ok(SeedResponse::Single(result)),
                _ => Ok(SeedResponse::Many(results)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_gateway::MemoryBackend;
    use std::sync::Arc;

    #[test]
    fn test_request_defaults() {
        let request: SeedRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.module, "all");
        assert!(!request.options.clear);
        assert_eq!(request.options.count, None);
    }

    #[test]
    fn test_request_flattens_options() {
        let request: SeedRequest =
            serde_json::from_str(r#"{"module": "users", "clear": true, "count": 3}"#).unwrap();
        assert_eq!(request.module, "users");
        assert!(request.options.clear);
        assert_eq!(request.options.count, Some(3));
    }

    #[tokio::test]
    async fn test_single_module_response_shape() {
        let orchestrator = Orchestrator::new(Arc::new(MemoryBackend::new())).unwrap();
        let request = SeedRequest {
            module: "users".to_string(),
            ..Default::default()
        };

        let response = handle_seed_request(&orchestrator, &request).await.unwrap();
        match response {
            SeedResponse::Single(result) => {
                assert_eq!(result.module, "users");
                assert_eq!(result.created, 10);
            }
            SeedResponse::Many(_) => panic!("expected a single result"),
        }
    }

    #[test]
    fn test_list_modules_reports_dependencies() {
        let orchestrator = Orchestrator::new(Arc::new(MemoryBackend::new())).unwrap();
        let modules = list_modules(&orchestrator);

        assert_eq!(modules.len(), 4);
        let orders = modules.iter().find(|m| m.module == "orders").unwrap();
        assert_eq!(orders.dependencies, vec!["users", "products"]);
        let config = modules.iter().find(|m| m.module == "config").unwrap();
        assert_eq!(config.default_count, 1);
        assert!(config.dependencies.is_empty());
    }

    #[tokio::test]
    async fn test_all_response_is_a_list() {
        let orchestrator = Orchestrator::new(Arc::new(MemoryBackend::new())).unwrap();
        let response = handle_seed_request(&orchestrator, &SeedRequest::default())
            .await
            .unwrap();

        match response {
            SeedResponse::Many(results) => assert_eq!(results.len(), 4),
            SeedResponse::Single(_) => panic!("expected a result list"),
        }
    }
}
