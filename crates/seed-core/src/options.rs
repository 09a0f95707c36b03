//! Per-invocation seeding options.

use serde::{Deserialize, Serialize};

/// Options for one seeding invocation.
///
/// Constructed once (from CLI flags or an API request body) and passed
/// unchanged into every entity seeder the invocation touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedOptions {
    /// Clear existing documents from the module's collection before seeding.
    pub clear: bool,

    /// Number of documents to generate. Falls back to the module default
    /// (typically 10) when absent. Zero is a valid no-op pass.
    pub count: Option<u64>,

    /// Module names to skip when seeding multiple modules.
    pub skip: Vec<String>,
}

impl SeedOptions {
    /// Resolve the document count for a module with the given default.
    pub fn effective_count(&self, module_default: u64) -> u64 {
        self.count.unwrap_or(module_default)
    }

    /// Whether the given module is on the skip list.
    pub fn skips(&self, module: &str) -> bool {
        self.skip.iter().any(|m| m == module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SeedOptions::default();
        assert!(!options.clear);
        assert_eq!(options.effective_count(10), 10);
        assert!(!options.skips("users"));
    }

    #[test]
    fn test_explicit_count_wins() {
        let options = SeedOptions {
            count: Some(3),
            ..Default::default()
        };
        assert_eq!(options.effective_count(10), 3);
    }

    #[test]
    fn test_deserialize_from_api_body() {
        let options: SeedOptions =
            serde_json::from_str(r#"{"clear": true, "count": 5, "skip": ["config"]}"#).unwrap();
        assert!(options.clear);
        assert_eq!(options.count, Some(5));
        assert!(options.skips("config"));
    }

    #[test]
    fn test_deserialize_empty_body() {
        let options: SeedOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SeedOptions::default());
    }
}
