//! The document gateway trait and its document types.

use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field name to value mapping of one document.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Opaque identifier of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document as returned by a list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub fields: FieldMap,
}

impl StoredDocument {
    /// String value of a field, if present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }

    /// Numeric value of a field, if present and a number.
    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(|v| v.as_f64())
    }
}

/// Collection-scoped persistence operations consumed by the seeding engine.
///
/// Collections are independent named groupings of documents; the engine
/// never assumes any cross-collection semantics, and list order is
/// whatever the store defines.
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    /// Create a document and return its identifier.
    async fn create_document(
        &self,
        collection: &str,
        fields: FieldMap,
    ) -> Result<DocumentId, GatewayError>;

    /// List up to `limit` documents from a collection (all when `None`).
    ///
    /// An absent or empty collection yields an empty vec, never an error.
    async fn list_documents(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, GatewayError>;

    /// Delete one document by identifier.
    async fn delete_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<(), GatewayError>;
}
