//! In-memory emulator backend.

use crate::error::GatewayError;
use crate::gateway::{DocumentGateway, DocumentId, FieldMap, StoredDocument};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An in-process, ephemeral document backend.
///
/// Collections are created lazily on first write and documents keep their
/// insertion order, which is the store-defined list order. All state is
/// lost when the process exits; that is the point of the sandbox.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in a collection.
    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Names of collections that have received at least one write.
    pub async fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl DocumentGateway for MemoryBackend {
    async fn create_document(
        &self,
        collection: &str,
        fields: FieldMap,
    ) -> Result<DocumentId, GatewayError> {
        let id = DocumentId::new(Uuid::new_v4().to_string());
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, GatewayError> {
        let collections = self.collections.read().await;
        let docs = collections.get(collection).map_or(&[][..], Vec::as_slice);
        let take = limit.unwrap_or(docs.len());
        Ok(docs.iter().take(take).cloned().collect())
    }

    async fn delete_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<(), GatewayError> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        match docs.iter().position(|d| &d.id == id) {
            Some(index) => {
                docs.remove(index);
                Ok(())
            }
            None => Err(GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }
}
