//! Relationship resolution: parent-record pools for dependent modules.

use crate::error::SeedError;
use rand::seq::IndexedRandom;
use rand::Rng;
use seed_gateway::{DocumentGateway, DocumentId, StoredDocument};
use std::collections::HashMap;
use tracing::debug;

/// Read-only snapshot of parent-entity documents, captured once at the
/// start of a dependent module's pass and discarded after it.
#[derive(Debug, Clone, Default)]
pub struct DependencyPool {
    docs: Vec<StoredDocument>,
}

impl DependencyPool {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Sample one parent document, or `None` when the pool is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&StoredDocument> {
        self.docs.choose(rng)
    }

    /// Sample one parent identifier, or `None` when the pool is empty.
    pub fn sample_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<DocumentId> {
        self.sample(rng).map(|doc| doc.id.clone())
    }

    /// All identifiers in the snapshot.
    pub fn ids(&self) -> Vec<&DocumentId> {
        self.docs.iter().map(|d| &d.id).collect()
    }
}

/// Query the gateway for up to `limit` existing parent documents.
///
/// An empty collection yields an empty pool; dependent generation must
/// treat that as "no parent available" and write a null foreign key. Only
/// an unreachable gateway is an error.
pub async fn resolve_pool(
    gateway: &dyn DocumentGateway,
    collection: &str,
    limit: usize,
) -> Result<DependencyPool, SeedError> {
    let docs = gateway
        .list_documents(collection, Some(limit))
        .await
        .map_err(|source| SeedError::DependencyUnavailable {
            collection: collection.to_string(),
            source,
        })?;

    debug!(
        collection,
        size = docs.len(),
        "resolved dependency pool"
    );

    Ok(DependencyPool { docs })
}

/// The dependency pools of one seeding pass, keyed by parent collection.
#[derive(Debug, Clone, Default)]
pub struct PoolSet {
    pools: HashMap<String, DependencyPool>,
}

impl PoolSet {
    pub fn insert(&mut self, collection: impl Into<String>, pool: DependencyPool) {
        self.pools.insert(collection.into(), pool);
    }

    /// The pool for a parent collection; an undeclared collection behaves
    /// like an empty pool.
    pub fn get(&self, collection: &str) -> Option<&DependencyPool> {
        self.pools.get(collection)
    }

    /// Sample one parent document from the named pool.
    pub fn sample<'a, R: Rng + ?Sized>(
        &'a self,
        rng: &mut R,
        collection: &str,
    ) -> Option<&'a StoredDocument> {
        self.pools.get(collection).and_then(|p| p.sample(rng))
    }

    /// Sample one parent identifier from the named pool.
    pub fn sample_id<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        collection: &str,
    ) -> Option<DocumentId> {
        self.pools.get(collection).and_then(|p| p.sample_id(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_gateway::{FieldMap, MemoryBackend};
    use serde_json::json;

    fn fields(value: serde_json::Value) -> FieldMap {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_pool_bounded() {
        let backend = MemoryBackend::new();
        for i in 0..20 {
            backend
                .create_document("users", fields(json!({"i": i})))
                .await
                .unwrap();
        }

        let pool = resolve_pool(&backend, "users", 5).await.unwrap();
        assert_eq!(pool.len(), 5);
    }

    #[tokio::test]
    async fn test_resolve_empty_collection_is_not_an_error() {
        let backend = MemoryBackend::new();
        let pool = resolve_pool(&backend, "users", 50).await.unwrap();
        assert!(pool.is_empty());

        let mut rng = StdRng::seed_from_u64(42);
        assert!(pool.sample(&mut rng).is_none());
        assert!(pool.sample_id(&mut rng).is_none());
    }

    #[tokio::test]
    async fn test_sample_comes_from_snapshot() {
        let backend = MemoryBackend::new();
        let id = backend
            .create_document("users", fields(json!({"name": "Ada"})))
            .await
            .unwrap();

        let pool = resolve_pool(&backend, "users", 50).await.unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pool.sample_id(&mut rng), Some(id));
    }

    #[test]
    fn test_poolset_missing_collection_samples_none() {
        let pools = PoolSet::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pools.sample_id(&mut rng, "users").is_none());
    }
}
