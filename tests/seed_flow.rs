//! End-to-end seeding flows against the in-memory backend.

use async_trait::async_trait;
use sandbox_seed::{
    handle_seed_request, ModuleSelection, Orchestrator, RunnerSettings, SeedRequest, SeedResponse,
};
use seed_core::SeedOptions;
use seed_gateway::{
    DocumentGateway, DocumentId, FieldMap, GatewayError, MemoryBackend, StoredDocument,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn options(clear: bool, count: Option<u64>) -> SeedOptions {
    SeedOptions {
        clear,
        count,
        ..Default::default()
    }
}

#[tokio::test]
async fn seeding_with_clear_is_idempotent() {
    let backend = Arc::new(MemoryBackend::new());
    let orchestrator = Orchestrator::new(backend.clone()).unwrap();

    for _ in 0..2 {
        let summary = orchestrator
            .run(&ModuleSelection::All, &options(true, None))
            .await
            .unwrap();
        assert!(summary.all_succeeded());
    }

    // The second run deleted the first run's documents before reseeding.
    assert_eq!(backend.document_count("users").await, 10);
    assert_eq!(backend.document_count("products").await, 10);
    assert_eq!(backend.document_count("orders").await, 10);
    assert_eq!(backend.document_count("config").await, 1);
}

#[tokio::test]
async fn explicit_count_controls_documents_per_module() {
    let backend = Arc::new(MemoryBackend::new());
    let orchestrator = Orchestrator::new(backend.clone()).unwrap();

    let summary = orchestrator
        .run(&ModuleSelection::parse("products"), &options(false, Some(25)))
        .await
        .unwrap();

    assert_eq!(summary.total_created(), 25);
    assert_eq!(backend.document_count("products").await, 25);
}

#[tokio::test]
async fn orders_reference_users_and_products_from_the_same_run() {
    let backend = Arc::new(MemoryBackend::new());
    let orchestrator = Orchestrator::new(backend.clone()).unwrap();

    // Dependency order guarantees users and products land before orders.
    let summary = orchestrator
        .run(&ModuleSelection::All, &options(true, None))
        .await
        .unwrap();
    assert!(summary.all_succeeded());

    let user_ids: HashSet<String> = backend
        .list_documents("users", None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id.as_str().to_string())
        .collect();
    let product_ids: HashSet<String> = backend
        .list_documents("products", None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id.as_str().to_string())
        .collect();

    let orders = backend.list_documents("orders", None).await.unwrap();
    assert_eq!(orders.len(), 10);
    for order in orders {
        // Pools are non-empty in a full run, so foreign keys are real ids.
        let user_id = order.fields["userId"].as_str().unwrap();
        assert!(user_ids.contains(user_id), "dangling userId {user_id}");

        for item in order.fields["lineItems"].as_array().unwrap() {
            let product_id = item["productId"].as_str().unwrap();
            assert!(product_ids.contains(product_id), "dangling productId {product_id}");
        }
    }
}

#[tokio::test]
async fn small_fixture_scenario() {
    let backend = Arc::new(MemoryBackend::new());
    let orchestrator = Orchestrator::new(backend.clone()).unwrap();

    orchestrator
        .run(&ModuleSelection::parse("users"), &options(true, Some(3)))
        .await
        .unwrap();
    orchestrator
        .run(&ModuleSelection::parse("products"), &options(true, Some(10)))
        .await
        .unwrap();
    let summary = orchestrator
        .run(&ModuleSelection::parse("orders"), &options(true, Some(5)))
        .await
        .unwrap();

    assert!(summary.all_succeeded());
    assert_eq!(backend.document_count("orders").await, 5);

    let user_ids: HashSet<String> = backend
        .list_documents("users", None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id.as_str().to_string())
        .collect();
    assert_eq!(user_ids.len(), 3);

    for order in backend.list_documents("orders", None).await.unwrap() {
        let user_id = order.fields["userId"].as_str().unwrap();
        assert!(user_ids.contains(user_id));

        // Pricing stays consistent end to end.
        let pricing = &order.fields["pricing"];
        let cents = |v: &serde_json::Value| (v.as_f64().unwrap() * 100.0).round() as i64;
        assert_eq!(
            cents(&pricing["total"]),
            cents(&pricing["subtotal"]) + cents(&pricing["taxAmount"]) + cents(&pricing["shippingCost"])
        );
    }
}

#[tokio::test]
async fn api_request_round_trip() {
    let orchestrator = Orchestrator::new(Arc::new(MemoryBackend::new())).unwrap();

    let request: SeedRequest =
        serde_json::from_str(r#"{"module": "all", "clear": true, "count": 2}"#).unwrap();
    let response = handle_seed_request(&orchestrator, &request).await.unwrap();

    let results = match response {
        SeedResponse::Many(results) => results,
        SeedResponse::Single(_) => panic!("expected a result list"),
    };
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.success));
    assert!(results.iter().all(|r| r.created == 2));

    // Execution order puts orders after both of its parents.
    let position = |name: &str| results.iter().position(|r| r.module == name).unwrap();
    assert!(position("orders") > position("users"));
    assert!(position("orders") > position("products"));
}

/// Gateway wrapper that rejects every other write to one collection.
struct FlakyGateway {
    inner: MemoryBackend,
    fail_collection: &'static str,
    writes: AtomicU64,
}

impl FlakyGateway {
    fn new(fail_collection: &'static str) -> Self {
        Self {
            inner: MemoryBackend::new(),
            fail_collection,
            writes: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl DocumentGateway for FlakyGateway {
    async fn create_document(
        &self,
        collection: &str,
        fields: FieldMap,
    ) -> Result<DocumentId, GatewayError> {
        if collection == self.fail_collection
            && self.writes.fetch_add(1, Ordering::SeqCst) % 2 == 1
        {
            return Err(GatewayError::Backend("injected write failure".to_string()));
        }
        self.inner.create_document(collection, fields).await
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, GatewayError> {
        self.inner.list_documents(collection, limit).await
    }

    async fn delete_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<(), GatewayError> {
        self.inner.delete_document(collection, id).await
    }
}

/// Gateway whose list operation always fails, as if the backend were down.
struct UnreachableListGateway;

#[async_trait]
impl DocumentGateway for UnreachableListGateway {
    async fn create_document(
        &self,
        _collection: &str,
        _fields: FieldMap,
    ) -> Result<DocumentId, GatewayError> {
        Ok(DocumentId::new("unused"))
    }

    async fn list_documents(
        &self,
        _collection: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".to_string()))
    }

    async fn delete_document(
        &self,
        _collection: &str,
        _id: &DocumentId,
    ) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[tokio::test]
async fn unreachable_parent_pool_fails_the_dependent_pass() {
    let orchestrator = Orchestrator::new(Arc::new(UnreachableListGateway)).unwrap();

    let summary = orchestrator
        .run(&ModuleSelection::parse("orders"), &options(false, None))
        .await
        .unwrap();

    let orders = &summary.results()[0];
    assert!(!orders.success);
    // Resolution fails before anything is generated or written.
    assert_eq!(orders.created, 0);
    let error = orders.error.as_deref().unwrap();
    assert!(error.contains("dependency pool unavailable"), "{error}");
    assert!(error.contains("users"), "{error}");
}

/// Gateway whose writes never complete.
struct StallingGateway;

#[async_trait]
impl DocumentGateway for StallingGateway {
    async fn create_document(
        &self,
        _collection: &str,
        _fields: FieldMap,
    ) -> Result<DocumentId, GatewayError> {
        std::future::pending().await
    }

    async fn list_documents(
        &self,
        _collection: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, GatewayError> {
        Ok(Vec::new())
    }

    async fn delete_document(
        &self,
        _collection: &str,
        _id: &DocumentId,
    ) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[tokio::test]
async fn stalled_writes_become_a_failed_pass_after_the_timeout() {
    let settings = RunnerSettings {
        seed: None,
        persist_timeout: Duration::from_millis(50),
    };
    let orchestrator = Orchestrator::new(Arc::new(StallingGateway))
        .unwrap()
        .with_settings(settings);

    let summary = orchestrator
        .run(&ModuleSelection::parse("users"), &options(false, None))
        .await
        .unwrap();

    let users = &summary.results()[0];
    assert!(!users.success);
    assert_eq!(users.created, 0);
    let error = users.error.as_deref().unwrap();
    assert!(error.contains("timed out"), "{error}");
}

#[tokio::test]
async fn failed_module_does_not_abort_the_run() {
    let gateway = Arc::new(FlakyGateway::new("products"));
    let orchestrator = Orchestrator::new(gateway).unwrap();

    let summary = orchestrator
        .run(&ModuleSelection::All, &options(false, None))
        .await
        .unwrap();

    assert_eq!(summary.results().len(), 4);
    assert_eq!(summary.failure_count(), 1);

    let products = summary
        .results()
        .iter()
        .find(|r| r.module == "products")
        .unwrap();
    assert!(!products.success);
    assert!(products.error.as_deref().unwrap().contains("injected write failure"));
    // Half of the writes landed and are reported, not swallowed.
    assert_eq!(products.created, 5);

    // Downstream modules still ran.
    let orders = summary
        .results()
        .iter()
        .find(|r| r.module == "orders")
        .unwrap();
    assert!(orders.success);
    assert_eq!(orders.created, 10);
}
