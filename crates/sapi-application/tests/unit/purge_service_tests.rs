//! Purge service behavior against recording fakes
//!
//! The fakes record every connector update and reindex trigger so the tests
//! can assert exact call counts and ordering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sapi_application::use_cases::PurgeService;
use sapi_domain::entities::{Index, Server};
use sapi_domain::error::{Error, Result};
use sapi_domain::ports::{ReindexTrigger, SearchBackend, SolrBackend, SolrConnector};
use sapi_domain::repositories::{ServerEntry, ServerRepository};
use sapi_domain::value_objects::{Endpoint, UpdateRequest};

const BASE_URL: &str = "http://solr.test:8983";

/// Connector that records update targets: None = default endpoint,
/// Some(target) = per-collection endpoint.
#[derive(Clone, Default, Debug)]
struct RecordingConnector {
    cloud: bool,
    fail_default: bool,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingConnector {
    fn new(cloud: bool) -> Self {
        Self {
            cloud,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SolrConnector for RecordingConnector {
    async fn update(&self, request: &UpdateRequest, endpoint: Option<&Endpoint>) -> Result<()> {
        assert!(!request.is_empty(), "connectors never receive empty requests");
        assert_eq!(request.delete_queries(), &["*:*".to_string()]);

        let target = endpoint.map(|e| e.target().to_string());
        self.calls.lock().unwrap().push(target.clone());

        if target.is_none() && self.fail_default {
            return Err(Error::network("simulated default-endpoint failure"));
        }
        Ok(())
    }

    fn is_cloud(&self) -> bool {
        self.cloud
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }
}

/// Solr-capable backend over the recording connector
#[derive(Debug)]
struct RecordingBackend {
    connector: RecordingConnector,
}

impl SearchBackend for RecordingBackend {
    fn name(&self) -> &str {
        "solr"
    }

    fn as_solr(&self) -> Option<&dyn SolrBackend> {
        Some(self)
    }
}

impl SolrBackend for RecordingBackend {
    fn connector(&self) -> &dyn SolrConnector {
        &self.connector
    }

    fn collection_endpoint(&self, index: &Index) -> Endpoint {
        Endpoint::new(BASE_URL, index.collection_name())
    }
}

/// Backend without the Solr capability
#[derive(Debug)]
struct DatabaseBackend;

impl SearchBackend for DatabaseBackend {
    fn name(&self) -> &str {
        "database"
    }

    fn as_solr(&self) -> Option<&dyn SolrBackend> {
        None
    }
}

/// Reindex trigger recording index ids, optionally failing on one of them
#[derive(Clone, Default)]
struct RecordingTrigger {
    fail_on: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingTrigger {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReindexTrigger for RecordingTrigger {
    async fn reindex(&self, index: &Index) -> Result<()> {
        self.calls.lock().unwrap().push(index.id.clone());
        if self.fail_on.as_deref() == Some(index.id.as_str()) {
            return Err(Error::internal("simulated reindex failure"));
        }
        Ok(())
    }
}

/// In-memory repository over fixture servers
#[derive(Default)]
struct FixtureRepository {
    entries: HashMap<String, (Server, Arc<dyn SearchBackend>)>,
}

impl FixtureRepository {
    fn with_server(mut self, server: Server, backend: Arc<dyn SearchBackend>) -> Self {
        self.entries.insert(server.id.clone(), (server, backend));
        self
    }
}

#[async_trait]
impl ServerRepository for FixtureRepository {
    async fn find_by_id(&self, server_id: &str) -> Result<ServerEntry> {
        let (server, backend) = self
            .entries
            .get(server_id)
            .ok_or_else(|| Error::not_found(format!("server '{server_id}'")))?;
        Ok(ServerEntry {
            server: server.clone(),
            backend: Arc::clone(backend),
        })
    }

    async fn list(&self) -> Result<Vec<Server>> {
        Ok(self.entries.values().map(|(s, _)| s.clone()).collect())
    }
}

fn index(id: &str, enabled: bool, read_only: bool) -> Index {
    Index {
        id: id.to_string(),
        server_id: "srv1".to_string(),
        enabled,
        read_only,
        collection: None,
    }
}

/// The reference fixture: idxA eligible, idxB disabled, idxC read-only
fn srv1(indexes: Vec<Index>) -> Server {
    Server {
        id: "srv1".to_string(),
        name: "Test Server".to_string(),
        backend: "solr".to_string(),
        indexes,
    }
}

fn mixed_indexes() -> Vec<Index> {
    vec![
        index("idxA", true, false),
        index("idxB", false, false),
        index("idxC", true, true),
    ]
}

fn service_with(
    server: Server,
    connector: RecordingConnector,
    trigger: RecordingTrigger,
) -> PurgeService {
    let backend = Arc::new(RecordingBackend { connector });
    let repo = FixtureRepository::default().with_server(server, backend);
    PurgeService::new(Arc::new(repo), Arc::new(trigger))
}

#[tokio::test]
async fn test_unknown_server_fails_without_side_effects() {
    let connector = RecordingConnector::new(false);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(mixed_indexes()), connector.clone(), trigger.clone());

    let err = service.purge_server("missing").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }), "got: {err}");
    assert!(connector.calls().is_empty());
    assert!(trigger.calls().is_empty());
}

#[tokio::test]
async fn test_empty_server_id_is_rejected() {
    let connector = RecordingConnector::new(false);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(mixed_indexes()), connector.clone(), trigger.clone());

    let err = service.purge_server("  ").await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }), "got: {err}");
    assert!(connector.calls().is_empty());
}

#[tokio::test]
async fn test_non_solr_backend_fails_without_deletes() {
    let trigger = RecordingTrigger::default();
    let repo = FixtureRepository::default()
        .with_server(srv1(mixed_indexes()), Arc::new(DatabaseBackend));
    let service = PurgeService::new(Arc::new(repo), Arc::new(trigger.clone()));

    let err = service.purge_server("srv1").await.unwrap_err();

    assert!(matches!(err, Error::UnsupportedBackend { .. }), "got: {err}");
    assert!(trigger.calls().is_empty());
}

#[tokio::test]
async fn test_standard_topology_issues_one_delete_and_reindexes_eligible() {
    let connector = RecordingConnector::new(false);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(mixed_indexes()), connector.clone(), trigger.clone());

    let outcome = service.purge_server("srv1").await.unwrap();

    // One default-endpoint delete, no per-collection deletes, idxA only
    assert_eq!(connector.calls(), vec![None]);
    assert_eq!(trigger.calls(), vec!["idxA".to_string()]);
    assert_eq!(outcome.deletes_issued, 1);
    assert_eq!(outcome.indexes_reindexed, 1);
}

#[tokio::test]
async fn test_cloud_topology_adds_per_collection_delete_for_eligible_only() {
    let connector = RecordingConnector::new(true);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(mixed_indexes()), connector.clone(), trigger.clone());

    let outcome = service.purge_server("srv1").await.unwrap();

    assert_eq!(connector.calls(), vec![None, Some("idxA".to_string())]);
    assert_eq!(trigger.calls(), vec!["idxA".to_string()]);
    assert_eq!(outcome.deletes_issued, 2);
    assert_eq!(outcome.indexes_reindexed, 1);
}

#[tokio::test]
async fn test_cloud_topology_preserves_listed_index_order() {
    let indexes = vec![
        index("idxA", true, false),
        index("idxB", false, false),
        index("idxD", true, false),
    ];
    let connector = RecordingConnector::new(true);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(indexes), connector.clone(), trigger.clone());

    service.purge_server("srv1").await.unwrap();

    assert_eq!(
        connector.calls(),
        vec![None, Some("idxA".to_string()), Some("idxD".to_string())]
    );
    assert_eq!(trigger.calls(), vec!["idxA".to_string(), "idxD".to_string()]);
}

#[tokio::test]
async fn test_cloud_delete_targets_configured_collection() {
    let mut idx = index("idxA", true, false);
    idx.collection = Some("content_shard".to_string());
    let connector = RecordingConnector::new(true);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(vec![idx]), connector.clone(), trigger.clone());

    service.purge_server("srv1").await.unwrap();

    assert_eq!(
        connector.calls(),
        vec![None, Some("content_shard".to_string())]
    );
}

#[tokio::test]
async fn test_default_delete_failure_aborts_before_any_reindex() {
    let mut connector = RecordingConnector::new(false);
    connector.fail_default = true;
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(mixed_indexes()), connector.clone(), trigger.clone());

    let err = service.purge_server("srv1").await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "got: {err}");
    assert_eq!(connector.calls(), vec![None]);
    assert!(trigger.calls().is_empty());
}

#[tokio::test]
async fn test_reindex_failure_aborts_remaining_indexes() {
    let indexes = vec![index("idxA", true, false), index("idxD", true, false)];
    let connector = RecordingConnector::new(false);
    let mut trigger = RecordingTrigger::default();
    trigger.fail_on = Some("idxA".to_string());
    let service = service_with(srv1(indexes), connector.clone(), trigger.clone());

    let err = service.purge_server("srv1").await.unwrap_err();

    assert!(matches!(err, Error::Internal { .. }), "got: {err}");
    // idxA was attempted, idxD never reached
    assert_eq!(trigger.calls(), vec!["idxA".to_string()]);
}

#[tokio::test]
async fn test_default_delete_is_issued_even_with_no_eligible_indexes() {
    let indexes = vec![index("idxB", false, false), index("idxC", true, true)];
    let connector = RecordingConnector::new(true);
    let trigger = RecordingTrigger::default();
    let service = service_with(srv1(indexes), connector.clone(), trigger.clone());

    let outcome = service.purge_server("srv1").await.unwrap();

    assert_eq!(connector.calls(), vec![None]);
    assert!(trigger.calls().is_empty());
    assert_eq!(outcome.deletes_issued, 1);
    assert_eq!(outcome.indexes_reindexed, 0);
}
