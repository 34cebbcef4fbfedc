//! Config-backed repository behavior against the real provider registry

use std::collections::HashMap;

use sapi_domain::error::Error;
use sapi_domain::repositories::ServerRepository;
use sapi_infrastructure::config::{AppConfig, ConnectorConfig, IndexConfig, ServerConfig};
use sapi_infrastructure::repository::ConfigServerRepository;

fn solr_server(backend: &str) -> ServerConfig {
    ServerConfig {
        name: "Test Server".to_string(),
        backend: backend.to_string(),
        connector: ConnectorConfig {
            base_url: "http://localhost:8983".to_string(),
            core: "collection1".to_string(),
            ..ConnectorConfig::default()
        },
        indexes: vec![
            IndexConfig {
                id: "content".to_string(),
                collection: Some("content_shard".to_string()),
                ..IndexConfig::default()
            },
            IndexConfig {
                id: "archive".to_string(),
                enabled: false,
                ..IndexConfig::default()
            },
        ],
    }
}

fn config_with(server_id: &str, server: ServerConfig) -> AppConfig {
    AppConfig {
        servers: HashMap::from([(server_id.to_string(), server)]),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_find_by_id_hydrates_server_and_backend() {
    let repo = ConfigServerRepository::new(config_with("srv1", solr_server("solr")));

    let entry = repo.find_by_id("srv1").await.unwrap();

    assert_eq!(entry.server.id, "srv1");
    assert_eq!(entry.server.name, "Test Server");
    assert_eq!(entry.server.indexes.len(), 2);
    assert_eq!(entry.server.indexes[0].server_id, "srv1");
    assert_eq!(entry.server.indexes[0].collection_name(), "content_shard");
    assert!(!entry.server.indexes[1].enabled);
    assert_eq!(entry.backend.name(), "solr");
    assert!(entry.backend.as_solr().is_some());
}

#[tokio::test]
async fn test_find_by_id_resolves_cloud_backend() {
    let repo = ConfigServerRepository::new(config_with("srv1", solr_server("solr_cloud")));

    let entry = repo.find_by_id("srv1").await.unwrap();

    let solr = entry.backend.as_solr().expect("cloud backend is solr");
    assert!(solr.connector().is_cloud());
}

#[tokio::test]
async fn test_find_by_id_resolves_null_backend_without_capability() {
    let server = ServerConfig {
        backend: "null".to_string(),
        ..ServerConfig::default()
    };
    let repo = ConfigServerRepository::new(config_with("legacy", server));

    let entry = repo.find_by_id("legacy").await.unwrap();

    assert!(entry.backend.as_solr().is_none());
}

#[tokio::test]
async fn test_unknown_server_is_not_found() {
    let repo = ConfigServerRepository::new(AppConfig::default());

    let err = repo.find_by_id("missing").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }), "got: {err}");
}

#[tokio::test]
async fn test_unknown_backend_is_a_configuration_error() {
    let server = ServerConfig {
        backend: "elastic".to_string(),
        ..ServerConfig::default()
    };
    let repo = ConfigServerRepository::new(config_with("srv1", server));

    let err = repo.find_by_id("srv1").await.unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }), "got: {err}");
}

#[tokio::test]
async fn test_list_is_sorted_by_id() {
    let config = AppConfig {
        servers: HashMap::from([
            ("zeta".to_string(), solr_server("solr")),
            ("alpha".to_string(), solr_server("solr")),
        ]),
        ..AppConfig::default()
    };
    let repo = ConfigServerRepository::new(config);

    let servers = repo.list().await.unwrap();

    let ids: Vec<&str> = servers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "zeta"]);
}
