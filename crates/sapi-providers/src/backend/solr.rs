//! Solr HTTP backend provider
//!
//! Implements the `SolrBackend` and `SolrConnector` ports over Solr's JSON
//! update API. One implementation covers both topologies: in standard mode
//! every index shares the default core endpoint, in cloud mode each index
//! additionally maps to its own collection endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use sapi_domain::entities::Index;
use sapi_domain::error::{Error, Result};
use sapi_domain::ports::{SearchBackend, SolrBackend, SolrConnector};
use sapi_domain::value_objects::{Endpoint, UpdateRequest};

use crate::constants::{CONTENT_TYPE_JSON, DEFAULT_TIMEOUT_SECS, ERROR_MSG_REQUEST_TIMEOUT};
use crate::utils::SolrResponseUtils;

/// Connector session to a Solr service
///
/// Receives the HTTP client via constructor injection; owns transport
/// policy (timeout, credentials) but no entity state.
#[derive(Debug)]
pub struct SolrHttpConnector {
    base_url: String,
    default_endpoint: Endpoint,
    cloud: bool,
    timeout: Duration,
    credentials: Option<(String, String)>,
    http_client: Client,
}

impl SolrHttpConnector {
    /// Create a new Solr connector
    ///
    /// # Arguments
    /// * `base_url` - Solr server URL (e.g., "http://localhost:8983")
    /// * `core` - Default core or collection name
    /// * `cloud` - Whether the deployment is cloud topology
    /// * `timeout` - Request timeout duration
    /// * `credentials` - Optional basic-auth (username, password)
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        core: String,
        cloud: bool,
        timeout: Duration,
        credentials: Option<(String, String)>,
        http_client: Client,
    ) -> Self {
        let default_endpoint = Endpoint::new(base_url.clone(), core);
        Self {
            base_url,
            default_endpoint,
            cloud,
            timeout,
            credentials,
            http_client,
        }
    }

    /// The default endpoint updates are submitted to when no collection
    /// endpoint is given
    pub fn default_endpoint(&self) -> &Endpoint {
        &self.default_endpoint
    }

    /// Verify Solr's own status field inside a 2xx response body
    fn check_response_body(body: &Value, url: &str) -> Result<()> {
        let status = body
            .get("responseHeader")
            .and_then(|h| h.get("status"))
            .and_then(Value::as_i64)
            .unwrap_or(0);
        if status != 0 {
            return Err(Error::network(format!(
                "Solr rejected update (status {status}) at {url}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SolrConnector for SolrHttpConnector {
    async fn update(&self, request: &UpdateRequest, endpoint: Option<&Endpoint>) -> Result<()> {
        if request.is_empty() {
            return Err(Error::invalid_argument(
                "update request contains no clauses",
            ));
        }

        let url = endpoint.unwrap_or(&self.default_endpoint).update_url();
        debug!(url = %url, commit = request.commit(), "Submitting Solr update");

        let mut http_request = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&request.to_json_body());
        if request.commit() {
            http_request = http_request.query(&[("commit", "true")]);
        }
        if let Some((username, password)) = &self.credentials {
            http_request = http_request.basic_auth(username, Some(password));
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
            } else {
                Error::network_with_source(format!("Solr update request failed at {url}"), e)
            }
        })?;

        let body = SolrResponseUtils::check_and_parse(response, &url).await?;
        Self::check_response_body(&body, &url)
    }

    fn is_cloud(&self) -> bool {
        self.cloud
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Solr search backend
///
/// Implements the `SearchBackend` capability query and the Solr-specific
/// operations over a [`SolrHttpConnector`].
#[derive(Debug)]
pub struct SolrSearchBackend {
    connector: SolrHttpConnector,
}

impl SolrSearchBackend {
    /// Create a new Solr backend over an existing connector
    pub fn new(connector: SolrHttpConnector) -> Self {
        Self { connector }
    }
}

impl SearchBackend for SolrSearchBackend {
    fn name(&self) -> &str {
        if self.connector.is_cloud() {
            "solr_cloud"
        } else {
            "solr"
        }
    }

    fn as_solr(&self) -> Option<&dyn SolrBackend> {
        Some(self)
    }
}

impl SolrBackend for SolrSearchBackend {
    fn connector(&self) -> &dyn SolrConnector {
        &self.connector
    }

    fn collection_endpoint(&self, index: &Index) -> Endpoint {
        Endpoint::new(self.connector.base_url(), index.collection_name())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use sapi_application::ports::registry::{BACKEND_PROVIDERS, BackendProviderConfig, BackendProviderEntry};

/// Build a Solr backend from registry configuration
fn build_solr_backend(
    config: &BackendProviderConfig,
    cloud: bool,
) -> std::result::Result<Arc<dyn SearchBackend>, String> {
    let base_url = config
        .base_url
        .clone()
        .ok_or_else(|| "solr backend requires connector.base_url".to_string())?;
    let core = config
        .core
        .clone()
        .ok_or_else(|| "solr backend requires connector.core".to_string())?;
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
    let credentials = match (&config.username, &config.password) {
        (Some(username), Some(password)) => Some((username.clone(), password.clone())),
        _ => None,
    };
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(SolrSearchBackend::new(SolrHttpConnector::new(
        base_url,
        core,
        cloud,
        timeout,
        credentials,
        http_client,
    ))))
}

/// Factory function for creating standard-topology Solr backends.
fn solr_factory(
    config: &BackendProviderConfig,
) -> std::result::Result<Arc<dyn SearchBackend>, String> {
    build_solr_backend(config, false)
}

/// Factory function for creating cloud-topology Solr backends.
fn solr_cloud_factory(
    config: &BackendProviderConfig,
) -> std::result::Result<Arc<dyn SearchBackend>, String> {
    build_solr_backend(config, true)
}

#[linkme::distributed_slice(BACKEND_PROVIDERS)]
static SOLR_BACKEND: BackendProviderEntry = BackendProviderEntry {
    name: "solr",
    description: "Solr HTTP backend (single shared core)",
    factory: solr_factory,
};

#[linkme::distributed_slice(BACKEND_PROVIDERS)]
static SOLR_CLOUD_BACKEND: BackendProviderEntry = BackendProviderEntry {
    name: "solr_cloud",
    description: "Solr HTTP backend (cloud topology, one collection per index)",
    factory: solr_cloud_factory,
};
