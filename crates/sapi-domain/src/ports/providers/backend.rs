//! Search backend and connector ports

use crate::entities::Index;
use crate::error::Result;
use crate::value_objects::{Endpoint, UpdateRequest};
use async_trait::async_trait;

/// Search Backend Port
///
/// Every backend implementation exposes this trait, whatever search service
/// it fronts. Capability discovery happens through explicit queries rather
/// than downcasting: a caller that needs Solr-specific operations asks for
/// them via [`SearchBackend::as_solr`].
///
/// # Example
///
/// ```ignore
/// let solr = backend
///     .as_solr()
///     .ok_or_else(|| Error::unsupported_backend(server_id, backend.name()))?;
/// solr.connector().update(&request, None).await?;
/// ```
pub trait SearchBackend: Send + Sync + std::fmt::Debug {
    /// Registry name of this backend (e.g., "solr", "solr_cloud", "null")
    fn name(&self) -> &str;

    /// Solr capability query
    ///
    /// # Returns
    /// Some for Solr-compatible backends, None otherwise. Callers must treat
    /// None as "unsupported backend" and perform no mutation.
    fn as_solr(&self) -> Option<&dyn SolrBackend>;
}

/// Solr Capability Set
///
/// Operations available only on Solr-compatible backends: access to the
/// connector session and the mapping from index to cloud collection
/// endpoint.
pub trait SolrBackend: SearchBackend {
    /// The connector session for this backend
    fn connector(&self) -> &dyn SolrConnector;

    /// Update endpoint for an index's dedicated collection
    ///
    /// Only meaningful in cloud topology, where each index maps to a
    /// distinct collection rather than the shared default core.
    fn collection_endpoint(&self, index: &Index) -> Endpoint;
}

/// Solr Connector Port
///
/// Represents a session to the Solr service. The connector owns transport
/// policy (timeouts, credentials); callers own nothing beyond the request.
#[async_trait]
pub trait SolrConnector: Send + Sync {
    /// Submit an update request
    ///
    /// # Arguments
    /// * `request` - The update to submit; empty requests are rejected with
    ///   an invalid-argument error before any transport is attempted
    /// * `endpoint` - Target collection endpoint, or None for the server's
    ///   default endpoint
    ///
    /// # Returns
    /// Ok(()) once Solr acknowledges the update; transport, authentication,
    /// and rejection failures propagate unmodified
    async fn update(&self, request: &UpdateRequest, endpoint: Option<&Endpoint>) -> Result<()>;

    /// Whether this connector operates in cloud topology
    ///
    /// In cloud mode each index maps to its own collection endpoint and
    /// per-collection resubmission is required for a server-wide purge.
    fn is_cloud(&self) -> bool;

    /// Base URL of the Solr service this connector talks to
    fn base_url(&self) -> &str;
}
