//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the Solr service.
//! These are shared utilities, not ports.

use reqwest::Response;
use sapi_domain::error::{Error, Result};

/// Utilities for processing Solr HTTP responses
///
/// Provides the common status-code triage used by the Solr connector.
pub struct SolrResponseUtils;

impl SolrResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `url` - Request URL, for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error: 401/403 map
    /// to authentication failures, everything else non-2xx to network
    /// failures carrying the response body.
    pub async fn check_and_parse(response: Response, url: &str) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => Error::authentication(format!(
                    "Solr rejected credentials ({code}) at {url}: {error_text}"
                )),
                _ => Error::network(format!(
                    "Solr request failed ({code}) at {url}: {error_text}"
                )),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::network(format!("Solr response parse failed at {url}: {e}")))
    }
}
