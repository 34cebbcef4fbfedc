//! Command handlers
//!
//! Wires the loaded configuration into the application services and renders
//! their results for the terminal. Failures propagate to `main`, which
//! prints them to stderr and exits nonzero.

use std::sync::Arc;

use sapi_application::ports::registry::list_backend_providers;
use sapi_application::use_cases::PurgeService;
use sapi_domain::error::Result;
use sapi_domain::events::{DomainEvent, EventPublisher};
use sapi_domain::repositories::ServerRepository;
use sapi_infrastructure::config::AppConfig;
use sapi_infrastructure::repository::ConfigServerRepository;
use sapi_providers::events::TokioEventBus;
use sapi_providers::reindex::EventBusReindexTrigger;

/// Delete all documents on a server and schedule reindexing
///
/// There is no confirmation step and no dry-run: the deletion is
/// irreversible and starts as soon as the server resolves.
pub async fn bulk_purge(config: AppConfig, server_id: &str) -> Result<()> {
    let repository = Arc::new(ConfigServerRepository::new(config));
    let events: Arc<dyn EventPublisher> = Arc::new(TokioEventBus::new());
    let reindex_trigger = Arc::new(EventBusReindexTrigger::new(Arc::clone(&events)));
    let service = PurgeService::new(repository, reindex_trigger);

    let outcome = service.purge_server(server_id).await?;
    events
        .publish(DomainEvent::ServerPurged {
            server_id: outcome.server_id.clone(),
            collections: outcome.deletes_issued,
        })
        .await?;
    println!(
        "Purged server '{}': {} delete submission(s), {} index(es) scheduled for reindexing",
        outcome.server_id, outcome.deletes_issued, outcome.indexes_reindexed
    );
    Ok(())
}

/// List configured servers with backend and index counts
pub async fn list_servers(config: AppConfig) -> Result<()> {
    let repository = ConfigServerRepository::new(config);
    let servers = repository.list().await?;

    if servers.is_empty() {
        println!("No servers configured");
        return Ok(());
    }
    for server in servers {
        println!(
            "{:<20} backend={:<12} indexes={} ({} writable)",
            server.id,
            server.backend,
            server.indexes.len(),
            server.writable_index_count()
        );
    }
    Ok(())
}

/// List registered backend providers
pub fn list_backends() {
    for (name, description) in list_backend_providers() {
        println!("{name:<12} {description}");
    }
}
