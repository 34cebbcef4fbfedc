//! sapi - Entry Point
//!
//! Binary entry point for the Search API maintenance CLI. Resolves
//! configuration, initializes logging, and dispatches to the requested
//! maintenance command.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sapi bulk-purge <SERVER_ID>` | Delete all documents on a server, schedule reindexing |
//! | `sapi servers` | List configured servers |
//! | `sapi backends` | List registered backend providers |

// Force-link sapi-providers to ensure linkme registrations are included
extern crate sapi_providers;

mod commands;

use clap::{Parser, Subcommand};

use sapi_domain::error::Result;
use sapi_infrastructure::config::ConfigLoader;
use sapi_infrastructure::logging::init_logging;

/// Command line interface for the Search API maintenance tool
#[derive(Parser, Debug)]
#[command(name = "sapi")]
#[command(about = "Search API maintenance CLI for Solr servers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Maintenance command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available maintenance commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete *all* documents on a search server (including all indexes)
    /// and schedule reindexing of every enabled, writable index
    BulkPurge {
        /// Id of the server to purge
        server_id: String,
    },
    /// List configured servers
    Servers,
    /// List registered backend providers
    Backends,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration, initialize logging, and dispatch the command
async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    match cli.command {
        Commands::BulkPurge { server_id } => commands::bulk_purge(config, &server_id).await,
        Commands::Servers => commands::list_servers(config).await,
        Commands::Backends => {
            commands::list_backends();
            Ok(())
        }
    }
}
