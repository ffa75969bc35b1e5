//! Vitrine - storefront widget diagnostics
//!
//! - `vitrine resolve` prints the media descriptors a store entry resolves to
//! - `vitrine replay` runs a scripted input scenario against the carousel and
//!   search widgets and prints everything they emit

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vitrine_cli::{load_catalog, replay, resolve, Scenario, VitrineConfig};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Storefront carousel and search widget diagnostics")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (vitrine.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a store entry into media descriptors
    Resolve {
        /// Store JSON file
        #[arg(long)]
        store: PathBuf,

        /// Page URL or query string selecting the entry (`?name=...`)
        #[arg(long)]
        query: String,
    },

    /// Replay a scenario against the widgets
    Replay {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Take carousel items from this store instead of the scenario
        #[arg(long, requires = "query")]
        store: Option<PathBuf>,

        /// Query selecting the store entry
        #[arg(long, requires = "store")]
        query: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = VitrineConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve { store, query } => {
            let catalog = load_catalog(&store)?;
            let items = resolve(&catalog, &query, &config)?;
            tracing::info!(items = items.len(), "resolved");
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Replay {
            scenario,
            store,
            query,
        } => {
            let script = Scenario::from_path(&scenario)?;
            let catalog = store.as_deref().map(load_catalog).transpose()?;
            let selection = catalog.as_ref().zip(query.as_deref());
            let report = replay(&script, &config, selection)
                .with_context(|| format!("Replay of {} failed", scenario.display()))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
