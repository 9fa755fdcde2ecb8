//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod query;
pub mod serve;
pub mod status;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::SourceConfig;

/// Postal code proximity search
#[derive(Parser)]
#[command(name = "neargo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the postal code data and start the web server (foreground)
    Serve(serve::ServeArgs),

    /// Find postal codes near another one without starting a server
    Query(query::QueryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show configuration and server status
    Status(status::StatusArgs),
}

/// Data source overrides shared by commands that load the index
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// URL to a geonames.org zip, see https://download.geonames.org/export/zip/
    #[arg(long)]
    pub geonames_url: Option<String>,

    /// Where the zip file is stored; it is only downloaded if it doesn't exist yet
    #[arg(long)]
    pub geonames_file: Option<String>,
}

impl SourceArgs {
    /// Apply the overrides to a source config
    pub fn apply(self, source: &mut SourceConfig) {
        if let Some(url) = self.geonames_url {
            source.url = url;
        }
        if let Some(file) = self.geonames_file {
            source.file = file;
        }
    }
}

/// Initialize logging to stderr, honoring RUST_LOG
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Query(args) => query::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
