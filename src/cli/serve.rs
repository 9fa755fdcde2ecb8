//! Serve command handler
//!
//! Loads the location data and starts the HTTP server in foreground mode.

use crate::cli::{init_logging, SourceArgs};
use crate::config::Config;
use crate::error::Result;
use crate::server;
use crate::source::GeonamesSource;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    init_logging("info");

    // Load and optionally override config
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    args.source.apply(&mut config.source);

    info!(
        "Starting neargo server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    let source = GeonamesSource::from_config(&config.source)?;
    server::run(config, &source).await
}
