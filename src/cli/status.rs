//! Status command handler
//!
//! Shows the effective configuration and whether a server is running.

use crate::config::Config;
use crate::error::Result;
use crate::server::routes::StatusResponse;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Server address to check instead of the configured one (host:port)
    #[arg(long)]
    pub addr: Option<String>,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("neargo v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Source: {}", config.source.url);
    match config.source.cache_path() {
        Some(path) if path.exists() => println!("  Cached at {}", path.display()),
        Some(path) => println!("  Not cached yet, will be stored at {}", path.display()),
        None => println!("  Downloaded on every start"),
    }
    println!("Default radius: {} km", config.query.default_max);
    println!();

    let addr = args.addr.unwrap_or_else(|| status_addr(&config));
    check_server_status(&addr).await;

    Ok(())
}

/// Address to reach a local server; a wildcard bind address is reached via loopback
fn status_addr(config: &Config) -> String {
    let host = match config.server.host.as_str() {
        "0.0.0.0" => "127.0.0.1",
        "::" | "[::]" => "[::1]",
        host => host,
    };
    format!("{}:{}", host, config.server.port)
}

/// Check if the server is running
async fn check_server_status(addr: &str) {
    let url = format!("http://{}/api/status", addr);

    match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => {
            println!("Server: RUNNING on {}", addr);
            match response.json::<StatusResponse>().await {
                Ok(status) => {
                    println!("  Version: {}", status.version);
                    println!("  Locations: {}", status.records);
                    println!("  Countries: {}", status.countries.join(", "));
                    println!("  Loaded at: {}", status.loaded_at.to_rfc3339());
                }
                Err(e) => println!("  Unexpected status response: {}", e),
            }
        }
        Ok(response) => {
            println!("Server: ERROR (status {})", response.status());
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", addr);
        }
    }
}
