//! HTTP server for neargo
//!
//! Loads the location index once, then serves proximity queries from it.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::LocationIndex;
use crate::source::LocationSource;
use routes::create_router;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Load all records from a source and build the index
///
/// Called exactly once at startup. Any error is fatal to the caller.
pub async fn load_index<S: LocationSource>(source: &S) -> Result<LocationIndex> {
    info!("Loading locations from {} source", source.name());

    let records = source.location_records().await?;
    let index = LocationIndex::build(records);

    info!(
        "Indexed {} locations in {} countries",
        index.len(),
        index.country_count()
    );

    Ok(index)
}

/// Start the HTTP server
///
/// # Arguments
/// * `config` - Server configuration
/// * `source` - Where the location records come from
///
/// # Returns
/// Never returns unless the server shuts down or startup fails
pub async fn run<S: LocationSource>(config: Config, source: &S) -> Result<()> {
    let addr = config.server_addr();
    run_on(&addr, config, source).await
}

/// Start the HTTP server with a specific address
///
/// The address may use a hostname. The listener is bound before the index is
/// loaded, so an unusable address fails without touching the source; queries
/// are only accepted once the index is built.
pub async fn run_on<S: LocationSource>(addr: &str, config: Config, source: &S) -> Result<()> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        Error::Server(format!("Failed to bind to {}: {}", addr, e))
    })?;

    let index = load_index(source).await?;
    let state = Arc::new(AppState::new(config, index));
    let app = create_router(state);

    match listener.local_addr() {
        Ok(local) => info!("Serving on {}", local),
        Err(_) => info!("Serving on {}", addr),
    }

    axum::serve(listener, app).await.map_err(|e| {
        Error::Server(format!("Server error: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LocationRecord;
    use crate::source::StaticSource;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FailingSource;

    impl LocationSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn location_records(&self) -> Result<Vec<LocationRecord>> {
            Err(Error::DataSource("could not download zip: 503".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_index() {
        let source = StaticSource::new(vec![
            LocationRecord::new("DE", "10115", 52.532, 13.384),
            LocationRecord::new("DE", "10117", 52.520, 13.388),
            LocationRecord::new("AT", "1010", 48.2077, 16.3705),
        ]);

        let index = load_index(&source).await.unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.country_count(), 2);
        assert_eq!(index.lookup_exact("DE", "10117").len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_aborts_startup() {
        let result = run_on("127.0.0.1:0", Config::default(), &FailingSource).await;
        assert!(matches!(result, Err(Error::DataSource(_))));
    }

    struct RecordingSource {
        called: AtomicBool,
    }

    impl LocationSource for RecordingSource {
        fn name(&self) -> &str {
            "recording"
        }

        async fn location_records(&self) -> Result<Vec<LocationRecord>> {
            self.called.store(true, Ordering::SeqCst);
            Err(Error::DataSource("should not be reached".to_string()))
        }
    }

    #[tokio::test]
    async fn test_bind_failure_skips_loading() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let source = RecordingSource {
            called: AtomicBool::new(false),
        };

        let result = run_on(&addr, Config::default(), &source).await;

        assert!(matches!(result, Err(Error::Server(_))));
        assert!(!source.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_hostname_address_binds() {
        // Reaching the source means "localhost" resolved and bound
        let result = run_on("localhost:0", Config::default(), &FailingSource).await;
        assert!(matches!(result, Err(Error::DataSource(_))));
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let source = StaticSource::default();
        let result = run_on("not an address", Config::default(), &source).await;
        assert!(matches!(result, Err(Error::Server(_))));
    }
}
