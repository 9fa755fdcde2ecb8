//! Server shared state
//!
//! Built once before the first request and never mutated afterwards, so
//! handlers share it through an `Arc` without locking.

use crate::config::Config;
use crate::geo::LocationIndex;
use chrono::{DateTime, Utc};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Location index queried by every request
    pub index: LocationIndex,

    /// When the index finished loading
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state around a loaded index
    pub fn new(config: Config, index: LocationIndex) -> Self {
        Self {
            config,
            index,
            loaded_at: Utc::now(),
        }
    }
}
