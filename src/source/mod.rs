//! Location data sources
//!
//! A source yields the complete record set once at startup.

pub mod geonames;

use crate::error::Result;
use crate::geo::LocationRecord;

pub use geonames::GeonamesSource;

/// Trait for location data sources
pub trait LocationSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Load every location record
    fn location_records(&self) -> impl std::future::Future<Output = Result<Vec<LocationRecord>>> + Send;
}

/// Source serving a fixed set of records from memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<LocationRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

impl LocationSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn location_records(&self) -> Result<Vec<LocationRecord>> {
        Ok(self.records.clone())
    }
}
