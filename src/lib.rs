//! neargo: Postal Code Proximity Search
//!
//! A library and web service that finds all postal code locations within a
//! radius of a reference postal code, using the geonames.org postal code dumps.
//!
//! ## Features
//!
//! - In-memory index by country and postal code
//! - Haversine great-circle distance
//! - Radius search that handles postal codes spanning several locations
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use neargo::geo::{resolve, LocationIndex, LocationRecord};
//!
//! let index = LocationIndex::build(vec![
//!     LocationRecord::new("DE", "10115", 52.532, 13.384),
//!     LocationRecord::new("DE", "10117", 52.520, 13.388),
//!     LocationRecord::new("DE", "80331", 48.137, 11.576),
//! ]);
//!
//! // Everything within 5 km of 10115, nearest first
//! let results = resolve(&index, "DE", "10115", 5.0).unwrap();
//! assert_eq!(results.len(), 2);
//! println!("{} is {:.1} km away", results[1].record.postal_code, results[1].distance);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{GeoDistance, LocationIndex, LocationRecord, RecordId};
pub use source::{GeonamesSource, LocationSource};
