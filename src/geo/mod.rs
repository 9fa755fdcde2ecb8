//! Postal code locations and proximity search
//!
//! This module handles:
//! - The location record model
//! - Great-circle distance between coordinates
//! - The in-memory location index
//! - Radius resolution around a postal code

pub mod distance;
pub mod index;
pub mod resolve;

pub use index::{LocationIndex, RecordId};
pub use resolve::resolve;

use serde::{Deserialize, Serialize};

/// A single postal code location as published by geonames.org
///
/// Field names serialize in PascalCase, which is the HTTP API's wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationRecord {
    /// ISO country code, e.g. "DE"
    pub country_code: String,
    pub postal_code: String,
    pub place_name: String,
    /// State
    pub admin_name1: String,
    pub admin_code1: String,
    /// County / province
    pub admin_name2: String,
    pub admin_code2: String,
    /// Community
    pub admin_name3: String,
    pub admin_code3: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl LocationRecord {
    /// Create a record with only the fields needed for proximity search
    pub fn new(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// Set the place name
    pub fn with_place_name(mut self, place_name: impl Into<String>) -> Self {
        self.place_name = place_name.into();
        self
    }

    /// Great-circle distance to another record in kilometers
    pub fn distance_to(&self, other: &LocationRecord) -> f64 {
        distance::distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// A record matched by a proximity query together with its distance
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoDistance<'a> {
    /// Position of the record in the index it was resolved from
    #[serde(skip)]
    pub id: RecordId,

    #[serde(flatten)]
    pub record: &'a LocationRecord,

    /// Distance from the reference postal code in kilometers
    pub distance: f64,
}
