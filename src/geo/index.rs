//! In-memory location index
//!
//! Owns every loaded record in load order and groups record ids by
//! country and by (country, postal code). The index is built once and never
//! mutated afterwards, so it can be shared between request handlers freely.

use crate::geo::LocationRecord;
use std::collections::HashMap;

/// Stable position of a record inside a [`LocationIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Position in load order
    pub fn position(self) -> usize {
        self.0
    }
}

/// Record ids of a single country
#[derive(Debug, Default)]
struct CountryIndex {
    /// Every record of the country, in load order
    members: Vec<RecordId>,

    by_postal_code: HashMap<String, Vec<RecordId>>,
}

/// Queryable structure over the full record set
#[derive(Debug, Default)]
pub struct LocationIndex {
    records: Vec<LocationRecord>,
    countries: HashMap<String, CountryIndex>,
}

impl LocationIndex {
    /// Build the index from records in load order
    ///
    /// Records sharing a country and postal code keep their relative input
    /// order. Nothing is validated: an empty postal code is indexed under
    /// the empty string like any other.
    pub fn build(records: Vec<LocationRecord>) -> Self {
        let mut countries: HashMap<String, CountryIndex> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let id = RecordId(position);
            let country = countries.entry(record.country_code.clone()).or_default();
            country.members.push(id);
            country
                .by_postal_code
                .entry(record.postal_code.clone())
                .or_default()
                .push(id);
        }

        Self { records, countries }
    }

    /// Records matching the country and postal code exactly
    pub fn lookup_exact(&self, country: &str, postal_code: &str) -> &[RecordId] {
        self.countries
            .get(country)
            .and_then(|c| c.by_postal_code.get(postal_code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every record of a country, in load order
    pub fn all_in_country(&self, country: &str) -> &[RecordId] {
        self.countries
            .get(country)
            .map(|c| c.members.as_slice())
            .unwrap_or(&[])
    }

    /// Get a record by id, or None if the id belongs to another index
    pub fn get(&self, id: RecordId) -> Option<&LocationRecord> {
        self.records.get(id.0)
    }

    /// Get a record by an id handed out by this index
    ///
    /// # Panics
    /// Panics if the id is out of range for this index.
    pub fn record(&self, id: RecordId) -> &LocationRecord {
        &self.records[id.0]
    }

    /// All records in load order
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct country codes
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Distinct country codes, sorted
    pub fn countries(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.countries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl FromIterator<LocationRecord> for LocationIndex {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}
