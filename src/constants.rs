//! Centralized constants for the neargo crate

/// Geographic constants
pub mod geo {
    /// Equatorial Earth radius in kilometers (not the mean radius)
    pub const EARTH_RADIUS_KM: f64 = 6378.1;
}

/// External endpoints
pub mod api {
    /// geonames.org postal code dump for Germany
    pub const GEONAMES_DE_URL: &str = "https://download.geonames.org/export/zip/DE.zip";
}

/// Geonames dump layout
pub mod geonames {
    /// Archive entry that documents the dump and holds no records
    pub const README_FILE: &str = "readme.txt";

    /// Minimum number of tab-separated columns per record line
    pub const MIN_COLUMNS: usize = 11;
}
