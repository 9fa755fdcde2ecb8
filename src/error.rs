//! Error types for neargo

use thiserror::Error;

/// Main error type for neargo operations
#[derive(Error, Debug)]
pub enum Error {
    /// No record matches the requested country and postal code
    #[error("No location found for postal code '{postal_code}' in country '{country}'")]
    NotFound {
        country: String,
        postal_code: String,
    },

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Build a `NotFound` error for a country / postal code pair
    pub fn not_found(country: &str, postal_code: &str) -> Self {
        Self::NotFound {
            country: country.to_string(),
            postal_code: postal_code.to_string(),
        }
    }
}

/// Result type alias for neargo operations
pub type Result<T> = std::result::Result<T, Error>;
