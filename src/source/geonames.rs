//! geonames.org postal code source
//!
//! Downloads a postal code archive from https://download.geonames.org/export/zip/,
//! optionally caching it on disk, and parses the tab-separated dumps inside.
//!
//! Line layout (no header):
//! country, postal code, place, admin name1, admin code1, admin name2,
//! admin code2, admin name3, admin code3, latitude, longitude, accuracy

use crate::config::SourceConfig;
use crate::constants::geonames::{MIN_COLUMNS, README_FILE};
use crate::error::{Error, Result};
use crate::geo::LocationRecord;
use crate::source::LocationSource;
use csv::ReaderBuilder;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::info;

const USER_AGENT: &str = concat!("neargo/", env!("CARGO_PKG_VERSION"));

/// Source backed by a geonames.org zip archive
#[derive(Debug, Clone)]
pub struct GeonamesSource {
    url: String,
    /// Cache location. The archive is only downloaded if this file is missing.
    path: Option<PathBuf>,
    client: reqwest::Client,
}

impl GeonamesSource {
    /// Create a new geonames source
    ///
    /// Without a `path` the archive is downloaded on every load and kept in
    /// memory only.
    pub fn new(url: impl Into<String>, path: Option<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(url, path, client))
    }

    /// Create a source using an existing HTTP client
    pub fn with_client(url: impl Into<String>, path: Option<PathBuf>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            path,
            client,
        }
    }

    /// Create a source from the `[source]` config section
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.cache_path())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn download(&self) -> Result<Vec<u8>> {
        info!("Downloading {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(Error::DataSource(format!(
                "could not download zip: {}",
                response.status()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Get the archive from the cache file, downloading it if needed
    async fn archive_bytes(&self) -> Result<Vec<u8>> {
        let Some(path) = &self.path else {
            return self.download().await;
        };

        if tokio::fs::try_exists(path).await? {
            info!("Using cached archive {}", path.display());
            return Ok(tokio::fs::read(path).await?);
        }

        let bytes = self.download().await?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &bytes).await?;
        info!("Stored archive at {}", path.display());

        Ok(bytes)
    }
}

impl LocationSource for GeonamesSource {
    fn name(&self) -> &str {
        "geonames"
    }

    async fn location_records(&self) -> Result<Vec<LocationRecord>> {
        let bytes = self.archive_bytes().await?;

        info!("Unpacking and parsing archive ({} bytes)", bytes.len());
        let records = tokio::task::spawn_blocking(move || read_archive(Cursor::new(bytes)))
            .await
            .map_err(|e| Error::DataSource(format!("Archive parser task failed: {}", e)))??;
        info!("Parsed {} records", records.len());

        Ok(records)
    }
}

/// Parse every dump in a geonames zip archive
///
/// Directories and the readme entry are skipped. Records keep the order of
/// the entries in the archive.
pub fn read_archive<R: Read + Seek>(reader: R) -> Result<Vec<LocationRecord>> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut records = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        if entry.is_dir() || is_readme(&name) {
            continue;
        }

        records.extend(parse_records(&mut entry, &name)?);
    }

    Ok(records)
}

fn is_readme(name: &str) -> bool {
    Path::new(name)
        .file_name()
        .is_some_and(|f| f == README_FILE)
}

/// Parse a tab-separated geonames dump
///
/// # Arguments
/// * `reader` - Dump contents
/// * `source_name` - Name used in error messages (e.g. the archive entry)
///
/// # Errors
/// Fails on the first line with fewer than 11 columns, a column count that
/// differs from the first line's, or an unparsable latitude/longitude.
pub fn parse_records<R: Read>(reader: R, source_name: &str) -> Result<Vec<LocationRecord>> {
    // Place names may contain quote characters, which carry no meaning here
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();

    for result in csv_reader.records() {
        let row = result.map_err(|e| {
            if let csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } = e.kind()
            {
                return Error::DataSource(format!(
                    "{} line {}: wrong number of columns (expected {}, found {})",
                    source_name,
                    pos.as_ref().map(|p| p.line()).unwrap_or_default(),
                    expected_len,
                    len
                ));
            }
            Error::from(e)
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() < MIN_COLUMNS {
            return Err(Error::DataSource(format!(
                "{} line {}: not enough columns (expected at least {}, found {})",
                source_name,
                line,
                MIN_COLUMNS,
                row.len()
            )));
        }

        let coordinate = |column: usize, label: &str| -> Result<f64> {
            row[column].parse().map_err(|_| {
                Error::DataSource(format!(
                    "{} line {}: invalid {}: {:?}",
                    source_name, line, label, &row[column]
                ))
            })
        };

        let latitude = coordinate(9, "latitude")?;
        let longitude = coordinate(10, "longitude")?;

        records.push(LocationRecord {
            country_code: row[0].to_string(),
            postal_code: row[1].to_string(),
            place_name: row[2].to_string(),
            admin_name1: row[3].to_string(),
            admin_code1: row[4].to_string(),
            admin_name2: row[5].to_string(),
            admin_code2: row[6].to_string(),
            admin_name3: row[7].to_string(),
            admin_code3: row[8].to_string(),
            latitude,
            longitude,
        });
    }

    Ok(records)
}
