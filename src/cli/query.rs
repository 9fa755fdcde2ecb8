//! Query command handler
//!
//! Resolves a single proximity query locally and prints the result.

use crate::cli::{init_logging, SourceArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::{resolve, LocationIndex};
use crate::server::load_index;
use crate::source::GeonamesSource;
use clap::Args;

/// Query command arguments
#[derive(Args)]
pub struct QueryArgs {
    /// Country code, e.g. DE
    pub country: String,

    /// Postal code to search around
    pub zip: String,

    /// Radius in km; negative returns exact matches only [default: query.default_max]
    #[arg(long, short = 'm', allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Output format (json, text) [default: query.format]
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Run the query command
pub async fn run(args: QueryArgs) -> Result<()> {
    init_logging("warn");

    let QueryArgs {
        country,
        zip,
        max,
        format,
        source,
    } = args;

    let mut config = Config::load()?;
    source.apply(&mut config.source);

    let format = format.unwrap_or_else(|| config.query.format.clone());
    let max = max.unwrap_or(config.query.default_max);

    let source = GeonamesSource::from_config(&config.source)?;
    let index = load_index(&source).await?;

    let output = render(&index, &country, &zip, max, &format)?;
    println!("{}", output.trim_end());

    Ok(())
}

/// Resolve a query against an index and format the result
pub fn render(index: &LocationIndex, country: &str, zip: &str, max: i64, format: &str) -> Result<String> {
    let formatter = get_formatter(format).ok_or_else(|| {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown output format: {} (available: {})",
            format,
            names.join(", ")
        ))
    })?;

    let results = resolve(index, country, zip, max as f64)?;
    formatter.format(&results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LocationRecord;

    fn index() -> LocationIndex {
        LocationIndex::build(vec![
            LocationRecord::new("DE", "10115", 52.532, 13.384).with_place_name("Berlin"),
            LocationRecord::new("DE", "10117", 52.520, 13.388).with_place_name("Berlin"),
            LocationRecord::new("DE", "80331", 48.137, 11.576).with_place_name("München"),
        ])
    }

    #[test]
    fn test_render_json() {
        let output = render(&index(), "DE", "10115", 5, "json").unwrap();
        let items: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["PostalCode"], "10117");
    }

    #[test]
    fn test_render_text() {
        let output = render(&index(), "DE", "80331", -1, "text").unwrap();
        assert!(output.starts_with("     0.00 km  DE 80331  München"));
        assert!(output.ends_with("1 location(s)\n"));
    }

    #[test]
    fn test_render_unknown_format() {
        let err = render(&index(), "DE", "10115", 5, "gpx").unwrap_err();
        assert!(err.to_string().contains("available: json, text"));
    }

    #[test]
    fn test_render_not_found() {
        let err = render(&index(), "DE", "99999", 5, "json").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
