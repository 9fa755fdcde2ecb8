//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::GeoDistance;

/// JSON formatter - same payload as the HTTP API, pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array, same as the HTTP API"
    }

    fn format(&self, results: &[GeoDistance<'_>]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{resolve, LocationIndex, LocationRecord};

    #[test]
    fn test_json_format() {
        let index = LocationIndex::build(vec![
            LocationRecord::new("DE", "10115", 52.532, 13.384).with_place_name("Berlin"),
            LocationRecord::new("DE", "10117", 52.520, 13.388).with_place_name("Berlin"),
        ]);
        let results = resolve(&index, "DE", "10115", 5.0).unwrap();

        let output = JsonFormatter.format(&results).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["PostalCode"], "10115");
        assert_eq!(items[0]["Distance"], 0.0);
        assert_eq!(items[1]["PlaceName"], "Berlin");
    }

    #[test]
    fn test_json_format_empty() {
        let output = JsonFormatter.format(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
