//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::GeoDistance;

/// Text formatter - one aligned line per location
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable table"
    }

    fn format(&self, results: &[GeoDistance<'_>]) -> Result<String> {
        let mut output = String::new();

        let code_width = results
            .iter()
            .map(|r| r.record.postal_code.chars().count())
            .max()
            .unwrap_or(0);

        for result in results {
            let record = result.record;
            output.push_str(&format!(
                "{:>9.2} km  {} {:<width$}  {}",
                result.distance,
                record.country_code,
                record.postal_code,
                record.place_name,
                width = code_width
            ));
            if !record.admin_name1.is_empty() {
                output.push_str(&format!(" ({})", record.admin_name1));
            }
            output.push('\n');
        }

        output.push_str(&format!("{} location(s)\n", results.len()));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{resolve, LocationIndex, LocationRecord};

    #[test]
    fn test_text_format() {
        let mut munich = LocationRecord::new("DE", "80331", 48.137, 11.576).with_place_name("München");
        munich.admin_name1 = "Bayern".to_string();
        let index = LocationIndex::build(vec![
            LocationRecord::new("DE", "10115", 52.532, 13.384).with_place_name("Berlin"),
            munich,
        ]);
        let results = resolve(&index, "DE", "10115", 1000.0).unwrap();

        let output = TextFormatter.format(&results).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "     0.00 km  DE 10115  Berlin");
        assert!(lines[1].contains("DE 80331  München (Bayern)"), "{}", lines[1]);
        assert_eq!(lines[2], "2 location(s)");
    }

    #[test]
    fn test_text_format_empty() {
        let output = TextFormatter.format(&[]).unwrap();
        assert_eq!(output, "0 location(s)\n");
    }
}
