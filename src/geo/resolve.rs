//! Radius resolution around a postal code
//!
//! A postal code may map to several records (split delivery areas), so every
//! record of the country is measured against each of them. A candidate
//! qualifies if it lies within the radius of any one of them and is reported
//! only once.

use crate::error::{Error, Result};
use crate::geo::{GeoDistance, LocationIndex, RecordId};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Find every location within `radius_km` of a postal code
///
/// # Arguments
/// * `index` - Index to search
/// * `country` - Country code of the reference postal code
/// * `postal_code` - Reference postal code
/// * `radius_km` - Search radius in kilometers. A negative radius returns the
///   exact matches only, each with distance 0, in index order and unsorted.
///
/// # Returns
/// Matches sorted ascending by distance. Ties keep the order in which the
/// candidates were first found.
///
/// # Errors
/// [`Error::NotFound`] if no record has this country and postal code.
pub fn resolve<'a>(
    index: &'a LocationIndex,
    country: &str,
    postal_code: &str,
    radius_km: f64,
) -> Result<Vec<GeoDistance<'a>>> {
    let exact = index.lookup_exact(country, postal_code);
    if exact.is_empty() {
        return Err(Error::not_found(country, postal_code));
    }

    if radius_km < 0.0 {
        debug!(country, postal_code, matches = exact.len(), "exact postal code match");
        return Ok(exact
            .iter()
            .map(|&id| GeoDistance {
                id,
                record: index.record(id),
                distance: 0.0,
            })
            .collect());
    }

    let candidates = index.all_in_country(country);
    let mut seen: HashSet<RecordId> = HashSet::new();
    let mut result = Vec::new();

    for &reference_id in exact {
        let reference = index.record(reference_id);
        for &candidate_id in candidates {
            if seen.contains(&candidate_id) {
                continue;
            }
            let candidate = index.record(candidate_id);
            let distance = reference.distance_to(candidate);
            if distance <= radius_km {
                seen.insert(candidate_id);
                result.push(GeoDistance {
                    id: candidate_id,
                    record: candidate,
                    distance,
                });
            }
        }
    }

    // sort_by is stable
    result.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));

    debug!(
        country,
        postal_code,
        radius_km,
        references = exact.len(),
        scanned = candidates.len(),
        matches = result.len(),
        "resolved proximity query"
    );

    Ok(result)
}
