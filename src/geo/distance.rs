//! Great-circle distance
//!
//! Haversine formula on a sphere with the equatorial Earth radius.

use crate::constants::geo::EARTH_RADIUS_KM;

/// The haversine function: sin²(θ / 2)
pub fn haversin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Calculate the distance between two coordinates in kilometers
///
/// # Arguments
/// * `lat_a`, `lon_a` - First coordinate in degrees
/// * `lat_b`, `lon_b` - Second coordinate in degrees
///
/// # Returns
/// Distance in kilometers. Coordinates outside the valid ranges are not
/// rejected; they yield a meaningless value and NaN inputs yield NaN.
pub fn distance_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let lat_a = lat_a.to_radians();
    let lon_a = lon_a.to_radians();
    let lat_b = lat_b.to_radians();
    let lon_b = lon_b.to_radians();

    let h = haversin(lat_b - lat_a) + lat_a.cos() * lat_b.cos() * haversin(lon_b - lon_a);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
