//! Great-circle distance on the mean Earth sphere

use crate::core::EARTH_RADIUS_M;

/// Haversine distance in meters between two points given as latitude and
/// longitude in decimal degrees.
///
/// Accurate to well under a millimeter at the scales the sampling policy
/// cares about (tens of meters), which is far tighter than the accuracy of
/// the fixes themselves.
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
