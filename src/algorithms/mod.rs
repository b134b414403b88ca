//! Geodetic algorithms used by the acceptance filter

pub mod distance;

pub use distance::haversine_distance_m;
