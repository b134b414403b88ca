//! Physical constants and system parameters

/// Minimum separation between consecutive saved samples (meters)
pub const DEFAULT_DISTANCE_THRESHOLD_M: f64 = 30.0;

/// Mean Earth radius used for great-circle distance (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Logical file name of the persisted sample log
pub const DEFAULT_LOG_FILE_NAME: &str = "locations.json";
