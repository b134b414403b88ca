//! Location Track Logging
//!
//! Filters a noisy, frequent stream of position fixes down to a sparse,
//! durable log of samples separated by a minimum great-circle distance.
//! Accepted samples are persisted as a JSON array and reloaded across
//! restarts, so the acceptance baseline survives a process restart.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod sampler;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use crate::algorithms::distance::haversine_distance_m;
pub use crate::api::{
    CallbackHandle, CallbackSampler, EventCallback, SampleCallback, SamplerEvent,
};
pub use crate::core::{
    FixOutcome, PositionFix, SampleDecision, SavedSample, DEFAULT_DISTANCE_THRESHOLD_M,
    DEFAULT_LOG_FILE_NAME, EARTH_RADIUS_M,
};
pub use crate::sampler::{FixError, LocationSampler, SampleLog};
pub use crate::storage::{FileSampleStore, InMemorySampleStore, SampleStore, StoreError};
pub use crate::utils::config::{ConfigError, SamplerConfig};
