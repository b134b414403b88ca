//! Core data types for the location sampling pipeline

use serde::{Deserialize, Serialize};

use crate::storage::StoreError;

/// A single position report from the location provider
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFix {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Provider timestamp (milliseconds since epoch)
    pub timestamp_ms: u64,
    /// Estimated horizontal accuracy (meters), if the provider reports one
    pub accuracy_m: Option<f64>,
}

impl PositionFix {
    /// Create a fix without an accuracy estimate
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: u64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp_ms,
            accuracy_m: None,
        }
    }
}

/// A fix that passed the acceptance filter and was appended to the log.
///
/// Serializes to the on-disk record shape: `latitude` and `longitude` as
/// numbers, `date` as integer milliseconds since epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Wall-clock time the sample was accepted (milliseconds since epoch)
    #[serde(rename = "date")]
    pub recorded_at_ms: u64,
}

/// Outcome of the acceptance filter for one fix
#[derive(Debug, Clone)]
pub enum SampleDecision {
    /// The fix was accepted and appended to the log
    Accepted(SavedSample),
    /// The fix fell within the distance threshold of the last accepted sample
    Rejected {
        /// Distance to the last accepted sample (meters)
        distance_m: f64,
    },
}

/// Per-fix result reported back to the caller
#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// Accept/reject decision for the fix
    pub decision: SampleDecision,
    /// Set when an accepted sample could not be persisted. The in-memory
    /// log and acceptance baseline stay advanced regardless.
    pub persist_warning: Option<StoreError>,
}

impl FixOutcome {
    /// The accepted sample, if the fix passed the filter
    pub fn accepted(&self) -> Option<&SavedSample> {
        match &self.decision {
            SampleDecision::Accepted(sample) => Some(sample),
            SampleDecision::Rejected { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted().is_some()
    }
}
