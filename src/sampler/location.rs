//! Distance-threshold acceptance filter over a stream of position fixes

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::algorithms::distance::haversine_distance_m;
use crate::core::{FixOutcome, PositionFix, SampleDecision, SavedSample};
use crate::sampler::log::SampleLog;
use crate::storage::{SampleStore, StoreError};
use crate::utils::config::{ConfigError, SamplerConfig};

/// Errors for fixes the sampler refuses to evaluate
#[derive(Debug, Clone, PartialEq)]
pub enum FixError {
    /// A coordinate is NaN or infinite
    NonFiniteCoordinate { field: &'static str, value: f64 },
    /// A coordinate is outside its valid range
    CoordinateOutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::NonFiniteCoordinate { field, value } => {
                write!(f, "Non-finite {}: {}", field, value)
            }
            FixError::CoordinateOutOfRange { field, value } => {
                write!(f, "Out-of-range {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for FixError {}

/// Converts a noisy, frequent stream of position fixes into a sparse log of
/// samples separated by at least the configured distance threshold, and keeps
/// that log durable through a [`SampleStore`].
///
/// Single logical owner: the sampler is not safe for concurrent invocation,
/// callers must serialize `on_fix` calls.
pub struct LocationSampler<S: SampleStore> {
    store: S,
    config: SamplerConfig,
    log: SampleLog,
    last_accepted: Option<SavedSample>,
}

impl<S: SampleStore> LocationSampler<S> {
    /// Create a sampler with the default policy (30 m threshold)
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SamplerConfig::default(),
            log: SampleLog::new(),
            last_accepted: None,
        }
    }

    /// Create a sampler with a custom, validated configuration
    pub fn with_config(store: S, config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            log: SampleLog::new(),
            last_accepted: None,
        })
    }

    /// Load any previously persisted log and seat the acceptance baseline on
    /// its most recent entry. Returns the number of entries loaded.
    ///
    /// An absent, unreadable, or unparseable log is treated as empty; startup
    /// never fails on store contents.
    pub fn initialize(&mut self) -> usize {
        let bytes = match self.store.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("no persisted sample log, starting empty");
                return 0;
            }
            Err(e) => {
                warn!("failed to read sample log, starting empty: {}", e);
                return 0;
            }
        };

        match SampleLog::from_bytes(&bytes) {
            Ok(log) => {
                let loaded = log.len();
                self.last_accepted = log.last().cloned();
                self.log = log;
                debug!(entries = loaded, "loaded persisted sample log");
                loaded
            }
            Err(e) => {
                warn!("persisted sample log is not valid JSON, starting empty: {}", e);
                0
            }
        }
    }

    /// Evaluate one fix against the last accepted sample.
    ///
    /// The first fix ever seen is accepted unconditionally; afterwards a fix
    /// is accepted only when it lies strictly more than the distance
    /// threshold from the last accepted sample. Rejection changes no state
    /// and performs no I/O.
    ///
    /// On acceptance the sample is stamped with the current wall-clock time,
    /// the baseline advances, and the whole serialized log is rewritten to
    /// the store before returning. A failed write leaves the in-memory log
    /// and baseline advanced and is surfaced through
    /// [`FixOutcome::persist_warning`].
    pub fn on_fix(&mut self, fix: &PositionFix) -> Result<FixOutcome, FixError> {
        validate_fix(fix)?;

        if let Some(last) = &self.last_accepted {
            let distance_m =
                haversine_distance_m(last.latitude, last.longitude, fix.latitude, fix.longitude);
            if distance_m <= self.config.distance_threshold_m {
                debug!(distance_m, "fix within threshold, rejected");
                return Ok(FixOutcome {
                    decision: SampleDecision::Rejected { distance_m },
                    persist_warning: None,
                });
            }
        }

        let sample = SavedSample {
            latitude: fix.latitude,
            longitude: fix.longitude,
            recorded_at_ms: current_time_ms(),
        };
        self.last_accepted = Some(sample.clone());
        self.log.push(sample.clone());

        let persist_warning = self.persist().err();
        if let Some(w) = &persist_warning {
            warn!("accepted sample could not be persisted: {}", w);
        }

        Ok(FixOutcome {
            decision: SampleDecision::Accepted(sample),
            persist_warning,
        })
    }

    /// Samples accepted so far, in acceptance order
    pub fn samples(&self) -> &[SavedSample] {
        self.log.samples()
    }

    /// Baseline the next fix is compared against
    pub fn last_accepted(&self) -> Option<&SavedSample> {
        self.last_accepted.as_ref()
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let bytes = self.log.to_bytes().map_err(|e| StoreError::WriteFailed {
            message: format!("failed to serialize sample log: {}", e),
        })?;
        self.store.write(&bytes)
    }
}

fn validate_fix(fix: &PositionFix) -> Result<(), FixError> {
    for (field, value) in [("latitude", fix.latitude), ("longitude", fix.longitude)] {
        if !value.is_finite() {
            return Err(FixError::NonFiniteCoordinate { field, value });
        }
    }
    if fix.latitude.abs() > 90.0 {
        return Err(FixError::CoordinateOutOfRange {
            field: "latitude",
            value: fix.latitude,
        });
    }
    if fix.longitude.abs() > 180.0 {
        return Err(FixError::CoordinateOutOfRange {
            field: "longitude",
            value: fix.longitude,
        });
    }
    Ok(())
}

fn current_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
