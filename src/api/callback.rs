//! Callback-based surface for event-driven callers
//!
//! Maps the platform "location callback" pattern onto the sampler: register
//! closures, feed fixes in, and receive accepted samples and lifecycle
//! events. Callbacks observe outcomes; they cannot mutate sampler state.

use std::collections::HashMap;

use crate::core::{FixOutcome, PositionFix, SampleDecision, SavedSample};
use crate::sampler::LocationSampler;
use crate::storage::SampleStore;
use crate::utils::config::{ConfigError, SamplerConfig};

/// Callback function type invoked for every accepted sample
pub type SampleCallback = Box<dyn Fn(&SavedSample) + Send>;

/// Callback function type invoked for sampler lifecycle events
pub type EventCallback = Box<dyn Fn(&SamplerEvent) + Send>;

/// Events dispatched to registered event callbacks
#[derive(Debug, Clone)]
pub enum SamplerEvent {
    /// A persisted log was loaded during initialization
    LogLoaded { entries: usize },
    /// A fix was accepted and appended to the log
    SampleAccepted {
        latitude: f64,
        longitude: f64,
        recorded_at_ms: u64,
        log_len: usize,
    },
    /// A fix fell within the distance threshold of the last accepted sample
    FixRejected { distance_m: f64 },
    /// An accepted sample could not be persisted
    PersistFailed { message: String },
    /// A fix was dropped before evaluation
    InvalidFix { message: String },
}

/// Callback registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Callback-based wrapper around [`LocationSampler`]
pub struct CallbackSampler<S: SampleStore> {
    sampler: LocationSampler<S>,
    callback_counter: u32,
    sample_callbacks: HashMap<CallbackHandle, SampleCallback>,
    event_callbacks: HashMap<CallbackHandle, EventCallback>,
}

impl<S: SampleStore> CallbackSampler<S> {
    /// Create a callback sampler with the default policy
    pub fn new(store: S) -> Self {
        Self {
            sampler: LocationSampler::new(store),
            callback_counter: 0,
            sample_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
        }
    }

    /// Create a callback sampler with a custom, validated configuration
    pub fn with_config(store: S, config: SamplerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sampler: LocationSampler::with_config(store, config)?,
            callback_counter: 0,
            sample_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
        })
    }

    /// Load the persisted log and notify event callbacks
    pub fn initialize(&mut self) {
        let entries = self.sampler.initialize();
        self.dispatch_event(&SamplerEvent::LogLoaded { entries });
    }

    /// Register a callback for accepted samples
    pub fn on_sample<F>(&mut self, callback: F) -> CallbackHandle
    where
        F: Fn(&SavedSample) + Send + 'static,
    {
        let handle = self.next_handle();
        self.sample_callbacks.insert(handle, Box::new(callback));
        handle
    }

    /// Register a callback for sampler events
    pub fn on_event<F>(&mut self, callback: F) -> CallbackHandle
    where
        F: Fn(&SamplerEvent) + Send + 'static,
    {
        let handle = self.next_handle();
        self.event_callbacks.insert(handle, Box::new(callback));
        handle
    }

    /// Remove a previously registered callback. Returns whether it existed.
    pub fn unregister(&mut self, handle: CallbackHandle) -> bool {
        self.sample_callbacks.remove(&handle).is_some()
            || self.event_callbacks.remove(&handle).is_some()
    }

    /// Feed one fix through the sampler, dispatching callbacks for the outcome
    pub fn submit_fix(&mut self, fix: &PositionFix) {
        match self.sampler.on_fix(fix) {
            Ok(outcome) => self.dispatch_outcome(&outcome),
            Err(e) => self.dispatch_event(&SamplerEvent::InvalidFix {
                message: e.to_string(),
            }),
        }
    }

    /// The wrapped sampler, for state inspection
    pub fn sampler(&self) -> &LocationSampler<S> {
        &self.sampler
    }

    fn next_handle(&mut self) -> CallbackHandle {
        self.callback_counter += 1;
        CallbackHandle(self.callback_counter)
    }

    fn dispatch_outcome(&self, outcome: &FixOutcome) {
        match &outcome.decision {
            SampleDecision::Accepted(sample) => {
                for callback in self.sample_callbacks.values() {
                    callback(sample);
                }
                self.dispatch_event(&SamplerEvent::SampleAccepted {
                    latitude: sample.latitude,
                    longitude: sample.longitude,
                    recorded_at_ms: sample.recorded_at_ms,
                    log_len: self.sampler.samples().len(),
                });
            }
            SampleDecision::Rejected { distance_m } => {
                self.dispatch_event(&SamplerEvent::FixRejected {
                    distance_m: *distance_m,
                });
            }
        }

        if let Some(warning) = &outcome.persist_warning {
            self.dispatch_event(&SamplerEvent::PersistFailed {
                message: warning.to_string(),
            });
        }
    }

    fn dispatch_event(&self, event: &SamplerEvent) {
        for callback in self.event_callbacks.values() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemorySampleStore;
    use std::sync::{Arc, Mutex};

    fn fix(latitude: f64, longitude: f64) -> PositionFix {
        PositionFix::new(latitude, longitude, 0)
    }

    fn event_name(event: &SamplerEvent) -> &'static str {
        match event {
            SamplerEvent::LogLoaded { .. } => "log_loaded",
            SamplerEvent::SampleAccepted { .. } => "sample_accepted",
            SamplerEvent::FixRejected { .. } => "fix_rejected",
            SamplerEvent::PersistFailed { .. } => "persist_failed",
            SamplerEvent::InvalidFix { .. } => "invalid_fix",
        }
    }

    #[test]
    fn test_sample_callback_receives_accepted_samples() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        let mut sampler = CallbackSampler::new(InMemorySampleStore::new());
        sampler.on_sample(move |sample| {
            sink.lock().unwrap().push((sample.latitude, sample.longitude));
        });

        sampler.submit_fix(&fix(4.6000, -74.0800));
        sampler.submit_fix(&fix(4.6001, -74.0800)); // rejected, ~11 m
        sampler.submit_fix(&fix(4.6050, -74.0800));

        let received = received.lock().unwrap();
        assert_eq!(*received, vec![(4.6000, -74.0800), (4.6050, -74.0800)]);
    }

    #[test]
    fn test_event_sequence_matches_outcomes() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut sampler = CallbackSampler::new(InMemorySampleStore::new());
        sampler.on_event(move |event| {
            sink.lock().unwrap().push(event_name(event));
        });

        sampler.initialize();
        sampler.submit_fix(&fix(4.6000, -74.0800));
        sampler.submit_fix(&fix(4.6001, -74.0800));
        sampler.submit_fix(&fix(200.0, 0.0)); // out of range

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["log_loaded", "sample_accepted", "fix_rejected", "invalid_fix"]
        );
    }

    #[test]
    fn test_accepted_event_carries_log_length() {
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lengths);

        let mut sampler = CallbackSampler::new(InMemorySampleStore::new());
        sampler.on_event(move |event| {
            if let SamplerEvent::SampleAccepted { log_len, .. } = event {
                sink.lock().unwrap().push(*log_len);
            }
        });

        sampler.submit_fix(&fix(4.6000, -74.0800));
        sampler.submit_fix(&fix(4.6050, -74.0800));
        sampler.submit_fix(&fix(4.6100, -74.0800));

        assert_eq!(*lengths.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unregister_stops_delivery() {
        let count = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&count);

        let mut sampler = CallbackSampler::new(InMemorySampleStore::new());
        let handle = sampler.on_sample(move |_| {
            *sink.lock().unwrap() += 1;
        });

        sampler.submit_fix(&fix(4.6000, -74.0800));
        assert!(sampler.unregister(handle));
        assert!(!sampler.unregister(handle));
        sampler.submit_fix(&fix(4.6050, -74.0800));

        assert_eq!(*count.lock().unwrap(), 1);
        // The sampler itself kept accepting
        assert_eq!(sampler.sampler().samples().len(), 2);
    }
}
