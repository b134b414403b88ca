//! The location sampler: acceptance filter plus persisted sample log

pub mod location;
pub mod log;

pub use location::{FixError, LocationSampler};
pub use log::SampleLog;
