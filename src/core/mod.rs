//! Core types and constants for the location sampling pipeline

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
