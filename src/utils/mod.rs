//! Supporting utilities

pub mod config;
