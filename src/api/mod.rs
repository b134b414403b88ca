//! Caller-facing surfaces for the sampler

pub mod callback;

pub use callback::{
    CallbackHandle, CallbackSampler, EventCallback, SampleCallback, SamplerEvent,
};
