// src/lib.rs

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod driver;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for convenience
pub use common::Dht11Error;
pub use common::Sample;
pub use driver::Dht11;
pub use pipeline::{PipelineConfig, SampleChannel};
