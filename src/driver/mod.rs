// src/driver/mod.rs

// Declare the driver sub-modules
mod decoder;

// Adapter for open-drain embedded-hal pins (feature-gated)
#[cfg(feature = "impl-hal")]
pub mod hal_adapter;

// Re-export the public decoder struct
pub use decoder::Dht11;

#[cfg(feature = "impl-hal")]
pub use hal_adapter::OpenDrainLine;
