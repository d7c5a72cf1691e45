// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod sample;
pub mod timing;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::Dht11Error;

// From frame.rs
pub use frame::RawFrame;

// From hal_traits.rs
pub use hal_traits::{Dht11Line, Dht11Timer, DhtInstant, Level};

// From sample.rs
pub use sample::Sample;

// From timing.rs (constants - users access via common::timing::*)
