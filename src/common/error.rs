// src/common/error.rs

/// Crate-wide error type, generic over the underlying HAL line error.
///
/// A full channel is deliberately not represented here: dropping the newest
/// sample on overflow is the documented backpressure policy, not a fault
/// (see `pipeline::channel`).
#[derive(Debug, thiserror::Error)]
pub enum Dht11Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The sensor did not produce the expected line transition within its
    /// timing budget. Raised by the acknowledge phase and by a stuck line
    /// during the bit phases.
    #[error("sensor did not respond")]
    NoResponse,

    /// A full frame arrived but the checksum byte does not match the sum of
    /// the four data bytes modulo 256.
    #[error("checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    /// A coordination primitive could not be set up at startup. The pipeline
    /// cannot run without its channel and task configuration, so this is
    /// fatal by design.
    #[error("resource creation failed: {reason}")]
    ResourceCreation { reason: &'static str },
}

// Allow mapping from the underlying HAL error with `?`
impl<E: core::fmt::Debug> From<E> for Dht11Error<E> {
    fn from(e: E) -> Self {
        Dht11Error::Io(e)
    }
}
