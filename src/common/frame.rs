// src/common/frame.rs

use super::error::Dht11Error;
use super::sample::Sample;
use core::fmt::Debug;

/// One raw 5-byte response frame: humidity integer, humidity fraction,
/// temperature integer, temperature fraction, checksum.
///
/// Transient: a frame exists only inside one decode attempt and never
/// escapes the driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawFrame([u8; RawFrame::LEN]);

impl RawFrame {
    pub const LEN: usize = 5;

    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Checksum over the four data bytes, modulo 256.
    pub fn calculated_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
    }

    /// Checksum byte the sensor sent.
    pub fn expected_checksum(&self) -> u8 {
        self.0[4]
    }

    /// Validates the frame's integrity check.
    pub fn verify<E: Debug>(&self) -> Result<(), Dht11Error<E>> {
        let calculated = self.calculated_checksum();
        let expected = self.expected_checksum();
        if calculated == expected {
            Ok(())
        } else {
            Err(Dht11Error::ChecksumMismatch {
                expected,
                calculated,
            })
        }
    }

    /// Converts the integer registers into a one-decimal sample:
    /// humidity = b0 + b1/10, temperature = b2 + b3/10.
    pub fn to_sample(&self) -> Sample {
        let humidity = self.0[0] as f32 + self.0[1] as f32 * 0.1;
        let temperature = self.0[2] as f32 + self.0[3] as f32 * 0.1;
        Sample::new(temperature, humidity)
    }
}
