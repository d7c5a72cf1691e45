// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Logic level of the single-wire data line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

/// A point on a monotonic, microsecond-or-better clock.
///
/// Implemented for anything that can be compared, shifted by a `Duration`
/// and subtracted to yield one. Used for start-to-start period pacing.
pub trait DhtInstant:
    Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> DhtInstant for T where
    T: Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

/// Abstraction for the busy-wait timing the single-wire protocol needs.
///
/// Not reentrant: at most one logical caller may be mid-delay at a time.
/// The pipeline guarantees this by confining all protocol timing to the
/// acquisition task.
pub trait Dht11Timer {
    type Instant: DhtInstant;

    /// Busy-wait for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }

    /// Current instant of the free-running counter.
    fn now(&self) -> Self::Instant;
}

/// Abstraction for the half-duplex sensor data line.
///
/// `write` is only meaningful in output mode and `read` in input mode.
/// Output mode must default to released/high before the first write so a
/// mode switch does not glitch the line.
pub trait Dht11Line {
    type Error: Debug;

    /// Configure the line as a driven output.
    fn set_output(&mut self) -> Result<(), Self::Error>;

    /// Release the line and configure it as a pulled-up input.
    fn set_input(&mut self) -> Result<(), Self::Error>;

    /// Drive the line to `level`. Valid only in output mode.
    fn write(&mut self, level: Level) -> Result<(), Self::Error>;

    /// Read the current line level. Valid only in input mode.
    fn read(&mut self) -> Result<Level, Self::Error>;
}
