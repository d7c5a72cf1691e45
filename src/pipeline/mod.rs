// src/pipeline/mod.rs

// Declare the pipeline sub-modules
pub mod acquisition;
pub mod channel;
pub mod collaborators;
pub mod presentation;

// Re-export the types most users wire together
pub use acquisition::AcquisitionTask;
pub use channel::{SampleChannel, SampleReceiver, SampleSender};
pub use collaborators::{DiagnosticSink, Indicator, Renderer};
pub use presentation::PresentationTask;

use crate::common::error::Dht11Error;
use crate::common::timing;
use core::fmt::Debug;
use core::time::Duration;

/// Static label shown on the bottom display line.
pub const DISPLAY_LABEL: &str = "Temp&Humi Display";

/// Humidity at or above this raises the alert indicator.
pub const HUMIDITY_ALERT_THRESHOLD: f32 = 60.0;

/// Scheduling knobs for both tasks. The defaults reproduce the original
/// firmware's behavior; periods and waits are configuration rather than
/// embedded constants so tests can time-step deterministically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Acquisition period, start-to-start (decode latency included inside).
    pub sample_period: Duration,
    /// Render-refresh throttle after each presented sample. Correctness does
    /// not depend on it; zero is a valid no-op.
    pub render_refresh: Duration,
    /// Interval between queue polls while the consumer waits for data.
    pub channel_poll: Duration,
    /// Inclusive humidity threshold for the alert indicator.
    pub humidity_alert_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            sample_period: timing::SAMPLE_PERIOD,
            render_refresh: timing::RENDER_REFRESH,
            channel_poll: timing::CHANNEL_POLL_INTERVAL,
            humidity_alert_threshold: HUMIDITY_ALERT_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Checked at task construction; a pipeline with a degenerate schedule
    /// must fail at startup rather than spin.
    pub fn validate<E: Debug>(&self) -> Result<(), Dht11Error<E>> {
        if self.sample_period.is_zero() {
            return Err(Dht11Error::ResourceCreation {
                reason: "sample period must be non-zero",
            });
        }
        if self.channel_poll.is_zero() {
            return Err(Dht11Error::ResourceCreation {
                reason: "channel poll interval must be non-zero",
            });
        }
        Ok(())
    }
}
