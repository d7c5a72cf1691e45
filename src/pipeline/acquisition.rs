// src/pipeline/acquisition.rs

use super::channel::SampleSender;
use super::collaborators::{DiagnosticSink, Indicator};
use super::PipelineConfig;
use crate::common::error::Dht11Error;
use crate::common::hal_traits::{Dht11Line, Dht11Timer};
use crate::driver::Dht11;
use log::{debug, warn};

/// Fixed diagnostic line emitted for every failed read attempt.
pub const READ_FAILED_DIAGNOSTIC: &str = "DHT11 read failed";

/// Periodic sampling driver: runs the decoder on a fixed period and offers
/// successful samples to the channel. Higher-priority of the two tasks; it
/// never blocks on the channel.
pub struct AcquisitionTask<'ch, IF, B, D>
where
    IF: Dht11Line + Dht11Timer,
    B: Indicator,
    D: DiagnosticSink,
{
    driver: Dht11<IF>,
    tx: SampleSender<'ch>,
    busy: B,
    diag: D,
    config: PipelineConfig,
}

impl<'ch, IF, B, D> AcquisitionTask<'ch, IF, B, D>
where
    IF: Dht11Line + Dht11Timer,
    B: Indicator,
    D: DiagnosticSink,
{
    pub fn new(
        driver: Dht11<IF>,
        tx: SampleSender<'ch>,
        busy: B,
        diag: D,
        config: PipelineConfig,
    ) -> Result<Self, Dht11Error<IF::Error>> {
        config.validate()?;
        Ok(AcquisitionTask {
            driver,
            tx,
            busy,
            diag,
            config,
        })
    }

    /// Task entry point; runs for the lifetime of the process.
    pub fn run(&mut self) -> ! {
        loop {
            let started = self.driver.interface_mut().now();
            self.run_once();
            self.pace(started);
        }
    }

    /// One acquisition period body: raise the busy indicator, read, hand the
    /// sample off, report, lower the indicator. Failures are recovered here
    /// in full; no retry happens before the next period.
    pub fn run_once(&mut self) {
        self.busy.set(true);
        match self.driver.read_sample() {
            Ok(sample) => {
                if !self.tx.try_send(sample) {
                    // Documented data-loss path, not an error.
                    debug!("sample channel full, dropping newest sample");
                }
                self.diag.write_line(&sample.format_log_line());
            }
            Err(err) => {
                warn!("DHT11 read failed: {}", err);
                self.diag.write_line(READ_FAILED_DIAGNOSTIC);
            }
        }
        self.busy.set(false);
    }

    /// Sleeps out the remainder of the sample period, measured from the
    /// start of the iteration. An overrunning iteration starts the next one
    /// immediately.
    fn pace(&mut self, started: <IF as Dht11Timer>::Instant) {
        let elapsed = self.driver.interface_mut().now() - started;
        if let Some(remaining) = self.config.sample_period.checked_sub(elapsed) {
            self.driver
                .interface_mut()
                .delay_us(remaining.as_micros() as u32);
        }
    }
}
