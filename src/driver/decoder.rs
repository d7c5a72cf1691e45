// src/driver/decoder.rs

use crate::common::{
    error::Dht11Error,
    frame::RawFrame,
    hal_traits::{Dht11Line, Dht11Timer, Level},
    sample::Sample,
    timing,
};
use core::time::Duration;

/// DHT11 single-wire protocol decoder.
///
/// Generic over one interface object providing both the data line and the
/// microsecond busy-wait timer, since the protocol interleaves the two on
/// every edge. `read_sample` blocks the caller for up to
/// [`timing::READ_LATENCY_MAX`].
#[derive(Debug)]
pub struct Dht11<IF>
where
    IF: Dht11Line + Dht11Timer,
{
    interface: IF,
}

impl<IF> Dht11<IF>
where
    IF: Dht11Line + Dht11Timer,
{
    pub fn new(interface: IF) -> Self {
        Dht11 { interface }
    }

    /// Releases the underlying interface.
    pub fn free(self) -> IF {
        self.interface
    }

    pub(crate) fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Runs one full request/acknowledge/read cycle and returns the decoded
    /// sample. No decoder state survives an attempt; every call restarts
    /// from the start signal.
    pub fn read_sample(&mut self) -> Result<Sample, Dht11Error<IF::Error>> {
        self.send_start()?;
        self.await_ack()?;
        let frame = self.read_frame()?;
        frame.verify()?;
        Ok(frame.to_sample())
    }

    /// Host start signal: hold the line low, release it briefly, then hand
    /// the line over to the sensor. Deterministic, no protocol failure path.
    fn send_start(&mut self) -> Result<(), Dht11Error<IF::Error>> {
        self.interface.set_output()?;
        self.interface.write(Level::Low)?;
        self.delay(timing::HOST_START_LOW);
        self.interface.write(Level::High)?;
        self.delay(timing::HOST_RELEASE);
        self.interface.set_input()?;
        Ok(())
    }

    /// Acknowledge phase: the sensor pulls the line low, then releases it.
    /// Either edge arriving late means nothing is attached or listening.
    fn await_ack(&mut self) -> Result<(), Dht11Error<IF::Error>> {
        self.wait_for_level(Level::Low, timing::ACK_WAIT_BUDGET)?;
        self.wait_for_level(Level::High, timing::ACK_WAIT_BUDGET)?;
        Ok(())
    }

    fn read_frame(&mut self) -> Result<RawFrame, Dht11Error<IF::Error>> {
        let mut bytes = [0u8; RawFrame::LEN];
        for byte in bytes.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(RawFrame::from_bytes(bytes))
    }

    /// Reads one byte, most-significant bit first.
    fn read_byte(&mut self) -> Result<u8, Dht11Error<IF::Error>> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | u8::from(self.read_bit()?);
        }
        Ok(byte)
    }

    /// One bit: wait out the end of the previous phase (line low), wait for
    /// the bit's high pulse to start, then sample once at the 40 us mark.
    /// A one-bit pulse (~70 us) is still high there, a zero-bit pulse
    /// (~26 us) has already fallen.
    fn read_bit(&mut self) -> Result<bool, Dht11Error<IF::Error>> {
        self.wait_for_level(Level::Low, timing::BIT_WAIT_BUDGET)?;
        self.wait_for_level(Level::High, timing::BIT_WAIT_BUDGET)?;
        self.delay(timing::BIT_SAMPLE_POINT);
        Ok(self.interface.read()?.is_high())
    }

    /// Polls the line at 1 us granularity until it reads `target`, returning
    /// the elapsed wait in microseconds. Exceeding `budget` fails with
    /// [`Dht11Error::NoResponse`].
    fn wait_for_level(
        &mut self,
        target: Level,
        budget: Duration,
    ) -> Result<u32, Dht11Error<IF::Error>> {
        let budget_us = budget.as_micros() as u32;
        let mut elapsed = 0u32;
        loop {
            if self.interface.read()? == target {
                return Ok(elapsed);
            }
            if elapsed >= budget_us {
                return Err(Dht11Error::NoResponse);
            }
            self.interface.delay_us(1);
            elapsed += 1;
        }
    }

    fn delay(&mut self, duration: Duration) {
        self.interface.delay_us(duration.as_micros() as u32);
    }
}
