// src/driver/hal_adapter.rs

use crate::common::hal_traits::{Dht11Line, Level};
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// [`Dht11Line`] over an open-drain embedded-hal pin that implements both
/// `InputPin` and `OutputPin`.
///
/// Open-drain semantics make the mode switch trivial: "input mode" is just
/// releasing the line (driving high) and letting the pull-up win, so
/// `set_output` has nothing to reconfigure.
#[derive(Debug)]
pub struct OpenDrainLine<P> {
    pin: P,
}

impl<P> OpenDrainLine<P>
where
    P: InputPin + OutputPin,
{
    pub fn new(pin: P) -> Self {
        OpenDrainLine { pin }
    }

    /// Releases the underlying pin.
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P> Dht11Line for OpenDrainLine<P>
where
    P: InputPin + OutputPin,
{
    type Error = P::Error;

    fn set_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_input(&mut self) -> Result<(), Self::Error> {
        // Release the line so the pull-up holds it high.
        self.pin.set_high()
    }

    fn write(&mut self, level: Level) -> Result<(), Self::Error> {
        let state = match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        };
        self.pin.set_state(state)
    }

    fn read(&mut self) -> Result<Level, Self::Error> {
        Ok(if self.pin.is_high()? {
            Level::High
        } else {
            Level::Low
        })
    }
}
