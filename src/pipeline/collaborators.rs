// src/pipeline/collaborators.rs

use core::fmt::Debug;

/// External display collaborator. The pipeline only guarantees well-formed
/// one-decimal numeric text; rendering, fonts and layout are the
/// implementor's concern.
pub trait Renderer {
    type Error: Debug;

    fn draw(&mut self, temperature: &str, humidity: &str, label: &str)
        -> Result<(), Self::Error>;
}

/// A single boolean output (LED, GPIO, ...). The pipeline owns only the
/// decision, not the physical signaling.
pub trait Indicator {
    fn set(&mut self, on: bool);
}

/// Receives the pipeline's human-readable diagnostic lines (UART log in the
/// original firmware). No structured format is implied.
pub trait DiagnosticSink {
    fn write_line(&mut self, line: &str);
}

// Forwarding impls so tasks can borrow collaborators instead of owning them.

impl<T: Renderer + ?Sized> Renderer for &mut T {
    type Error = T::Error;

    fn draw(
        &mut self,
        temperature: &str,
        humidity: &str,
        label: &str,
    ) -> Result<(), Self::Error> {
        T::draw(self, temperature, humidity, label)
    }
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn set(&mut self, on: bool) {
        T::set(self, on)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn write_line(&mut self, line: &str) {
        T::write_line(self, line)
    }
}
