// src/common/sample.rs

use arrayvec::ArrayString;
use core::fmt::Write;

/// One validated sensor reading, both fields carrying one decimal of
/// meaningful precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    temperature_c: f32,
    humidity_rh: f32,
}

impl Sample {
    /// Legacy in-band failure placeholder the original firmware wrote on any
    /// failed read. A failed decode here reports an error instead of
    /// fabricating this value; the constant is kept so display layers that
    /// want the historical behavior can reproduce it.
    pub const SENTINEL: Sample = Sample::new(99.0, 99.0);

    pub const fn new(temperature_c: f32, humidity_rh: f32) -> Self {
        Self {
            temperature_c,
            humidity_rh,
        }
    }

    pub fn temperature_c(&self) -> f32 {
        self.temperature_c
    }

    pub fn humidity_rh(&self) -> f32 {
        self.humidity_rh
    }

    /// Display text for the temperature line, e.g. `"Temp: 23.5 C"`.
    pub fn format_temperature(&self) -> ArrayString<16> {
        let mut out = ArrayString::new();
        let _ = write!(out, "Temp: {:.1} C", self.temperature_c);
        out
    }

    /// Display text for the humidity line, e.g. `"Humi: 45.0 %"`.
    pub fn format_humidity(&self) -> ArrayString<16> {
        let mut out = ArrayString::new();
        let _ = write!(out, "Humi: {:.1} %", self.humidity_rh);
        out
    }

    /// Diagnostic line in the wire-log shape, e.g. `"Temp:23.5 C / Humi:45.0 %"`.
    pub fn format_log_line(&self) -> ArrayString<48> {
        let mut out = ArrayString::new();
        let _ = write!(
            out,
            "Temp:{:.1} C / Humi:{:.1} %",
            self.temperature_c, self.humidity_rh
        );
        out
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_keeps_legacy_value() {
        assert_eq!(Sample::SENTINEL.temperature_c(), 99.0);
        assert_eq!(Sample::SENTINEL.humidity_rh(), 99.0);
    }

    #[test]
    fn display_lines_carry_one_decimal() {
        let sample = Sample::new(23.5, 45.0);
        assert_eq!(sample.format_temperature().as_str(), "Temp: 23.5 C");
        assert_eq!(sample.format_humidity().as_str(), "Humi: 45.0 %");
    }

    #[test]
    fn log_line_matches_wire_shape() {
        let sample = Sample::new(23.5, 45.0);
        assert_eq!(sample.format_log_line().as_str(), "Temp:23.5 C / Humi:45.0 %");
    }

    #[test]
    fn negative_temperature_formats() {
        let sample = Sample::new(-4.2, 80.0);
        assert_eq!(sample.format_temperature().as_str(), "Temp: -4.2 C");
    }
}
