// src/testing.rs
//
// Shared test doubles: a simulated interface driving a virtual microsecond
// clock and a scripted line-level timeline, plus capturing collaborator
// mocks. Compiled only for host unit tests.

use crate::common::hal_traits::{Dht11Line, Dht11Timer, Level};
use crate::pipeline::collaborators::{DiagnosticSink, Indicator, Renderer};
use core::convert::Infallible;
use core::ops::{Add, Sub};
use core::time::Duration;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

// --- Virtual clock ---

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SimInstant(pub u64);

impl Add<Duration> for SimInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        SimInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl Sub<SimInstant> for SimInstant {
    type Output = Duration;
    fn sub(self, rhs: SimInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Line scripting ---

#[derive(Debug, Copy, Clone)]
pub(crate) struct Segment {
    pub duration_us: u64,
    pub level: Level,
}

fn seg(duration_us: u64, level: Level) -> Segment {
    Segment { duration_us, level }
}

/// Line levels for one read attempt, relative to the instant the host
/// releases the line (switches to input mode). `idle` is held once the
/// scripted segments run out.
#[derive(Debug, Clone)]
pub(crate) struct LineScript {
    segments: Vec<Segment>,
    idle: Level,
}

impl LineScript {
    /// Nothing attached: the pull-up keeps the line high forever.
    pub fn silent() -> Self {
        LineScript {
            segments: Vec::new(),
            idle: Level::High,
        }
    }

    /// Sensor acknowledges, then the line sticks low mid-frame.
    pub fn stalling_after_ack() -> Self {
        LineScript {
            segments: vec![seg(20, Level::High), seg(80, Level::Low), seg(80, Level::High)],
            idle: Level::Low,
        }
    }

    /// A well-formed DHT11 response carrying exactly `frame` (checksum byte
    /// included as given, so corrupt frames can be scripted too).
    pub fn responding(frame: [u8; 5]) -> Self {
        let mut segments = vec![seg(20, Level::High), seg(80, Level::Low), seg(80, Level::High)];
        for byte in frame {
            for bit in (0..8).rev() {
                segments.push(seg(50, Level::Low));
                let width = if byte >> bit & 1 == 1 { 70 } else { 26 };
                segments.push(seg(width, Level::High));
            }
        }
        // Sensor pulls low once more, then releases the bus.
        segments.push(seg(50, Level::Low));
        LineScript {
            segments,
            idle: Level::High,
        }
    }

    fn level_at(&self, rel_us: u64) -> Level {
        let mut end = 0u64;
        for segment in &self.segments {
            end += segment.duration_us;
            if rel_us < end {
                return segment.level;
            }
        }
        self.idle
    }
}

// --- Simulated interface ---

#[derive(Debug)]
enum Mode {
    Output,
    Input,
}

/// Implements both HAL traits over a virtual clock. Each `set_input` call
/// consumes the next staged script, so consecutive read attempts can see
/// different line behavior.
#[derive(Debug)]
pub(crate) struct SimInterface {
    pub now_us: u64,
    mode: Mode,
    driven: Level,
    input_since: u64,
    scripts: VecDeque<LineScript>,
    active: Option<LineScript>,
}

impl SimInterface {
    pub fn new() -> Self {
        SimInterface {
            now_us: 0,
            mode: Mode::Output,
            driven: Level::High,
            input_since: 0,
            scripts: VecDeque::new(),
            active: None,
        }
    }

    pub fn stage(&mut self, script: LineScript) {
        self.scripts.push_back(script);
    }
}

impl Dht11Timer for SimInterface {
    type Instant = SimInstant;

    fn delay_us(&mut self, us: u32) {
        self.now_us = self.now_us.saturating_add(us as u64);
    }

    fn now(&self) -> SimInstant {
        SimInstant(self.now_us)
    }
}

impl Dht11Line for SimInterface {
    type Error = Infallible;

    fn set_output(&mut self) -> Result<(), Infallible> {
        self.mode = Mode::Output;
        Ok(())
    }

    fn set_input(&mut self) -> Result<(), Infallible> {
        self.mode = Mode::Input;
        self.input_since = self.now_us;
        self.active = self.scripts.pop_front();
        Ok(())
    }

    fn write(&mut self, level: Level) -> Result<(), Infallible> {
        self.driven = level;
        Ok(())
    }

    fn read(&mut self) -> Result<Level, Infallible> {
        let level = match self.mode {
            Mode::Output => self.driven,
            Mode::Input => {
                let rel = self.now_us - self.input_since;
                self.active
                    .as_ref()
                    .map(|script| script.level_at(rel))
                    .unwrap_or(Level::High)
            }
        };
        Ok(level)
    }
}

// --- Collaborator mocks ---

#[derive(Debug, Default)]
pub(crate) struct MockRenderer {
    pub frames: Vec<(String, String, String)>,
}

impl Renderer for MockRenderer {
    type Error = Infallible;

    fn draw(&mut self, temperature: &str, humidity: &str, label: &str) -> Result<(), Infallible> {
        self.frames
            .push((temperature.into(), humidity.into(), label.into()));
        Ok(())
    }
}

/// Records every `set` call so tests can assert bracketing, not just the
/// final state.
#[derive(Debug, Default)]
pub(crate) struct MockIndicator {
    pub events: Vec<bool>,
}

impl Indicator for MockIndicator {
    fn set(&mut self, on: bool) {
        self.events.push(on);
    }
}

impl MockIndicator {
    pub fn state(&self) -> Option<bool> {
        self.events.last().copied()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockSink {
    pub lines: Vec<String>,
}

impl DiagnosticSink for MockSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.into());
    }
}
