// src/common/timing.rs

use core::time::Duration;

// Nominal DHT11 timings. The sensor tolerates a few microseconds of slack on
// every edge, so the wait budgets below are deliberately wider than the
// nominal pulse widths they bound.

// === Host start signal ===

/// Host drives the line low for this long to request a conversion.
pub const HOST_START_LOW: Duration = Duration::from_millis(20);
/// Host releases the line high for this long before switching to input
/// (datasheet window is 20-40 us).
pub const HOST_RELEASE: Duration = Duration::from_micros(30);

// === Acknowledge phase ===

/// Budget for each acknowledge edge (sensor pull-down, then release),
/// polled at 1 us granularity. Nominal pulses are ~80 us each.
pub const ACK_WAIT_BUDGET: Duration = Duration::from_micros(100);

// === Bit phases ===

/// Budget for each bit-phase edge. Nominal separators are ~50 us low and
/// the high pulse is at most ~70 us, so a wait past this budget means the
/// line is stuck.
pub const BIT_WAIT_BUDGET: Duration = Duration::from_micros(100);
/// Sampling point after the onset of a bit's high pulse. A zero bit has
/// already fallen low by then, a one bit is still high.
pub const BIT_SAMPLE_POINT: Duration = Duration::from_micros(40);
/// Nominal high-pulse width of a logical 0 (documentation only).
pub const BIT_HIGH_ZERO_NOMINAL: Duration = Duration::from_micros(26);
/// Nominal high-pulse width of a logical 1 (documentation only).
pub const BIT_HIGH_ONE_NOMINAL: Duration = Duration::from_micros(70);

// === Whole-read bound ===

/// Upper bound on the latency of one blocking `read_sample` call.
pub const READ_LATENCY_MAX: Duration = Duration::from_millis(25);

// === Task scheduling defaults ===

/// Acquisition period, measured start-to-start (decode latency included).
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(3000);
/// Presentation refresh throttle after each rendered sample.
pub const RENDER_REFRESH: Duration = Duration::from_millis(100);
/// Interval between queue polls while the consumer waits for data.
pub const CHANNEL_POLL_INTERVAL: Duration = Duration::from_millis(1);
