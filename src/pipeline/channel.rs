// src/pipeline/channel.rs

use crate::common::hal_traits::Dht11Timer;
use crate::common::sample::Sample;
use core::convert::Infallible;
use core::time::Duration;
use heapless::spsc::{Consumer, Producer, Queue};

// heapless spsc storage holds N - 1 items
const DEPTH: usize = 4;

/// Bounded single-producer/single-consumer channel of samples.
///
/// The channel is the only shared resource between the two tasks; its
/// non-blocking-write/blocking-read asymmetry is the sole synchronization
/// mechanism. Capacity and FIFO order are enforced entirely inside the
/// queue's own operations, so no separate lock exists.
pub struct SampleChannel {
    queue: Queue<Sample, DEPTH>,
}

impl SampleChannel {
    /// Usable capacity: the channel never holds more than this many samples.
    pub const CAPACITY: usize = DEPTH - 1;

    pub const fn new() -> Self {
        SampleChannel {
            queue: Queue::new(),
        }
    }

    /// Splits the channel into its producer and consumer halves. The borrow
    /// checker enforces single-producer/single-consumer: at most one pair
    /// can be live at a time.
    pub fn split(&mut self) -> (SampleSender<'_>, SampleReceiver<'_>) {
        let (producer, consumer) = self.queue.split();
        (
            SampleSender { inner: producer },
            SampleReceiver { inner: consumer },
        )
    }
}

impl Default for SampleChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half, held by the acquisition task.
pub struct SampleSender<'ch> {
    inner: Producer<'ch, Sample, DEPTH>,
}

impl SampleSender<'_> {
    /// Non-blocking enqueue. Returns `false` and discards `sample` when the
    /// channel is at capacity: the incoming sample is dropped, never an
    /// older one, and the producer never waits.
    pub fn try_send(&mut self, sample: Sample) -> bool {
        self.inner.enqueue(sample).is_ok()
    }

    pub fn is_full(&self) -> bool {
        !self.inner.ready()
    }
}

/// Consumer half, held by the presentation task.
pub struct SampleReceiver<'ch> {
    inner: Consumer<'ch, Sample, DEPTH>,
}

impl SampleReceiver<'_> {
    /// Non-blocking dequeue of the oldest sample.
    pub fn poll(&mut self) -> nb::Result<Sample, Infallible> {
        self.inner.dequeue().ok_or(nb::Error::WouldBlock)
    }

    /// Waits indefinitely for the next sample, yielding to the timer between
    /// polls. FIFO order is preserved.
    pub fn recv<T: Dht11Timer>(&mut self, timer: &mut T, poll_interval: Duration) -> Sample {
        loop {
            match self.poll() {
                Ok(sample) => return sample,
                Err(nb::Error::WouldBlock) => {
                    timer.delay_us(poll_interval.as_micros() as u32);
                }
                Err(nb::Error::Other(never)) => match never {},
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
