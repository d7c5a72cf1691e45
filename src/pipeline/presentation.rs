// src/pipeline/presentation.rs

use super::channel::SampleReceiver;
use super::collaborators::{Indicator, Renderer};
use super::{PipelineConfig, DISPLAY_LABEL};
use crate::common::error::Dht11Error;
use crate::common::hal_traits::Dht11Timer;
use crate::common::sample::Sample;
use log::warn;

/// Consumer task: waits on the channel, applies the humidity threshold and
/// forwards formatted text to the renderer. Lower-priority of the two tasks;
/// it blocks whenever no data is available.
pub struct PresentationTask<'ch, T, R, I>
where
    T: Dht11Timer,
    R: Renderer,
    I: Indicator,
{
    rx: SampleReceiver<'ch>,
    timer: T,
    renderer: R,
    alert: I,
    config: PipelineConfig,
    last_shown: Option<Sample>,
}

impl<'ch, T, R, I> PresentationTask<'ch, T, R, I>
where
    T: Dht11Timer,
    R: Renderer,
    I: Indicator,
{
    pub fn new(
        rx: SampleReceiver<'ch>,
        timer: T,
        renderer: R,
        alert: I,
        config: PipelineConfig,
    ) -> Result<Self, Dht11Error> {
        config.validate()?;
        Ok(PresentationTask {
            rx,
            timer,
            renderer,
            alert,
            config,
            last_shown: None,
        })
    }

    /// Task entry point; runs for the lifetime of the process. A sensor that
    /// stops producing leaves the last rendered sample on screen: the task
    /// simply stays parked in `recv`.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Waits for the next sample, presents it, then throttles the refresh
    /// rate.
    pub fn run_once(&mut self) {
        let sample = self.rx.recv(&mut self.timer, self.config.channel_poll);
        self.present(sample);
        self.timer
            .delay_us(self.config.render_refresh.as_micros() as u32);
    }

    fn present(&mut self, sample: Sample) {
        // Threshold is inclusive: exactly 60.0 %RH raises the alert.
        self.alert
            .set(sample.humidity_rh() >= self.config.humidity_alert_threshold);

        let temperature = sample.format_temperature();
        let humidity = sample.format_humidity();
        if let Err(err) = self.renderer.draw(&temperature, &humidity, DISPLAY_LABEL) {
            warn!("renderer rejected frame: {:?}", err);
        }
        self.last_shown = Some(sample);
    }

    /// Last sample handed to the renderer, if any.
    pub fn last_shown(&self) -> Option<Sample> {
        self.last_shown
    }
}
