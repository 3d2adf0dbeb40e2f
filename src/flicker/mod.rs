//! The color flicker: a current color drawn at random from a palette and
//! re-drawn on a fixed interval unless reduced motion is requested.
mod timer;

use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::{Rng, RngExt};

use crate::color::Palette;
use crate::error::FlickerError;

pub use timer::TimerHandle;
use timer::RepeatingTimer;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

type Observer = Box<dyn FnMut(&str)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlickerConfig {
    pub palette: Palette,
    pub reduced_motion: bool,
    pub interval: Duration,
}

impl FlickerConfig {
    pub fn new(palette: Palette, reduced_motion: bool) -> Self {
        Self {
            palette,
            reduced_motion,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Same palette, no recurring schedule.
    pub fn steady(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    fn validate(&self) -> Result<(), FlickerError> {
        if self.palette.is_empty() {
            return Err(FlickerError::InvalidConfiguration(
                "palette must contain at least one color".to_string(),
            ));
        }
        if self.interval.is_zero() {
            return Err(FlickerError::InvalidConfiguration(
                "flicker interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct ColorFlicker<R = ThreadRng> {
    palette: Palette,
    current: usize,
    rng: R,
    schedule: Option<RepeatingTimer>,
    observers: Vec<Observer>,
    picks: u64,
}

impl ColorFlicker {
    /// Initializes a flicker backed by the thread-local RNG.
    pub fn initialize(
        config: FlickerConfig,
        now: Instant,
    ) -> Result<(Self, TimerHandle), FlickerError> {
        Self::initialize_with_rng(config, rand::rng(), now)
    }
}

impl<R: Rng> ColorFlicker<R> {
    /// Picks the first color immediately and, unless reduced motion is set,
    /// starts the recurring schedule. The returned handle owns the schedule.
    pub fn initialize_with_rng(
        config: FlickerConfig,
        rng: R,
        now: Instant,
    ) -> Result<(Self, TimerHandle), FlickerError> {
        config.validate()?;

        let (schedule, handle) = if config.reduced_motion {
            (None, TimerHandle::inert())
        } else {
            let (timer, handle) = RepeatingTimer::start(config.interval, now);
            (Some(timer), handle)
        };

        tracing::info!(
            palette_size = config.palette.len(),
            reduced_motion = config.reduced_motion,
            interval_ms = config.interval.as_millis() as u64,
            "color flicker initialized"
        );

        let mut flicker = Self {
            palette: config.palette,
            current: 0,
            rng,
            schedule,
            observers: Vec::new(),
            picks: 0,
        };
        flicker.pick_color();
        Ok((flicker, handle))
    }

    /// Draws a new current color uniformly from the palette. The previous
    /// color is not excluded.
    pub fn pick_color(&mut self) -> &str {
        self.current = self.rng.random_range(0..self.palette.len());
        self.picks += 1;

        let color = self.palette.get(self.current).unwrap_or_default();
        for observer in &mut self.observers {
            observer(color);
        }
        color
    }

    /// Picks a new color if the schedule is due at `now`. At most one pick
    /// happens per call, however long the host went without ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if schedule.is_cancelled() {
            tracing::info!("flicker schedule cancelled");
            self.schedule = None;
            return false;
        }
        if !schedule.fire_due(now) {
            return false;
        }

        let color = self.pick_color();
        tracing::debug!(color, "flicker tick");
        true
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn current_color(&self) -> &str {
        self.palette.get(self.current).unwrap_or_default()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_flickering(&self) -> bool {
        self.schedule.as_ref().is_some_and(|s| !s.is_cancelled())
    }

    /// The schedule period, when a schedule is live.
    pub fn interval(&self) -> Option<Duration> {
        self.schedule
            .as_ref()
            .filter(|s| !s.is_cancelled())
            .map(RepeatingTimer::period)
    }

    pub fn pick_count(&self) -> u64 {
        self.picks
    }
}
