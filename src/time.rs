//! Frame clock sources for the stepper.
//!
//! The stepper only needs the seconds since its previous sample. In the app
//! that comes from Bevy's `Time`; tests and headless runs drive a
//! [`ManualClock`] by hand.

use bevy::prelude::*;

/// Monotonic source of frame deltas.
pub trait FrameClock {
    /// Seconds since the previous call. The first call returns the time since start.
    fn delta_since_last_sample(&mut self) -> f64;

    /// Seconds since the clock started, including time spent paused.
    fn elapsed_since_start(&self) -> f64;
}

/// Clock advanced explicitly by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualClock {
    now: f64,
    last_sample: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Negative amounts are ignored.
    pub fn advance(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.now += seconds;
        }
    }
}

impl FrameClock for ManualClock {
    fn delta_since_last_sample(&mut self) -> f64 {
        let delta = self.now - self.last_sample;
        self.last_sample = self.now;
        delta
    }

    fn elapsed_since_start(&self) -> f64 {
        self.now
    }
}

/// Adapter over Bevy's per-frame `Time`.
///
/// Bevy already measures the delta between frames, so sampling is a read.
pub struct BevyClock<'a> {
    time: &'a Time,
}

impl<'a> BevyClock<'a> {
    pub fn new(time: &'a Time) -> Self {
        Self { time }
    }
}

impl FrameClock for BevyClock<'_> {
    fn delta_since_last_sample(&mut self) -> f64 {
        self.time.delta_secs_f64()
    }

    fn elapsed_since_start(&self) -> f64 {
        self.time.elapsed_secs_f64()
    }
}
