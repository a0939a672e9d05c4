/// Interval trigger source polled from the frame loop
use crate::config::TimerConfig;
use crate::error::ConfigError;

/// Fires once every `interval` seconds of accumulated frame time.
///
/// After a long stall it fires once and keeps only the remainder, so a
/// paused tab does not release a burst of triggers.
#[derive(Debug, Clone)]
pub struct TriggerTimer {
    interval: f32,
    elapsed: f32,
    enabled: bool,
}

impl TriggerTimer {
    pub fn new(interval_secs: f32) -> Result<Self, ConfigError> {
        if interval_secs.is_nan() || interval_secs <= 0.0 {
            return Err(ConfigError::Interval(interval_secs));
        }
        Ok(Self {
            interval: interval_secs,
            elapsed: 0.0,
            enabled: true,
        })
    }

    pub fn from_config(config: &TimerConfig) -> Result<Self, ConfigError> {
        let mut timer = Self::new(config.interval_secs)?;
        timer.enabled = config.auto_cycle;
        Ok(timer)
    }

    /// Account for `dt` seconds; true when the timer fires
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.enabled {
            return false;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed %= self.interval;
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pausing keeps the accumulated time; resuming continues from it
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Seconds until the next firing
    pub fn remaining(&self) -> f32 {
        (self.interval - self.elapsed).max(0.0)
    }
}
