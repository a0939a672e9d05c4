/// Host-independent UI model around the cycler
///
/// A [`Showcase`] is what a frontend holds: the cycler, the interval trigger
/// and the pieces of UI the cycler's events drive (rotation axis line and
/// matrix readout). Hosts feed it frame times and trigger requests and read
/// back what to draw.

use nalgebra::Point3;

use crate::config::Config;
use crate::cycler::{CycleEvent, Cycler};
use crate::error::ConfigError;
use crate::readout::RotationReadout;
use crate::symmetry::{Symmetry, GROUP_ORDER};
use crate::timer::TriggerTimer;
use crate::transform::Orientation;

/// The symmetry most recently started, with its readout
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSymmetry {
    pub index: usize,
    pub symmetry: Symmetry,
    pub readout: RotationReadout,
}

#[derive(Debug, Clone)]
pub struct Showcase {
    cycler: Cycler,
    timer: TriggerTimer,
    current: Option<CurrentSymmetry>,
    show_axis: bool,
    axis_half_length: f32,
}

impl Showcase {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        // cycler and timer sections are checked by their constructors
        config.view.validate()?;
        Ok(Self {
            cycler: Cycler::with_config(&config.cycler)?,
            timer: TriggerTimer::from_config(&config.timer)?,
            current: None,
            show_axis: config.view.show_axis,
            axis_half_length: config.view.axis_half_length,
        })
    }

    /// Manual trigger (button, key press)
    pub fn trigger(&mut self) -> Option<CycleEvent> {
        let event = self.cycler.trigger();
        if let Some(event) = &event {
            self.apply(event);
        }
        event
    }

    /// One frame: let the timer fire, then advance the transition.
    ///
    /// Returns the events of this frame in order.
    pub fn update(&mut self, dt: f32) -> Vec<CycleEvent> {
        let mut events = Vec::new();

        if self.timer.tick(dt) {
            events.extend(self.trigger());
        }
        if let Some(event) = self.cycler.advance(dt) {
            self.apply(&event);
            events.push(event);
        }

        events
    }

    fn apply(&mut self, event: &CycleEvent) {
        match event {
            CycleEvent::Started { index, symmetry } => {
                self.current = Some(CurrentSymmetry {
                    index: *index,
                    symmetry: *symmetry,
                    readout: RotationReadout::from_orientation(&symmetry.rotation),
                });
            }
            CycleEvent::Completed {
                cycle_finished: true,
                ..
            } => {
                tracing::debug!(cycles = self.cycler.cycles(), "showcase wrapped around");
            }
            CycleEvent::Completed { .. } => {}
        }
    }

    /// Orientation to render this frame
    pub fn orientation(&self) -> Orientation {
        self.cycler.orientation()
    }

    pub fn current(&self) -> Option<&CurrentSymmetry> {
        self.current.as_ref()
    }

    /// Endpoints of the rotation axis line, when one should be drawn
    pub fn axis_segment(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        if !self.show_axis {
            return None;
        }
        self.current
            .as_ref()
            .and_then(|c| c.symmetry.axis_segment(self.axis_half_length))
    }

    pub fn set_show_axis(&mut self, show: bool) {
        self.show_axis = show;
    }

    /// `"n / 12"` for the counter display
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.cycler.rotation_count(), GROUP_ORDER)
    }

    pub fn auto_cycle(&self) -> bool {
        self.timer.is_enabled()
    }

    pub fn set_auto_cycle(&mut self, enabled: bool) {
        self.timer.set_enabled(enabled);
        tracing::info!(enabled, "auto-cycle set");
    }

    pub fn toggle_auto_cycle(&mut self) -> bool {
        let enabled = self.timer.toggle();
        tracing::info!(enabled, "auto-cycle toggled");
        enabled
    }

    pub fn cycler(&self) -> &Cycler {
        &self.cycler
    }

    pub fn timer(&self) -> &TriggerTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CyclerConfig, TimerConfig};
    use crate::cycler::Pacing;

    fn manual_config() -> Config {
        Config {
            timer: TimerConfig {
                auto_cycle: false,
                ..TimerConfig::default()
            },
            ..Config::default()
        }
    }

    fn run_until_completed(showcase: &mut Showcase) {
        for _ in 0..10_000 {
            let events = showcase.update(1.0 / 60.0);
            if events
                .iter()
                .any(|e| matches!(e, CycleEvent::Completed { .. }))
            {
                return;
            }
        }
        panic!("no completion");
    }

    #[test]
    fn test_trigger_updates_readout_and_axis() {
        let mut showcase = Showcase::new(&manual_config()).unwrap();
        assert!(showcase.current().is_none());
        assert!(showcase.axis_segment().is_none());

        showcase.trigger();
        let current = showcase.current().unwrap();
        assert_eq!(current.index, 0);
        assert_eq!(
            current.readout,
            RotationReadout::from_orientation(&showcase.cycler().group()[0].rotation)
        );
        assert!(showcase.axis_segment().is_some());
    }

    #[test]
    fn test_readout_survives_completion() {
        let mut showcase = Showcase::new(&manual_config()).unwrap();
        showcase.trigger();
        run_until_completed(&mut showcase);
        assert_eq!(showcase.current().map(|c| c.index), Some(0));
        assert_eq!(showcase.counter_text(), "1 / 12");
    }

    #[test]
    fn test_timer_drives_triggers() {
        let config = Config {
            timer: TimerConfig {
                auto_cycle: true,
                interval_secs: 0.5,
            },
            ..Config::default()
        };
        let mut showcase = Showcase::new(&config).unwrap();

        let events = showcase.update(0.25);
        assert!(events.is_empty());
        let events = showcase.update(0.25);
        assert!(matches!(events[0], CycleEvent::Started { index: 0, .. }));
    }

    #[test]
    fn test_timer_firing_mid_transition_is_ignored() {
        let config = Config {
            cycler: CyclerConfig {
                pacing: Pacing::Timed { duration_secs: 3.0 },
                ..CyclerConfig::default()
            },
            timer: TimerConfig {
                auto_cycle: true,
                interval_secs: 1.0,
            },
            ..Config::default()
        };
        let mut showcase = Showcase::new(&config).unwrap();

        let events = showcase.update(1.0);
        assert!(matches!(events[..], [CycleEvent::Started { index: 0, .. }]));

        // the timer fires again with the transition two thirds done
        let events = showcase.update(1.0);
        assert!(events.is_empty());
        assert_eq!(showcase.current().map(|c| c.index), Some(0));
        assert_eq!(showcase.cycler().cursor().index(), 0);
        assert!(showcase.cycler().is_transitioning());

        let events = showcase.update(1.0);
        assert!(matches!(
            events[..],
            [CycleEvent::Completed {
                index: 0,
                count: 1,
                ..
            }]
        ));
        assert_eq!(showcase.cycler().cursor().index(), 1);

        let events = showcase.update(1.0);
        assert!(matches!(events[..], [CycleEvent::Started { index: 1, .. }]));
    }

    #[test]
    fn test_invalid_sections_are_rejected() {
        let mut config = Config::default();
        config.timer.interval_secs = -1.0;
        assert!(matches!(
            Showcase::new(&config),
            Err(ConfigError::Interval(_))
        ));

        let mut config = Config::default();
        config.cycler.pacing = Pacing::Timed { duration_secs: 0.0 };
        assert!(matches!(
            Showcase::new(&config),
            Err(ConfigError::Duration(_))
        ));

        let mut config = Config::default();
        config.view.scale = 0.0;
        assert!(matches!(Showcase::new(&config), Err(ConfigError::Scale(_))));
    }

    #[test]
    fn test_manual_mode_never_auto_triggers() {
        let mut showcase = Showcase::new(&manual_config()).unwrap();
        for _ in 0..600 {
            assert!(showcase.update(1.0 / 60.0).is_empty());
        }
        assert!(!showcase.cycler().is_transitioning());
    }

    #[test]
    fn test_hidden_axis() {
        let mut showcase = Showcase::new(&manual_config()).unwrap();
        showcase.set_show_axis(false);
        showcase.trigger();
        assert!(showcase.axis_segment().is_none());
    }

    #[test]
    fn test_toggle_auto_cycle() {
        let mut showcase = Showcase::new(&Config::default()).unwrap();
        assert!(showcase.auto_cycle());
        assert!(!showcase.toggle_auto_cycle());
        assert!(!showcase.auto_cycle());
    }

    #[test]
    fn test_set_auto_cycle_is_idempotent() {
        let mut showcase = Showcase::new(&Config::default()).unwrap();
        showcase.set_auto_cycle(true);
        assert!(showcase.auto_cycle());
        showcase.set_auto_cycle(false);
        showcase.set_auto_cycle(false);
        assert!(!showcase.auto_cycle());
        assert!(showcase.update(10.0).is_empty());
    }
}
