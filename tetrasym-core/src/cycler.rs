/// Symmetry-cycling state machine
///
/// A [`Cycler`] walks through the [`SymmetryGroup`] one rotation at a time.
/// Hosts call [`Cycler::trigger`] from a timer or a button and
/// [`Cycler::advance`] once per rendered frame; both return a [`CycleEvent`]
/// when something the UI shows has changed.
///
/// Every symmetry is displayed as a turn away from the canonical pose: when a
/// transition completes the orientation returns to the identity, which looks
/// the same as the target because the target is a symmetry.

use serde::{Deserialize, Serialize};

use crate::config::CyclerConfig;
use crate::error::ConfigError;
use crate::symmetry::{Symmetry, SymmetryGroup, GROUP_ORDER};
use crate::transform::Orientation;

/// Angular distance (radians) at which a transition snaps to its target
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.01;

/// How a transition approaches its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Pacing {
    /// Slerp by `blend` on every frame, whatever the elapsed time.
    ///
    /// Apparent speed follows the frame rate.
    PerFrame { blend: f32 },
    /// Exponential approach normalized to `reference_hz`.
    ///
    /// Matches `PerFrame` exactly when frames arrive at `reference_hz`.
    Decay { blend: f32, reference_hz: f32 },
    /// Smoothstep from the start orientation over a fixed duration
    Timed { duration_secs: f32 },
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Decay {
            blend: 0.1,
            reference_hz: 60.0,
        }
    }
}

impl Pacing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Pacing::PerFrame { blend } => validate_blend(blend),
            Pacing::Decay {
                blend,
                reference_hz,
            } => {
                validate_blend(blend)?;
                if reference_hz.is_nan() || reference_hz <= 0.0 {
                    return Err(ConfigError::ReferenceRate(reference_hz));
                }
                Ok(())
            }
            Pacing::Timed { duration_secs } => {
                if duration_secs.is_nan() || duration_secs <= 0.0 {
                    return Err(ConfigError::Duration(duration_secs));
                }
                Ok(())
            }
        }
    }

    /// Slerp fraction for a frame of `dt` seconds (blend-based pacings only)
    fn blend_for(&self, dt: f32) -> f32 {
        match *self {
            Pacing::PerFrame { blend } => blend,
            Pacing::Decay {
                blend,
                reference_hz,
            } => 1.0 - (1.0 - blend).powf(dt.max(0.0) * reference_hz),
            Pacing::Timed { .. } => 1.0,
        }
    }
}

fn validate_blend(blend: f32) -> Result<(), ConfigError> {
    if blend > 0.0 && blend <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::BlendFactor(blend))
    }
}

/// Index of the next symmetry to display, always below [`GROUP_ORDER`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub fn index(self) -> usize {
        self.0
    }

    fn next(self) -> Self {
        Cursor((self.0 + 1) % GROUP_ORDER)
    }
}

/// Something the host should reflect in its UI
#[derive(Debug, Clone, PartialEq)]
pub enum CycleEvent {
    /// A transition toward `symmetry` began; update the axis line and readout
    Started { index: usize, symmetry: Symmetry },
    /// The transition toward `index` finished
    Completed {
        index: usize,
        /// Rotation count after completion
        count: usize,
        /// This completion closed a full pass through the group
        cycle_finished: bool,
    },
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    index: usize,
    from: Orientation,
    target: Orientation,
    elapsed: f32,
}

/// Owns the group, the cursor and the in-flight transition
#[derive(Debug, Clone)]
pub struct Cycler {
    group: SymmetryGroup,
    cursor: Cursor,
    orientation: Orientation,
    transition: Option<Transition>,
    rotation_count: usize,
    cycles: u64,
    pacing: Pacing,
    snap_threshold: f32,
}

impl Cycler {
    pub fn new() -> Self {
        Self {
            group: SymmetryGroup::tetrahedral(),
            cursor: Cursor::default(),
            orientation: Orientation::identity(),
            transition: None,
            rotation_count: 0,
            cycles: 0,
            pacing: Pacing::default(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }

    pub fn with_config(config: &CyclerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pacing: config.pacing,
            snap_threshold: config.snap_threshold,
            ..Self::new()
        })
    }

    /// Start a transition toward the symmetry under the cursor.
    ///
    /// Does nothing while a transition is in flight.
    pub fn trigger(&mut self) -> Option<CycleEvent> {
        if self.transition.is_some() {
            tracing::trace!("trigger ignored, transition in flight");
            return None;
        }

        let index = self.cursor.index();
        let symmetry = self.group[index];
        self.transition = Some(Transition {
            index,
            from: self.orientation,
            target: symmetry.rotation,
            elapsed: 0.0,
        });
        tracing::debug!(index, %symmetry, "transition started");

        Some(CycleEvent::Started { index, symmetry })
    }

    /// Move the orientation toward the target by one frame of `dt` seconds.
    ///
    /// Does nothing while idle.
    pub fn advance(&mut self, dt: f32) -> Option<CycleEvent> {
        let transition = self.transition.as_mut()?;
        transition.elapsed += dt.max(0.0);

        let timed_out = match self.pacing {
            Pacing::Timed { duration_secs } => {
                let t = (transition.elapsed / duration_secs).min(1.0);
                self.orientation = slerp(&transition.from, &transition.target, smoothstep(t));
                t >= 1.0
            }
            pacing => {
                self.orientation =
                    slerp(&self.orientation, &transition.target, pacing.blend_for(dt));
                false
            }
        };

        let index = transition.index;
        let remaining = angular_distance(&self.orientation, &transition.target);
        if timed_out || remaining < self.snap_threshold {
            Some(self.complete(index))
        } else {
            None
        }
    }

    fn complete(&mut self, index: usize) -> CycleEvent {
        self.transition = None;
        self.orientation = Orientation::identity();
        self.rotation_count += 1;
        self.cursor = self.cursor.next();

        let cycle_finished = self.rotation_count >= GROUP_ORDER;
        if cycle_finished {
            self.rotation_count = 0;
            self.cursor = Cursor::default();
            self.cycles += 1;
            tracing::info!(cycles = self.cycles, "full symmetry cycle completed");
        }
        tracing::debug!(index, count = self.rotation_count, "transition completed");

        CycleEvent::Completed {
            index,
            count: self.rotation_count,
            cycle_finished,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Completed transitions in the current pass through the group
    pub fn rotation_count(&self) -> usize {
        self.rotation_count
    }

    /// Full passes through the group since construction
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Target of the in-flight transition
    pub fn target(&self) -> Option<Orientation> {
        self.transition.map(|t| t.target)
    }

    /// The symmetry the next trigger will show
    pub fn upcoming(&self) -> &Symmetry {
        &self.group[self.cursor.index()]
    }

    pub fn group(&self) -> &SymmetryGroup {
        &self.group
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Takes effect from the next frame, including for a transition in flight
    pub fn set_pacing(&mut self, pacing: Pacing) -> Result<(), ConfigError> {
        pacing.validate()?;
        self.pacing = pacing;
        Ok(())
    }
}

impl Default for Cycler {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation angle between two orientations, accurate near zero
pub fn angular_distance(a: &Orientation, b: &Orientation) -> f32 {
    let delta = a.inverse() * b;
    let q = delta.quaternion();
    2.0 * q.imag().norm().atan2(q.w.abs())
}

fn slerp(from: &Orientation, to: &Orientation, t: f32) -> Orientation {
    // try_slerp refuses nearly coincident inputs; the target is the answer then
    from.try_slerp(to, t, 1.0e-6).unwrap_or(*to)
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
