/// Configuration shared by every host
///
/// All sections default, so a partial TOML file or JS object only needs the
/// keys it changes. Hosts call [`Config::validate`] before building anything.

use serde::{Deserialize, Serialize};

use crate::cycler::{Pacing, DEFAULT_SNAP_THRESHOLD};
use crate::error::ConfigError;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symmetry cycler behaviour
    pub cycler: CyclerConfig,
    /// Automatic trigger source
    pub timer: TimerConfig,
    /// Camera and scene presentation
    pub view: ViewConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cycler.validate()?;
        self.timer.validate()?;
        self.view.validate()
    }
}

/// Cycler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclerConfig {
    /// How a transition approaches its target
    pub pacing: Pacing,
    /// Angular distance (radians) at which a transition snaps to its target
    pub snap_threshold: f32,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl CyclerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pacing.validate()?;
        if self.snap_threshold.is_nan() || self.snap_threshold <= 0.0 {
            return Err(ConfigError::SnapThreshold(self.snap_threshold));
        }
        Ok(())
    }
}

/// Interval trigger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Fire triggers automatically
    pub auto_cycle: bool,
    /// Seconds between automatic triggers
    pub interval_secs: f32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            auto_cycle: true,
            interval_secs: 2.0,
        }
    }
}

impl TimerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs.is_nan() || self.interval_secs <= 0.0 {
            return Err(ConfigError::Interval(self.interval_secs));
        }
        Ok(())
    }
}

/// View configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Parallel projection instead of perspective
    pub orthographic: bool,
    /// Distance from the camera to the tetrahedron centre
    pub camera_distance: f32,
    /// Uniform scale applied to the tetrahedron
    pub scale: f32,
    /// Draw the current rotation axis
    pub show_axis: bool,
    /// Half length of the rotation axis line
    pub axis_half_length: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            orthographic: false,
            camera_distance: 4.0,
            scale: 1.0,
            show_axis: true,
            axis_half_length: 2.0,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_degrees));
        }
        if self.camera_distance.is_nan() || self.camera_distance <= 0.0 {
            return Err(ConfigError::CameraDistance(self.camera_distance));
        }
        if self.scale.is_nan() || self.scale <= 0.0 {
            return Err(ConfigError::Scale(self.scale));
        }
        if !self.axis_half_length.is_finite() || self.axis_half_length <= 0.0 {
            return Err(ConfigError::AxisLength(self.axis_half_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.timer.auto_cycle);
        assert_eq!(config.timer.interval_secs, 2.0);
        assert_eq!(config.view.fov_degrees, 75.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("interval_secs"));
        assert!(toml.contains("snap_threshold"));
        assert!(toml.contains("mode = \"decay\""));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [timer]
            interval_secs = 0.5

            [cycler.pacing]
            mode = "timed"
            duration_secs = 1.25
            "#,
        )
        .unwrap();
        assert_eq!(config.timer.interval_secs, 0.5);
        assert!(config.timer.auto_cycle);
        assert_eq!(config.cycler.pacing, Pacing::Timed { duration_secs: 1.25 });
        assert_eq!(config.cycler.snap_threshold, DEFAULT_SNAP_THRESHOLD);
        assert_eq!(config.view, ViewConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.timer.interval_secs = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Interval(_))));

        let mut config = Config::default();
        config.view.fov_degrees = 180.0;
        assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))));

        let mut config = Config::default();
        config.cycler.snap_threshold = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::SnapThreshold(_))));

        let mut config = Config::default();
        config.cycler.pacing = Pacing::PerFrame { blend: 1.5 };
        assert!(matches!(config.validate(), Err(ConfigError::BlendFactor(_))));
    }

    #[test]
    fn test_axis_half_length_must_be_finite_and_positive() {
        for bad in [f32::NAN, f32::INFINITY, 0.0, -2.0] {
            let mut view = ViewConfig::default();
            view.axis_half_length = bad;
            assert!(matches!(view.validate(), Err(ConfigError::AxisLength(_))));
        }
    }
}
