/// Error types for configuration validation
use thiserror::Error;

/// A configuration value outside its valid range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("blend factor must be in (0, 1], got {0}")]
    BlendFactor(f32),

    #[error("reference frame rate must be positive, got {0} Hz")]
    ReferenceRate(f32),

    #[error("transition duration must be positive, got {0}s")]
    Duration(f32),

    #[error("snap threshold must be positive, got {0} rad")]
    SnapThreshold(f32),

    #[error("trigger interval must be positive, got {0}s")]
    Interval(f32),

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("camera distance must be positive, got {0}")]
    CameraDistance(f32),

    #[error("scale must be positive, got {0}")]
    Scale(f32),

    #[error("axis half length must be positive and finite, got {0}")]
    AxisLength(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let msg = ConfigError::BlendFactor(2.0).to_string();
        assert!(msg.contains("blend factor"));
        assert!(msg.contains('2'));

        let msg = ConfigError::Interval(-1.0).to_string();
        assert!(msg.contains("interval"));
        assert!(msg.contains("-1"));
    }
}
