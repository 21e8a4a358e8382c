//! Geometry and projection constants for the torus renderer
//!
//! Everything the renderer needs is a single immutable struct, validated
//! once at startup and passed in rather than living as module globals.

/// Immutable torus geometry and projection configuration.
///
/// `k1` (the projection scale) is derived by the constructor so that the
/// torus fills the visible grid; it is not settable directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusConfig {
    /// Radius of the tube cross-section (R1)
    pub tube_radius: f32,
    /// Distance from the torus center to the tube center (R2)
    pub ring_radius: f32,
    /// Side length of the square output grid
    pub screen_size: usize,
    /// Sweep step for the tube cross-section angle
    pub theta_step: f32,
    /// Sweep step for the ring angle (finer than `theta_step`)
    pub phi_step: f32,
    /// Camera offset along the viewing axis (K2)
    pub camera_distance: f32,
    k1: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl TorusConfig {
    /// Build a configuration, failing fast on any non-positive parameter.
    pub fn new(
        tube_radius: f32,
        ring_radius: f32,
        screen_size: usize,
        theta_step: f32,
        phi_step: f32,
        camera_distance: f32,
    ) -> Result<Self, ConfigError> {
        if screen_size == 0 {
            return Err(ConfigError::Validation("screen size must be positive".into()));
        }
        if tube_radius <= 0.0 || ring_radius <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "radii must be positive (got tube {tube_radius}, ring {ring_radius})"
            )));
        }
        if theta_step <= 0.0 || phi_step <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "sweep steps must be positive (got theta {theta_step}, phi {phi_step})"
            )));
        }
        if camera_distance <= tube_radius + ring_radius {
            return Err(ConfigError::Validation(format!(
                "camera distance {camera_distance} must exceed the torus extent {}",
                tube_radius + ring_radius
            )));
        }

        let k1 = screen_size as f32 * camera_distance * 3.0
            / (8.0 * (tube_radius + ring_radius));

        Ok(Self {
            tube_radius,
            ring_radius,
            screen_size,
            theta_step,
            phi_step,
            camera_distance,
            k1,
        })
    }

    /// Projection scale factor, derived from the screen size and radii
    pub fn k1(&self) -> f32 {
        self.k1
    }
}

impl Default for TorusConfig {
    fn default() -> Self {
        // Reference geometry: unit tube on a ring of radius 2, 40x40 grid
        Self::new(1.0, 2.0, 40, 0.07, 0.02, 5.0)
            .expect("default configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TorusConfig::default();
        assert_eq!(config.screen_size, 40);
        // k1 = 40 * 5 * 3 / (8 * 3) = 25
        assert!((config.k1() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_screen_size_rejected() {
        let result = TorusConfig::new(1.0, 2.0, 0, 0.07, 0.02, 5.0);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(TorusConfig::new(-1.0, 2.0, 40, 0.07, 0.02, 5.0).is_err());
        assert!(TorusConfig::new(1.0, 0.0, 40, 0.07, 0.02, 5.0).is_err());
    }

    #[test]
    fn test_non_positive_steps_rejected() {
        assert!(TorusConfig::new(1.0, 2.0, 40, 0.0, 0.02, 5.0).is_err());
        assert!(TorusConfig::new(1.0, 2.0, 40, 0.07, -0.5, 5.0).is_err());
    }

    #[test]
    fn test_camera_inside_torus_rejected() {
        let result = TorusConfig::new(1.0, 2.0, 40, 0.07, 0.02, 2.5);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = TorusConfig::new(1.0, 2.0, 0, 0.07, 0.02, 5.0).unwrap_err();
        assert!(err.to_string().contains("screen size"));
    }
}
