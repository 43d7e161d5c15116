//! Configuration for orientation classification.
//!
//! # Example
//!
//! ```
//! use belt_route::RouteConfig;
//!
//! let config = RouteConfig::default().with_rotation_offset_degrees(45.0);
//! assert!(config.validate().is_empty());
//! ```

/// Configuration for the orientation classifier.
///
/// Controls how cardinal orientation indices translate into rotations for
/// placed segment meshes.
///
/// # Example
///
/// ```
/// use belt_route::RouteConfig;
///
/// let config = RouteConfig::new();
/// assert!((config.rotation_offset_degrees() - 90.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Degrees of clockwise rotation applied per orientation index step.
    rotation_offset_degrees: f64,
}

impl RouteConfig {
    /// Creates a new configuration with default settings.
    ///
    /// Defaults:
    /// - Rotation offset: 90 degrees (quarter turns, matching square cells)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rotation_offset_degrees: 90.0,
        }
    }

    /// Sets the rotation applied per orientation index step, in degrees.
    ///
    /// Segment prefabs are authored facing east; a point with orientation
    /// index `n` is rotated clockwise by `n` times this angle.
    #[must_use]
    pub const fn with_rotation_offset_degrees(mut self, degrees: f64) -> Self {
        self.rotation_offset_degrees = degrees;
        self
    }

    /// Returns the rotation offset in degrees.
    #[must_use]
    pub const fn rotation_offset_degrees(&self) -> f64 {
        self.rotation_offset_degrees
    }

    /// Validates the configuration, returning a list of problems.
    ///
    /// An empty list means the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RouteConfig;
    ///
    /// let bad = RouteConfig::default().with_rotation_offset_degrees(f64::NAN);
    /// assert!(!bad.validate().is_empty());
    /// ```
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.rotation_offset_degrees.is_finite() {
            problems.push(format!(
                "rotation offset must be finite, got {}",
                self.rotation_offset_degrees
            ));
        } else if self.rotation_offset_degrees == 0.0 {
            problems.push("rotation offset of zero cannot distinguish orientations".to_string());
        }

        problems
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offset() {
        let config = RouteConfig::default();
        assert_eq!(config.rotation_offset_degrees(), 90.0);
    }

    #[test]
    fn test_with_rotation_offset() {
        let config = RouteConfig::new().with_rotation_offset_degrees(45.0);
        assert_eq!(config.rotation_offset_degrees(), 45.0);
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(RouteConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = RouteConfig::new().with_rotation_offset_degrees(f64::NAN);
        let problems = config.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("finite"));
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = RouteConfig::new().with_rotation_offset_degrees(0.0);
        let problems = config.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("zero"));
    }
}
