//! Error types for route computation.
//!
//! This module defines the [`RouteError`] enum which represents all possible
//! errors that can occur during route planning and orientation
//! classification.

use belt_grid::GridPoint;

/// Errors that can occur during route operations.
///
/// Route planning itself is total; errors arise from orientation
/// classification reaching geometry it cannot bucket, or from rejected
/// configuration values.
///
/// # Example
///
/// ```
/// use belt_route::RouteError;
/// use belt_grid::GridPoint;
///
/// let error = RouteError::degenerate_direction(GridPoint::new(1, 0, 0));
/// assert!(error.to_string().contains("degenerate direction"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RouteError {
    /// A zero-length direction vector reached cardinal classification.
    ///
    /// Resolved routes are duplicate-free, so consecutive points always
    /// produce a non-zero step; hitting this indicates a logic defect in
    /// the caller's route, and the operation aborts rather than emit
    /// incorrect geometry.
    #[error("degenerate direction at {at:?}: zero-length step has no cardinal")]
    DegenerateDirection {
        /// The route point whose direction could not be classified.
        at: GridPoint,
    },

    /// An invalid configuration parameter was provided.
    ///
    /// Check the configuration values for valid ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RouteError {
    /// Creates a degenerate direction error at the given route point.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RouteError;
    /// use belt_grid::GridPoint;
    ///
    /// let error = RouteError::degenerate_direction(GridPoint::origin());
    /// assert!(error.is_degenerate_direction());
    /// ```
    #[must_use]
    pub const fn degenerate_direction(at: GridPoint) -> Self {
        Self::DegenerateDirection { at }
    }

    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RouteError;
    ///
    /// let error = RouteError::invalid_config("rotation offset must be finite");
    /// assert!(error.to_string().contains("rotation offset"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is a degenerate direction error.
    #[must_use]
    pub const fn is_degenerate_direction(&self) -> bool {
        matches!(self, Self::DegenerateDirection { .. })
    }

    /// Returns `true` if this is an invalid configuration error.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
