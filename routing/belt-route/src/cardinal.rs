//! Compass bucketing and yaw helpers for step directions.
//!
//! Segment prefabs are authored facing east, so every orientation in the
//! pipeline reduces to "how many quarter turns from east". [`Cardinal`]
//! names the four buckets, [`rotation_for_index`] turns a quarter-turn
//! count into a quaternion, and [`turn_angle_degrees`] measures the signed
//! heading change across a corner.

use belt_grid::GridPoint;
use nalgebra::{UnitQuaternion, Vector3};

/// Compass orientation of a step direction, viewed from above.
///
/// The lattice is x-east, y-north, z-up. A direction is bucketed into the
/// 90 degree sector it falls in, with sector boundaries on the diagonals:
/// bearings in `[-45, 45)` are north, `[45, 135)` east, `[-135, -45)`
/// west, everything else south. Purely vertical directions have no
/// bearing and are treated as east, the prefab rest orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinal {
    /// Towards +y.
    North,
    /// Towards +x.
    East,
    /// Towards -y.
    South,
    /// Towards -x.
    West,
}

impl Cardinal {
    /// Buckets a step direction into its compass sector.
    ///
    /// Returns `None` for the zero direction, which has no heading.
    /// Purely vertical directions bucket as [`Cardinal::East`].
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    /// use belt_route::Cardinal;
    ///
    /// assert_eq!(
    ///     Cardinal::of_direction(GridPoint::new(0, 1, 0)),
    ///     Some(Cardinal::North),
    /// );
    /// assert_eq!(
    ///     Cardinal::of_direction(GridPoint::new(0, 0, 1)),
    ///     Some(Cardinal::East),
    /// );
    /// assert_eq!(Cardinal::of_direction(GridPoint::origin()), None);
    /// ```
    #[must_use]
    pub fn of_direction(direction: GridPoint) -> Option<Self> {
        if direction == GridPoint::origin() {
            return None;
        }
        if direction.x == 0 && direction.y == 0 {
            return Some(Self::East);
        }

        let bearing = bearing_degrees(direction);
        let cardinal = if (-45.0..45.0).contains(&bearing) {
            Self::North
        } else if (45.0..135.0).contains(&bearing) {
            Self::East
        } else if (-135.0..-45.0).contains(&bearing) {
            Self::West
        } else {
            Self::South
        };
        Some(cardinal)
    }

    /// Quarter-turn count from the east-facing rest orientation.
    ///
    /// The table is east 0, south 1, west 2, north 3: indices advance
    /// clockwise as seen from above, matching how prefab meshes are
    /// stepped around the vertical axis.
    #[must_use]
    pub const fn rotation_index(self) -> u8 {
        match self {
            Self::East => 0,
            Self::South => 1,
            Self::West => 2,
            Self::North => 3,
        }
    }
}

/// Signed bearing of a direction in degrees, measured clockwise from
/// north as seen from above. Range `(-180, 180]`.
fn bearing_degrees(direction: GridPoint) -> f64 {
    f64::from(direction.x)
        .atan2(f64::from(direction.y))
        .to_degrees()
}

/// Yaw rotation placing an east-authored prefab at the given quarter-turn
/// index.
///
/// Index steps rotate clockwise as seen from above, so with the default
/// 90 degree offset index 1 faces south and index 3 faces north.
///
/// # Example
///
/// ```
/// use belt_route::rotation_for_index;
/// use nalgebra::Vector3;
///
/// let south = rotation_for_index(1, 90.0) * Vector3::x();
/// approx::assert_relative_eq!(south, -Vector3::y(), epsilon = 1e-12);
/// ```
#[must_use]
pub fn rotation_for_index(index: u8, offset_degrees: f64) -> UnitQuaternion<f64> {
    let yaw = -(f64::from(index) * offset_degrees).to_radians();
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
}

/// Signed angle in degrees between a direction change and the east axis.
///
/// The magnitude is the full three-dimensional angle to +x, so vertical
/// components count; the sign follows the horizontal heading, negative
/// when the change points south of east-west. Corner classification keys
/// its override table on this value.
#[must_use]
pub fn turn_angle_degrees(delta: GridPoint) -> f64 {
    let angle = delta.to_vector().angle(&Vector3::x()).to_degrees();
    if delta.y < 0 { -angle } else { angle }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn test_of_direction_unit_steps() {
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(0, 1, 0)),
            Some(Cardinal::North),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(1, 0, 0)),
            Some(Cardinal::East),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(0, -1, 0)),
            Some(Cardinal::South),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(-1, 0, 0)),
            Some(Cardinal::West),
        );
    }

    #[test]
    fn test_of_direction_vertical_buckets_east() {
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(0, 0, 1)),
            Some(Cardinal::East),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(0, 0, -1)),
            Some(Cardinal::East),
        );
    }

    #[test]
    fn test_of_direction_zero_is_none() {
        assert_eq!(Cardinal::of_direction(GridPoint::origin()), None);
    }

    #[test]
    fn test_of_direction_sector_boundaries() {
        // Diagonals sit exactly on the sector boundaries; the half-open
        // ranges put each one in a single deterministic bucket.
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(1, 1, 0)),
            Some(Cardinal::East),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(1, -1, 0)),
            Some(Cardinal::South),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(-1, -1, 0)),
            Some(Cardinal::West),
        );
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(-1, 1, 0)),
            Some(Cardinal::North),
        );
    }

    #[test]
    fn test_of_direction_ignores_vertical_component() {
        assert_eq!(
            Cardinal::of_direction(GridPoint::new(0, 3, 7)),
            Some(Cardinal::North),
        );
    }

    #[test]
    fn test_rotation_index_table() {
        assert_eq!(Cardinal::East.rotation_index(), 0);
        assert_eq!(Cardinal::South.rotation_index(), 1);
        assert_eq!(Cardinal::West.rotation_index(), 2);
        assert_eq!(Cardinal::North.rotation_index(), 3);
    }

    #[test]
    fn test_rotation_for_index_zero_is_identity() {
        let rotation = rotation_for_index(0, 90.0);
        assert_eq!(rotation, UnitQuaternion::identity());
    }

    #[test]
    fn test_rotation_for_index_steps_clockwise() {
        let east = Vector3::x();

        assert_relative_eq!(
            rotation_for_index(1, 90.0) * east,
            Vector3::new(0.0, -1.0, 0.0),
            epsilon = 1e-12,
        );
        assert_relative_eq!(
            rotation_for_index(2, 90.0) * east,
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-12,
        );
        assert_relative_eq!(
            rotation_for_index(3, 90.0) * east,
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12,
        );
    }

    #[test]
    fn test_rotation_for_index_honours_offset() {
        let rotated = rotation_for_index(2, 45.0) * Vector3::x();
        assert_relative_eq!(
            rotated,
            Vector3::new(0.0, -1.0, 0.0),
            epsilon = 1e-12,
        );
    }

    #[test]
    fn test_turn_angle_horizontal_quadrants() {
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(1, 1, 0)),
            45.0,
            epsilon = 1e-9,
        );
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(1, -1, 0)),
            -45.0,
            epsilon = 1e-9,
        );
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(-1, 1, 0)),
            135.0,
            epsilon = 1e-9,
        );
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(-1, -1, 0)),
            -135.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_turn_angle_counts_vertical_component() {
        // A climb away from east still reads as a 135 degree turn.
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(-1, 0, 1)),
            135.0,
            epsilon = 1e-9,
        );
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(-1, 0, -1)),
            135.0,
            epsilon = 1e-9,
        );
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(0, 0, 1)),
            90.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_turn_angle_sign_follows_southward_heading() {
        assert_relative_eq!(
            turn_angle_degrees(GridPoint::new(0, -1, 1)),
            -90.0,
            epsilon = 1e-9,
        );
    }
}
