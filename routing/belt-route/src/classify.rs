//! Orientation annotation for resolved routes.
//!
//! A planned route is just cells; rendering needs to know which way each
//! segment faces and whether it is a corner piece. [`classify_route`]
//! walks a route once, left to right, deriving a local step direction for
//! every cell, bucketing it into a [`Cardinal`], and flagging direction
//! changes as corners. The output feeds straight into mesh batching.

use belt_grid::GridPoint;
use nalgebra::UnitQuaternion;

use crate::cardinal::{Cardinal, rotation_for_index, turn_angle_degrees};
use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::path::RoutePath;

/// Lattice turn angles land exactly on the override values, so the
/// tolerance only absorbs float rounding.
const TURN_ANGLE_EPSILON: f64 = 1e-6;

/// A route cell annotated with the orientation its segment mesh needs.
///
/// Only produced by [`classify_route`]; the fields are read-only because
/// a hand-built annotation could disagree with the route it claims to
/// describe.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    point: GridPoint,
    cardinal: Cardinal,
    rotation: UnitQuaternion<f64>,
    corner: bool,
}

impl RoutePoint {
    /// The lattice cell this annotation describes.
    #[must_use]
    pub const fn point(&self) -> GridPoint {
        self.point
    }

    /// Compass bucket of the local step direction at this cell.
    #[must_use]
    pub const fn cardinal(&self) -> Cardinal {
        self.cardinal
    }

    /// Yaw to apply to an east-authored segment prefab placed here.
    #[must_use]
    pub const fn rotation(&self) -> UnitQuaternion<f64> {
        self.rotation
    }

    /// Whether the direction of travel changes at this cell.
    #[must_use]
    pub const fn is_corner(&self) -> bool {
        self.corner
    }
}

/// Annotates every cell of a route with its orientation and corner flag.
///
/// The local direction at a cell is the step towards the next cell; the
/// final cell reuses its incoming step. A cell is a corner when its local
/// direction differs from the previous cell's. Straight cells take the
/// plain cardinal-to-index mapping; corners run through a small override
/// table first (see [`corner_rotation_index`]).
///
/// An empty route yields an empty annotation. A single-cell route has no
/// direction to measure and is annotated east-facing with the identity
/// rotation.
///
/// # Errors
///
/// Returns [`RouteError::DegenerateDirection`] if two consecutive cells
/// are equal, since a zero step has no heading. Planned routes never
/// contain one; a hand-assembled [`RoutePath`] might.
///
/// # Example
///
/// ```
/// use belt_grid::GridPoint;
/// use belt_route::{RouteConfig, RouteStrategy, classify_route, plan_route};
///
/// # fn main() -> Result<(), belt_route::RouteError> {
/// let route = plan_route(
///     GridPoint::origin(),
///     GridPoint::new(3, 0, 2),
///     RouteStrategy::SolutionA,
/// );
/// let annotated = classify_route(&route, &RouteConfig::new())?;
///
/// // The eastward run turns into a climb at (3, 0, 0).
/// assert!(annotated[3].is_corner());
/// assert!(!annotated[2].is_corner());
/// # Ok(())
/// # }
/// ```
pub fn classify_route(
    route: &RoutePath,
    config: &RouteConfig,
) -> Result<Vec<RoutePoint>, RouteError> {
    let points = route.points();

    if points.is_empty() {
        return Ok(Vec::new());
    }
    if let [only] = points {
        return Ok(vec![RoutePoint {
            point: *only,
            cardinal: Cardinal::East,
            rotation: UnitQuaternion::identity(),
            corner: false,
        }]);
    }

    let offset = config.rotation_offset_degrees();
    let mut annotated = Vec::with_capacity(points.len());
    let mut previous_direction: Option<GridPoint> = None;

    for (i, &point) in points.iter().enumerate() {
        let local_direction = if i == points.len() - 1 {
            point - points[i - 1]
        } else {
            points[i + 1] - point
        };

        let Some(cardinal) = Cardinal::of_direction(local_direction) else {
            return Err(RouteError::degenerate_direction(point));
        };

        let (index, corner) = match previous_direction {
            Some(previous) if previous != local_direction => {
                (corner_rotation_index(cardinal, local_direction, previous), true)
            }
            _ => (cardinal.rotation_index(), false),
        };

        annotated.push(RoutePoint {
            point,
            cardinal,
            rotation: rotation_for_index(index, offset),
            corner,
        });
        previous_direction = Some(local_direction);
    }

    Ok(annotated)
}

/// Rotation index for a corner cell.
///
/// Four turn geometries need an index the plain cardinal mapping would
/// get wrong, keyed on the local cardinal plus the signed angle of the
/// direction change. Every other turn falls back to the straight-segment
/// mapping; an exhaustive turn test pins the resulting indices either
/// way.
fn corner_rotation_index(cardinal: Cardinal, local: GridPoint, previous: GridPoint) -> u8 {
    let turn = turn_angle_degrees(local - previous);

    match cardinal {
        Cardinal::South if approximately(turn, -135.0) => 3,
        Cardinal::West if approximately(turn, 135.0) => 0,
        Cardinal::North if approximately(turn, 45.0) => 1,
        Cardinal::East if approximately(turn, -45.0) => 2,
        _ => cardinal.rotation_index(),
    }
}

fn approximately(angle: f64, target: f64) -> bool {
    (angle - target).abs() < TURN_ANGLE_EPSILON
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use crate::planner::{RouteStrategy, plan_route};

    use super::*;

    fn classify(points: Vec<GridPoint>) -> Vec<RoutePoint> {
        classify_route(&RoutePath::new(points), &RouteConfig::new()).unwrap()
    }

    /// Direction an east-authored prefab faces after the given rotation.
    fn facing(point: &RoutePoint) -> Vector3<f64> {
        point.rotation() * Vector3::x()
    }

    #[test]
    fn test_empty_route() {
        let annotated = classify(Vec::new());
        assert!(annotated.is_empty());
    }

    #[test]
    fn test_single_cell_route_faces_east() {
        let annotated = classify(vec![GridPoint::new(2, -1, 3)]);

        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].point(), GridPoint::new(2, -1, 3));
        assert_eq!(annotated[0].cardinal(), Cardinal::East);
        assert_eq!(annotated[0].rotation(), UnitQuaternion::identity());
        assert!(!annotated[0].is_corner());
    }

    #[test]
    fn test_straight_east_line() {
        let annotated = classify(vec![
            GridPoint::new(0, 0, 0),
            GridPoint::new(1, 0, 0),
            GridPoint::new(2, 0, 0),
        ]);

        for point in &annotated {
            assert_eq!(point.cardinal(), Cardinal::East);
            assert_eq!(point.rotation(), UnitQuaternion::identity());
            assert!(!point.is_corner());
        }
    }

    #[test]
    fn test_straight_lines_face_their_heading() {
        let headings = [
            (GridPoint::new(0, 1, 0), Vector3::new(0.0, 1.0, 0.0)),
            (GridPoint::new(1, 0, 0), Vector3::new(1.0, 0.0, 0.0)),
            (GridPoint::new(0, -1, 0), Vector3::new(0.0, -1.0, 0.0)),
            (GridPoint::new(-1, 0, 0), Vector3::new(-1.0, 0.0, 0.0)),
        ];

        for (step, expected) in headings {
            let annotated = classify(vec![GridPoint::origin(), step]);
            for point in &annotated {
                assert!(!point.is_corner());
                assert_relative_eq!(facing(point), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_vertical_line_classifies_east() {
        let annotated = classify(vec![
            GridPoint::new(0, 0, 0),
            GridPoint::new(0, 0, 1),
            GridPoint::new(0, 0, 2),
        ]);

        for point in &annotated {
            assert_eq!(point.cardinal(), Cardinal::East);
            assert_eq!(point.rotation(), UnitQuaternion::identity());
            assert!(!point.is_corner());
        }
    }

    #[test]
    fn test_corner_flagged_at_direction_change() {
        let route = plan_route(
            GridPoint::origin(),
            GridPoint::new(3, 0, 2),
            RouteStrategy::SolutionA,
        );
        let annotated = classify_route(&route, &RouteConfig::new()).unwrap();

        let corners: Vec<GridPoint> = annotated
            .iter()
            .filter(|p| p.is_corner())
            .map(RoutePoint::point)
            .collect();
        assert_eq!(corners, [GridPoint::new(3, 0, 0)]);
    }

    #[test]
    fn test_final_cell_reuses_incoming_direction() {
        // The last cell has no outgoing step; it must not read as a corner.
        let annotated = classify(vec![
            GridPoint::new(0, 0, 0),
            GridPoint::new(1, 0, 0),
            GridPoint::new(1, 1, 0),
        ]);

        assert!(annotated[1].is_corner());
        assert!(!annotated[2].is_corner());
        assert_eq!(annotated[2].cardinal(), Cardinal::North);
    }

    #[test]
    fn test_clockwise_turns_use_override_indices() {
        // Each case walks one step along `incoming`, then turns. The
        // override table fires for all four clockwise turns.
        let cases = [
            // incoming, outgoing, expected rotation index at the corner
            (GridPoint::new(0, 1, 0), GridPoint::new(1, 0, 0), 2u8),
            (GridPoint::new(1, 0, 0), GridPoint::new(0, -1, 0), 3u8),
            (GridPoint::new(0, -1, 0), GridPoint::new(-1, 0, 0), 0u8),
            (GridPoint::new(-1, 0, 0), GridPoint::new(0, 1, 0), 1u8),
        ];

        for (incoming, outgoing, index) in cases {
            let first = GridPoint::origin() + incoming;
            let annotated = classify(vec![GridPoint::origin(), first, first + outgoing]);

            assert!(annotated[1].is_corner(), "{incoming:?} -> {outgoing:?}");
            assert_relative_eq!(
                facing(&annotated[1]),
                rotation_for_index(index, 90.0) * Vector3::x(),
                epsilon = 1e-12,
            );
        }
    }

    #[test]
    fn test_counterclockwise_turns_fall_back_to_cardinal() {
        let cases = [
            (GridPoint::new(0, 1, 0), GridPoint::new(-1, 0, 0), Cardinal::West),
            (GridPoint::new(-1, 0, 0), GridPoint::new(0, -1, 0), Cardinal::South),
            (GridPoint::new(0, -1, 0), GridPoint::new(1, 0, 0), Cardinal::East),
            (GridPoint::new(1, 0, 0), GridPoint::new(0, 1, 0), Cardinal::North),
        ];

        for (incoming, outgoing, cardinal) in cases {
            let first = GridPoint::origin() + incoming;
            let annotated = classify(vec![GridPoint::origin(), first, first + outgoing]);

            assert!(annotated[1].is_corner(), "{incoming:?} -> {outgoing:?}");
            assert_eq!(annotated[1].cardinal(), cardinal);
            assert_relative_eq!(
                facing(&annotated[1]),
                rotation_for_index(cardinal.rotation_index(), 90.0) * Vector3::x(),
                epsilon = 1e-12,
            );
        }
    }

    #[test]
    fn test_climb_after_east_run_falls_back() {
        // East then up: the vertical step buckets east, the turn angle is
        // +135, no override fires, so the corner keeps the identity yaw.
        let annotated = classify(vec![
            GridPoint::new(0, 0, 0),
            GridPoint::new(1, 0, 0),
            GridPoint::new(1, 0, 1),
        ]);

        assert!(annotated[1].is_corner());
        assert_eq!(annotated[1].cardinal(), Cardinal::East);
        assert_eq!(annotated[1].rotation(), UnitQuaternion::identity());
    }

    #[test]
    fn test_westward_exit_from_climb_hits_override() {
        // Up then west: the turn angle is +135 with a west heading, which
        // is one of the override geometries.
        let annotated = classify(vec![
            GridPoint::new(1, 0, 0),
            GridPoint::new(1, 0, 1),
            GridPoint::new(0, 0, 1),
        ]);

        assert!(annotated[1].is_corner());
        assert_eq!(annotated[1].cardinal(), Cardinal::West);
        assert_eq!(annotated[1].rotation(), UnitQuaternion::identity());
    }

    #[test]
    fn test_repeated_cell_is_degenerate() {
        let route = RoutePath::new(vec![GridPoint::new(1, 2, 3), GridPoint::new(1, 2, 3)]);
        let error = classify_route(&route, &RouteConfig::new()).unwrap_err();

        assert!(error.is_degenerate_direction());
        assert_eq!(
            error.to_string(),
            "degenerate direction at GridPoint { x: 1, y: 2, z: 3 }: \
             zero-length step has no cardinal",
        );
    }

    #[test]
    fn test_custom_rotation_offset() {
        let config = RouteConfig::new().with_rotation_offset_degrees(45.0);
        let route = RoutePath::new(vec![GridPoint::new(0, 0, 0), GridPoint::new(0, -1, 0)]);
        let annotated = classify_route(&route, &config).unwrap();

        // South is index 1, so a 45 degree offset yields a southeast yaw.
        let sqrt_half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(
            facing(&annotated[0]),
            Vector3::new(sqrt_half, -sqrt_half, 0.0),
            epsilon = 1e-12,
        );
    }
}
