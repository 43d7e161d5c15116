//! Deterministic staircase route planning between lattice cells.
//!
//! A route is built from three sequential straight sweeps, one per axis,
//! each holding the other two coordinates fixed so the sweeps splice into
//! one continuous path from start to end. The two strategies differ only
//! in which axes sweep first, which is what makes them produce visibly
//! different staircases for the same endpoints.
//!
//! Planning is pure and stateless: the same endpoints and strategy always
//! produce the same route, so the planner doubles as the live-preview
//! source while a drag gesture is still in progress.
//!
//! # Example
//!
//! ```
//! use belt_route::{RouteStrategy, plan_route};
//! use belt_grid::GridPoint;
//!
//! let route = plan_route(
//!     GridPoint::new(0, 0, 0),
//!     GridPoint::new(3, 0, 2),
//!     RouteStrategy::SolutionA,
//! );
//!
//! assert_eq!(route.first(), Some(&GridPoint::new(0, 0, 0)));
//! assert_eq!(route.last(), Some(&GridPoint::new(3, 0, 2)));
//! assert_eq!(route.len(), 6);
//! ```

use belt_grid::GridPoint;

use crate::path::RoutePath;

/// Axis-sweep order used to resolve a route between two cells.
///
/// Chosen per connection by the caller (typically a UI toggle) and frozen
/// once the connection is resolved. The two strategies generally produce
/// different routes for the same endpoints; both are valid staircases, so
/// the choice is the user-visible "solution A / solution B" alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteStrategy {
    /// Sweeps x, then y, then z: runs east first and climbs last.
    #[default]
    SolutionA,

    /// Sweeps y, then z, then x: runs north first, climbs, then runs east.
    SolutionB,
}

/// Computes the deterministic staircase route from `start` to `end` under
/// the given strategy.
///
/// The result always begins at `start`, ends at `end`, visits no cell
/// twice, and moves exactly one unit along exactly one axis per step.
/// `start == end` yields a single-point route.
///
/// # Example
///
/// ```
/// use belt_route::{RouteStrategy, plan_route};
/// use belt_grid::GridPoint;
///
/// let route = plan_route(
///     GridPoint::new(0, 0, 0),
///     GridPoint::new(3, 0, 2),
///     RouteStrategy::SolutionB,
/// );
///
/// // Solution B climbs before running east.
/// assert_eq!(route.get(1), Some(&GridPoint::new(0, 0, 1)));
/// ```
#[must_use]
pub fn plan_route(start: GridPoint, end: GridPoint, strategy: RouteStrategy) -> RoutePath {
    match strategy {
        RouteStrategy::SolutionA => plan_solution_a(start, end),
        RouteStrategy::SolutionB => plan_solution_b(start, end),
    }
}

/// Computes both solutions for the same endpoints in one call.
///
/// Placement tools draw both staircases while a drag is in progress so the
/// player can see the alternative before committing.
///
/// # Example
///
/// ```
/// use belt_route::plan_both;
/// use belt_grid::GridPoint;
///
/// let (a, b) = plan_both(GridPoint::new(0, 0, 0), GridPoint::new(2, 3, 1));
/// assert_eq!(a.first(), b.first());
/// assert_eq!(a.last(), b.last());
/// assert_ne!(a, b);
/// ```
#[must_use]
pub fn plan_both(start: GridPoint, end: GridPoint) -> (RoutePath, RoutePath) {
    (plan_solution_a(start, end), plan_solution_b(start, end))
}

fn plan_solution_a(start: GridPoint, end: GridPoint) -> RoutePath {
    let mut path = RoutePath::empty();
    sweep_x(&mut path, start.x, end.x, start.y, start.z);
    sweep_y(&mut path, start.y, end.y, end.x, start.z);
    sweep_z(&mut path, start.z, end.z, end.x, end.y);
    path
}

fn plan_solution_b(start: GridPoint, end: GridPoint) -> RoutePath {
    let mut path = RoutePath::empty();
    sweep_y(&mut path, start.y, end.y, start.x, start.z);
    sweep_z(&mut path, start.z, end.z, start.x, end.y);
    sweep_x(&mut path, start.x, end.x, end.y, end.z);
    path
}

// Each sweep walks one axis from `from` to `to` inclusive, holding the
// other two coordinates fixed. Pivot cells shared with the previous sweep
// are dropped by push_unique, which splices the sweeps together.

fn sweep_x(path: &mut RoutePath, from: i32, to: i32, y: i32, z: i32) {
    let step = if to >= from { 1 } else { -1 };
    let mut x = from;
    loop {
        path.push_unique(GridPoint::new(x, y, z));
        if x == to {
            break;
        }
        x += step;
    }
}

fn sweep_y(path: &mut RoutePath, from: i32, to: i32, x: i32, z: i32) {
    let step = if to >= from { 1 } else { -1 };
    let mut y = from;
    loop {
        path.push_unique(GridPoint::new(x, y, z));
        if y == to {
            break;
        }
        y += step;
    }
}

fn sweep_z(path: &mut RoutePath, from: i32, to: i32, x: i32, y: i32) {
    let step = if to >= from { 1 } else { -1 };
    let mut z = from;
    loop {
        path.push_unique(GridPoint::new(x, y, z));
        if z == to {
            break;
        }
        z += step;
    }
}
