//! A single drawn conveyor connection and its resolved route.

use belt_grid::GridPoint;
use belt_route::{RouteConfig, RouteError, RoutePoint, RouteStrategy, classify_route, plan_route};

/// One user-drawn conveyor segment between two lattice cells.
///
/// A connection is born unresolved, knowing only its endpoints and the
/// sweep strategy frozen in by the UI toggle. Resolution computes the
/// staircase route and per-point orientation; the owning line triggers
/// it when the line finishes (or is extended after finishing).
///
/// # Example
///
/// ```
/// use belt_assembly::Connection;
/// use belt_grid::GridPoint;
/// use belt_route::RouteStrategy;
///
/// let connection = Connection::new(
///     GridPoint::new(0, 0, 0),
///     GridPoint::new(3, 0, 2),
///     RouteStrategy::SolutionA,
/// );
/// assert!(!connection.is_resolved());
/// assert!(connection.joins(GridPoint::new(3, 0, 2), GridPoint::new(0, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Drag start cell.
    start: GridPoint,

    /// Drag end cell.
    end: GridPoint,

    /// Sweep order the planner uses for this connection.
    strategy: RouteStrategy,

    /// Resolved per-point route, empty until resolution runs.
    points: Vec<RoutePoint>,
}

impl Connection {
    /// Create an unresolved connection.
    #[must_use]
    pub const fn new(start: GridPoint, end: GridPoint, strategy: RouteStrategy) -> Self {
        Self {
            start,
            end,
            strategy,
            points: Vec::new(),
        }
    }

    /// Drag start cell.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> GridPoint {
        self.start
    }

    /// Drag end cell.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> GridPoint {
        self.end
    }

    /// Sweep strategy frozen into this connection.
    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> RouteStrategy {
        self.strategy
    }

    /// Resolved route points, empty until the owning line resolves them.
    #[must_use]
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Whether the route has been computed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.points.is_empty()
    }

    /// Whether this connection joins the given cells, in either order.
    ///
    /// Duplicate detection treats connections as undirected.
    #[must_use]
    pub fn joins(&self, start: GridPoint, end: GridPoint) -> bool {
        (self.start == start && self.end == end) || (self.start == end && self.end == start)
    }

    /// Compute the route and per-point orientation for this connection.
    pub(crate) fn resolve(&mut self, config: &RouteConfig) -> Result<(), RouteError> {
        let route = plan_route(self.start, self.end, self.strategy);
        self.points = classify_route(&route, config)?;
        Ok(())
    }
}
