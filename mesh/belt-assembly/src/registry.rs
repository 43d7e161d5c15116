//! Find-or-create registry matching drag endpoints to existing lines.

use belt_grid::GridPoint;
use belt_route::RouteConfig;
use tracing::debug;

use crate::line::AssemblyLine;

/// Stable handle to a line inside a [`LineRegistry`].
///
/// Lines are never removed, so a `LineId` stays valid for the life of
/// the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(usize);

/// Where a new connection should attach to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendMode {
    /// Attach after the line's last connection.
    Append,

    /// Attach before the line's first connection.
    InsertFront,
}

/// Owns every line in a placement session and matches new drag
/// endpoints against their free ends.
///
/// # Example
///
/// ```
/// use belt_assembly::{AppendMode, LineRegistry};
/// use belt_grid::GridPoint;
/// use belt_route::RouteStrategy;
///
/// let mut registry = LineRegistry::new();
/// let start = GridPoint::new(0, 0, 0);
/// let end = GridPoint::new(3, 0, 2);
///
/// let (mode, id) = registry.get_or_create(start);
/// assert_eq!(mode, AppendMode::Append);
///
/// let line = registry.line_mut(id).unwrap();
/// line.add_connection(start, end, RouteStrategy::SolutionA).unwrap();
///
/// // Dragging away from the line's free back end extends it
/// let (mode, same) = registry.get_or_create(end);
/// assert_eq!(mode, AppendMode::Append);
/// assert_eq!(same, id);
/// ```
#[derive(Debug, Default)]
pub struct LineRegistry {
    /// Lines in creation order; scan order decides first-match-wins.
    lines: Vec<AssemblyLine>,

    /// Configuration handed to every line this registry creates.
    route_config: RouteConfig,
}

impl LineRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose lines use the given route
    /// configuration.
    #[must_use]
    pub const fn with_route_config(route_config: RouteConfig) -> Self {
        Self {
            lines: Vec::new(),
            route_config,
        }
    }

    /// Find the line a connection at `point` should attach to, or
    /// create one.
    ///
    /// Scans lines in creation order; the first line whose free front
    /// end matches yields [`AppendMode::InsertFront`], the first whose
    /// free back end matches yields [`AppendMode::Append`]. Lines that
    /// independently come to share an endpoint stay separate: whichever
    /// was created first wins the match. With no match at all, a fresh
    /// empty line is created, so repeating a miss creates a second line
    /// rather than returning the first.
    pub fn get_or_create(&mut self, point: GridPoint) -> (AppendMode, LineId) {
        for (index, line) in self.lines.iter().enumerate() {
            if line.first_start() == Some(point) {
                return (AppendMode::InsertFront, LineId(index));
            }
            if line.last_end() == Some(point) {
                return (AppendMode::Append, LineId(index));
            }
        }

        debug!(?point, "No line ends here, starting a new one");
        self.lines
            .push(AssemblyLine::with_route_config(self.route_config.clone()));
        (AppendMode::Append, LineId(self.lines.len() - 1))
    }

    /// Get a line by handle.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&AssemblyLine> {
        self.lines.get(id.0)
    }

    /// Get a mutable line by handle.
    pub fn line_mut(&mut self, id: LineId) -> Option<&mut AssemblyLine> {
        self.lines.get_mut(id.0)
    }

    /// Number of lines, including ones still without connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the registry has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &AssemblyLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use belt_route::RouteStrategy;

    use super::*;

    fn grid(x: i32, y: i32, z: i32) -> GridPoint {
        GridPoint::new(x, y, z)
    }

    #[test]
    fn test_miss_creates_a_new_line() {
        let mut registry = LineRegistry::new();

        let (mode, id) = registry.get_or_create(grid(0, 0, 0));
        assert_eq!(mode, AppendMode::Append);
        assert_eq!(registry.len(), 1);
        assert!(registry.line(id).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_miss_creates_distinct_lines() {
        let mut registry = LineRegistry::new();

        // A connection-less line has no free ends to match, so the same
        // point misses twice.
        let (_, first) = registry.get_or_create(grid(0, 0, 0));
        let (_, second) = registry.get_or_create(grid(0, 0, 0));

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_matches_free_ends_of_committed_line() {
        let mut registry = LineRegistry::new();
        let start = grid(0, 0, 0);
        let end = grid(3, 0, 2);

        let (_, id) = registry.get_or_create(start);
        registry
            .line_mut(id)
            .unwrap()
            .add_connection(start, end, RouteStrategy::SolutionA)
            .unwrap();

        let (mode, found) = registry.get_or_create(end);
        assert_eq!((mode, found), (AppendMode::Append, id));

        let (mode, found) = registry.get_or_create(start);
        assert_eq!((mode, found), (AppendMode::InsertFront, id));

        // Interior route points are not free ends
        let (_, fresh) = registry.get_or_create(grid(1, 0, 0));
        assert_ne!(fresh, id);
    }

    #[test]
    fn test_first_created_line_wins_shared_endpoint() {
        let mut registry = LineRegistry::new();
        let shared = grid(5, 0, 0);

        let (_, first) = registry.get_or_create(grid(0, 0, 0));
        registry
            .line_mut(first)
            .unwrap()
            .add_connection(grid(0, 0, 0), shared, RouteStrategy::SolutionA)
            .unwrap();

        let (_, second) = registry.get_or_create(grid(9, 0, 0));
        registry
            .line_mut(second)
            .unwrap()
            .add_connection(shared, grid(9, 0, 0), RouteStrategy::SolutionA)
            .unwrap();

        // Both lines now touch `shared`, and they stay separate lines;
        // the earlier line's back end is matched before the later one's
        // front end.
        let (mode, found) = registry.get_or_create(shared);
        assert_eq!((mode, found), (AppendMode::Append, first));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_config_flows_into_lines() {
        let config = RouteConfig::new().with_rotation_offset_degrees(45.0);
        let mut registry = LineRegistry::with_route_config(config);

        let (_, id) = registry.get_or_create(grid(0, 0, 0));
        let line = registry.line(id).unwrap();
        let offset = line.route_config().rotation_offset_degrees();
        assert!((offset - 45.0).abs() < f64::EPSILON);
    }
}
