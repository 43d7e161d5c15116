//! An ordered chain of connections forming one continuous conveyor.

use belt_grid::GridPoint;
use belt_route::{RouteConfig, RouteError, RouteStrategy};
use tracing::debug;

use crate::connection::Connection;
use crate::error::AssemblyResult;
use crate::visual::LineVisual;

/// Outcome of adding or inserting a connection.
///
/// Returned instead of firing a hidden callback: the caller learns in
/// one value whether the line changed and whether its geometry is now
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The endpoint pair was already present, in either order; nothing
    /// changed.
    Duplicate,

    /// A connection joined the chain.
    Extended {
        /// True when the line is finished, so a mesh rebuild is due.
        rebuild_due: bool,
    },
}

/// An ordered chain of connections representing one continuous conveyor.
///
/// A line is born empty, accumulates connections at either end, and is
/// marked finished when the user releases the drag gesture. Per-point
/// route resolution is deferred until that transition; before it, the
/// line tracks endpoints only.
///
/// # Example
///
/// ```
/// use belt_assembly::{AssemblyLine, LineChange};
/// use belt_grid::GridPoint;
/// use belt_route::RouteStrategy;
///
/// let mut line = AssemblyLine::new();
/// let change = line
///     .add_connection(
///         GridPoint::new(0, 0, 0),
///         GridPoint::new(3, 0, 0),
///         RouteStrategy::SolutionA,
///     )
///     .unwrap();
///
/// assert_eq!(change, LineChange::Extended { rebuild_due: false });
/// assert!(line.set_finished(true).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AssemblyLine {
    /// Chain of connections, front to back.
    connections: Vec<Connection>,

    /// Whether the user has released the drag gesture.
    finished: bool,

    /// Handle to this line's renderable geometry.
    visual: LineVisual,

    /// Classifier configuration shared by every connection in the line.
    route_config: RouteConfig,
}

impl AssemblyLine {
    /// Create a new empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::with_route_config(RouteConfig::new())
    }

    /// Create a new empty line with a specific route configuration.
    #[must_use]
    pub const fn with_route_config(route_config: RouteConfig) -> Self {
        Self {
            connections: Vec::new(),
            finished: false,
            visual: LineVisual::new(),
            route_config,
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Append a connection to the back of the chain.
    ///
    /// Adding an endpoint pair the line already has (in either order) is
    /// reported as [`LineChange::Duplicate`] and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is finished and route resolution
    /// fails; this indicates a classifier defect, not a user condition.
    pub fn add_connection(
        &mut self,
        start: GridPoint,
        end: GridPoint,
        strategy: RouteStrategy,
    ) -> AssemblyResult<LineChange> {
        if self.has_connection(start, end) {
            debug!(?start, ?end, "Ignoring duplicate connection");
            return Ok(LineChange::Duplicate);
        }

        self.connections.push(Connection::new(start, end, strategy));
        self.refresh()
    }

    /// Insert a connection at the front of the chain.
    ///
    /// Same contract as [`add_connection`](Self::add_connection), used
    /// when a new drag ends where the line currently starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is finished and route resolution
    /// fails.
    pub fn insert_front_connection(
        &mut self,
        start: GridPoint,
        end: GridPoint,
        strategy: RouteStrategy,
    ) -> AssemblyResult<LineChange> {
        if self.has_connection(start, end) {
            debug!(?start, ?end, "Ignoring duplicate connection");
            return Ok(LineChange::Duplicate);
        }

        self.connections.insert(0, Connection::new(start, end, strategy));
        self.refresh()
    }

    /// Whether the line already joins the given cells, in either order.
    #[must_use]
    pub fn has_connection(&self, start: GridPoint, end: GridPoint) -> bool {
        self.connections.iter().any(|c| c.joins(start, end))
    }

    /// Resolution is deferred while the line is being drawn; an
    /// unfinished line only needs endpoint bookkeeping.
    fn refresh(&mut self) -> AssemblyResult<LineChange> {
        if self.finished {
            self.resolve_connections()?;
        }
        Ok(LineChange::Extended {
            rebuild_due: self.finished,
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Set the finished flag, resolving every connection's route on the
    /// transition to finished.
    ///
    /// Returns `true` exactly when that transition happened, which is
    /// the caller's cue to schedule one mesh rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if route resolution fails on the transition.
    pub fn set_finished(&mut self, finished: bool) -> AssemblyResult<bool> {
        let became_finished = finished && !self.finished;
        self.finished = finished;

        if became_finished {
            self.resolve_connections()?;
            debug!(
                connections = self.connections.len(),
                "Line finished, routes resolved"
            );
        }

        Ok(became_finished)
    }

    /// Whether the user has released the drag gesture.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recompute every connection's route and orientation.
    pub(crate) fn resolve_connections(&mut self) -> Result<(), RouteError> {
        for connection in &mut self.connections {
            connection.resolve(&self.route_config)?;
        }
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Connections in chain order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of connections in the chain.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether the line has no connections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Start cell of the first connection, if any.
    ///
    /// This is the line's free front end for chaining.
    #[must_use]
    pub fn first_start(&self) -> Option<GridPoint> {
        self.connections.first().map(Connection::start)
    }

    /// End cell of the last connection, if any.
    ///
    /// This is the line's free back end for chaining.
    #[must_use]
    pub fn last_end(&self) -> Option<GridPoint> {
        self.connections.last().map(Connection::end)
    }

    /// The line's route configuration.
    #[must_use]
    pub const fn route_config(&self) -> &RouteConfig {
        &self.route_config
    }

    /// The line's visual handle.
    #[must_use]
    pub const fn visual(&self) -> &LineVisual {
        &self.visual
    }

    /// Mutable access to the visual handle, for installing batched
    /// geometry.
    pub fn visual_mut(&mut self) -> &mut LineVisual {
        &mut self.visual
    }
}

impl Default for AssemblyLine {
    fn default() -> Self {
        Self::new()
    }
}
