//! Conveyor line assembly: chaining, registry, and mesh batching.
//!
//! This crate ties the routing and mesh layers together into the
//! placement-facing core of the conveyor engine:
//!
//! - [`Connection`] - One drawn segment with its resolved route
//! - [`AssemblyLine`] - An ordered chain of connections with a finished
//!   lifecycle
//! - [`LineRegistry`] - Finds or creates the line a new drag should extend
//! - [`MeshBatcher`] - Flattens a finished line into one combined mesh
//! - [`LineVisual`] - Opaque geometry handle the host layer renders from
//!
//! # Engine Independence
//!
//! This crate never touches input devices, cameras, or scene objects.
//! The external placement tool feeds it lattice cells and a strategy
//! flag; it hands back routes, change notifications, and combined
//! meshes.
//!
//! # Data Flow
//!
//! One drag gesture becomes: [`LineRegistry::get_or_create`] at the
//! drag start, then [`AssemblyLine::add_connection`] or
//! [`AssemblyLine::insert_front_connection`] at release. Per-point
//! route resolution is deferred until the line finishes. Both
//! [`AssemblyLine::set_finished`] and the returned [`LineChange`]
//! report when a rebuild is due; the caller runs
//! [`MeshBatcher::rebuild`] once per such signal, which installs the
//! combined mesh in the line's [`LineVisual`].
//!
//! # Quick Start
//!
//! ```
//! use belt_assembly::{AppendMode, LineRegistry, MeshBatcher, SegmentPrefabs};
//! use belt_grid::GridPoint;
//! use belt_route::RouteStrategy;
//!
//! let mut registry = LineRegistry::new();
//! let start = GridPoint::new(0, 0, 0);
//! let end = GridPoint::new(3, 0, 2);
//!
//! // Drag from start to end
//! let (mode, id) = registry.get_or_create(start);
//! assert_eq!(mode, AppendMode::Append);
//!
//! let line = registry.line_mut(id).unwrap();
//! line.add_connection(start, end, RouteStrategy::SolutionA).unwrap();
//!
//! // Release the drag: the line finishes and is batched once
//! if line.set_finished(true).unwrap() {
//!     MeshBatcher::new(SegmentPrefabs::default())
//!         .rebuild(line)
//!         .unwrap();
//! }
//!
//! assert!(registry.line(id).unwrap().visual().mesh().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod connection;
mod error;
mod line;
mod registry;
mod visual;

pub use batch::{BatchConfig, MeshBatcher, SegmentPrefabs};
pub use connection::Connection;
pub use error::{AssemblyError, AssemblyResult};
pub use line::{AssemblyLine, LineChange};
pub use registry::{AppendMode, LineId, LineRegistry};
pub use visual::LineVisual;

// Re-export commonly used types for convenience
pub use belt_grid::GridPoint;
pub use belt_mesh::{TriMesh, Vector3};
pub use belt_route::{RouteConfig, RouteStrategy};
pub use nalgebra::UnitQuaternion;
