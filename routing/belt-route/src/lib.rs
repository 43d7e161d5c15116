//! Deterministic lattice routing and orientation for conveyor lines.
//!
//! This crate turns a pair of grid cells into a renderable description of
//! the conveyor run between them: an exact cell sequence plus, per cell,
//! the compass orientation and corner flag its segment mesh needs.
//!
//! # Overview
//!
//! The routing domain is organized into a small pipeline:
//!
//! - **Paths**: Ordered, duplicate-free cell sequences ([`RoutePath`])
//! - **Planning**: Two deterministic axis-sweep strategies resolving a
//!   staircase route between endpoints ([`RouteStrategy`], [`plan_route`],
//!   [`plan_both`])
//! - **Orientation**: Compass bucketing of step directions and the yaw
//!   math behind it ([`Cardinal`], [`rotation_for_index`],
//!   [`turn_angle_degrees`])
//! - **Classification**: Per-cell annotation of a planned route with
//!   orientation and corner flags ([`RoutePoint`], [`classify_route`])
//! - **Configuration**: Tunable rotation stepping ([`RouteConfig`])
//!
//! Planning is pure and stateless, so the same calls that resolve a
//! committed connection also drive live previews while a drag gesture is
//! still in progress.
//!
//! # Example
//!
//! ```
//! use belt_grid::GridPoint;
//! use belt_route::{RouteConfig, RouteStrategy, classify_route, plan_route};
//!
//! # fn main() -> Result<(), belt_route::RouteError> {
//! let route = plan_route(
//!     GridPoint::origin(),
//!     GridPoint::new(3, 0, 2),
//!     RouteStrategy::SolutionA,
//! );
//! assert_eq!(route.first(), Some(&GridPoint::origin()));
//! assert_eq!(route.last(), Some(&GridPoint::new(3, 0, 2)));
//!
//! let annotated = classify_route(&route, &RouteConfig::new())?;
//! assert_eq!(annotated.len(), route.len());
//! assert!(annotated[3].is_corner());
//! # Ok(())
//! # }
//! ```
//!
//! # Integration with belt-grid
//!
//! This crate builds on the `belt-grid` foundation, using
//! [`belt_grid::GridPoint`] for cells, step directions, and the lattice
//! arithmetic behind sweep splicing.
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/belt-route/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod cardinal;
pub mod classify;
pub mod config;
pub mod error;
pub mod path;
pub mod planner;

// Re-export main types at crate root for convenience
pub use cardinal::{Cardinal, rotation_for_index, turn_angle_degrees};
pub use classify::{RoutePoint, classify_route};
pub use config::RouteConfig;
pub use error::RouteError;
pub use path::RoutePath;
pub use planner::{RouteStrategy, plan_both, plan_route};
