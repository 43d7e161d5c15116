//! Grid-space foundation for the beltworks conveyor engine.
//!
//! This crate provides [`GridPoint`], the integer lattice coordinate used by
//! every other beltworks crate: route planning, orientation classification,
//! and segment-mesh placement all address cells through it.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used
//! in CLI tools, servers, WASM, and any game engine's host layer.
//!
//! # Coordinate System
//!
//! Beltworks uses a **right-handed coordinate system**:
//! - X: east (left/right)
//! - Y: north (front/back)
//! - Z: height (up/down)
//!
//! Grid coordinates are discrete `i32` values identifying unit cells. World
//! coordinates are continuous `f64` values; [`GridPoint::to_point`] and
//! [`GridPoint::to_vector`] bridge the two.
//!
//! # Example
//!
//! ```
//! use belt_grid::GridPoint;
//!
//! let start = GridPoint::new(0, 0, 0);
//! let end = GridPoint::new(3, 0, 2);
//!
//! assert_eq!(start.manhattan_distance(end), 5);
//! assert_eq!(end - start, GridPoint::new(3, 0, 2));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for [`GridPoint`]

#![doc(html_root_url = "https://docs.rs/belt-grid/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod point;

pub use point::GridPoint;
