//! Triangle mesh types and conveyor segment prefabs.
//!
//! This crate provides the geometry layer for conveyor line assembly:
//!
//! - [`MeshVertex`] - A point in 3D space with an optional normal
//! - [`TriMesh`] - A triangle mesh with indexed vertices
//! - [`SegmentProfile`] - Cross-section parameters for generated prefabs
//! - [`straight_segment`] / [`corner_segment`] - Unit-cell prefab generators
//! - [`combine_meshes`] - Flatten many placed meshes into one
//!
//! # Engine Independence
//!
//! This crate has no game-engine dependencies. The combined meshes it
//! produces convert directly to any engine's vertex/index buffers.
//!
//! # Units
//!
//! All coordinates are `f64`. One lattice cell is one unit on each axis;
//! prefabs are authored to fit a unit cell and scaled at placement time.
//!
//! # Coordinate System
//!
//! Uses a **right-handed, z-up coordinate system**:
//! - X: east
//! - Y: north
//! - Z: up
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use belt_mesh::{straight_segment, SegmentProfile, Vector3};
//!
//! // Generate the straight prefab and stamp two copies end to end
//! let prefab = straight_segment(SegmentProfile::new());
//!
//! let mut east = prefab.clone();
//! east.translate(Vector3::new(1.0, 0.0, 0.0));
//!
//! let mut combined = prefab;
//! combined.merge(&east);
//!
//! assert_eq!(combined.face_count(), 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod segment;
mod vertex;

// Re-export core types
pub use mesh::{combine_meshes, TriMesh};
pub use segment::{corner_segment, straight_segment, SegmentProfile};
pub use vertex::MeshVertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
