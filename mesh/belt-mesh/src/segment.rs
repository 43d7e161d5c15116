//! Conveyor segment prefab generation.
//!
//! Stand-ins for artist-authored segment meshes: extruded slabs sized to
//! one unit cell. Both prefabs are authored centered on the cell origin
//! facing east, so a rotation index of zero places them unrotated.

use nalgebra::Point3;

use crate::mesh::TriMesh;
use crate::vertex::MeshVertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cross-section parameters for generated segment prefabs.
///
/// The belt runs the full unit length of its cell; `width` is its
/// horizontal extent across the cell and `thickness` its height above
/// the cell floor.
///
/// # Example
///
/// ```
/// use belt_mesh::SegmentProfile;
///
/// let profile = SegmentProfile::new().with_width(0.6).with_thickness(0.1);
/// assert!(profile.validate().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentProfile {
    width: f64,
    thickness: f64,
}

impl SegmentProfile {
    /// Create a profile with default dimensions (width 0.8, thickness 0.2).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 0.8,
            thickness: 0.2,
        }
    }

    /// Set the belt width across the cell.
    ///
    /// Must be positive and at most 1.0 so the belt fits its cell.
    #[inline]
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the belt thickness above the cell floor.
    #[inline]
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Belt width across the cell.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Belt thickness above the cell floor.
    #[inline]
    #[must_use]
    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Validate the profile, returning a list of issues (empty if valid).
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.width.is_finite() || self.width <= 0.0 {
            issues.push(format!("width must be positive, got {}", self.width));
        } else if self.width > 1.0 {
            issues.push(format!(
                "width must not exceed the unit cell, got {}",
                self.width
            ));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            issues.push(format!(
                "thickness must be positive, got {}",
                self.thickness
            ));
        }

        issues
    }
}

impl Default for SegmentProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the straight segment prefab.
///
/// A slab spanning the cell west to east: x in `[-1/2, 1/2]`, y in
/// `[-width/2, width/2]`, z in `[0, thickness]`.
///
/// # Example
///
/// ```
/// use belt_mesh::{straight_segment, SegmentProfile};
///
/// let mesh = straight_segment(SegmentProfile::new());
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
#[must_use]
pub fn straight_segment(profile: SegmentProfile) -> TriMesh {
    let half_width = profile.width / 2.0;
    box_mesh(
        Point3::new(-0.5, -half_width, 0.0),
        Point3::new(0.5, half_width, profile.thickness),
    )
}

/// Generate the corner segment prefab.
///
/// An L-shaped slab joining the west cell edge to the north cell edge:
/// one arm runs in from the west, the other out to the north, meeting
/// in a square elbow at the cell center. Rotation indices orient this
/// prefab for the other three turn geometries.
#[must_use]
pub fn corner_segment(profile: SegmentProfile) -> TriMesh {
    let half_width = profile.width / 2.0;

    // West arm, including the elbow square
    let mut mesh = box_mesh(
        Point3::new(-0.5, -half_width, 0.0),
        Point3::new(half_width, half_width, profile.thickness),
    );

    // North arm, abutting the elbow without overlap
    let north_arm = box_mesh(
        Point3::new(-half_width, half_width, 0.0),
        Point3::new(half_width, 0.5, profile.thickness),
    );
    mesh.merge(&north_arm);

    mesh
}

/// Axis-aligned box between two corners, CCW winding viewed from outside.
fn box_mesh(min: Point3<f64>, max: Point3<f64>) -> TriMesh {
    let mut mesh = TriMesh::with_capacity(8, 12);

    // 8 corners, bottom ring then top ring
    mesh.vertices.push(MeshVertex::from_coords(min.x, min.y, min.z)); // 0
    mesh.vertices.push(MeshVertex::from_coords(max.x, min.y, min.z)); // 1
    mesh.vertices.push(MeshVertex::from_coords(max.x, max.y, min.z)); // 2
    mesh.vertices.push(MeshVertex::from_coords(min.x, max.y, min.z)); // 3
    mesh.vertices.push(MeshVertex::from_coords(min.x, min.y, max.z)); // 4
    mesh.vertices.push(MeshVertex::from_coords(max.x, min.y, max.z)); // 5
    mesh.vertices.push(MeshVertex::from_coords(max.x, max.y, max.z)); // 6
    mesh.vertices.push(MeshVertex::from_coords(min.x, max.y, max.z)); // 7

    // 12 triangles (2 per face), CCW winding when viewed from outside

    // Underside - normal points -Z
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);

    // Top - normal points +Z
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);

    // South side - normal points -Y
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);

    // North side - normal points +Y
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);

    // West side - normal points -X
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);

    // East side - normal points +X
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}
