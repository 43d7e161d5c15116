//! Mesh vertex type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space with an optional normal.
///
/// The position is stored as a `Point3<f64>` for high precision. The
/// built-in segment prefabs share corner vertices and leave `normal`
/// unset; imported meshes may carry normals, and merging keeps whatever
/// normals the sources had.
///
/// # Example
///
/// ```
/// use belt_mesh::{MeshVertex, Point3};
///
/// // Create a vertex with just position
/// let v1 = MeshVertex::new(Point3::new(1.0, 2.0, 3.0));
///
/// // Create from raw coordinates
/// let v2 = MeshVertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Unit normal vector, if known.
    pub normal: Option<Vector3<f64>>,
}

impl MeshVertex {
    /// Create a new vertex with only position set.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_mesh::{MeshVertex, Point3};
    ///
    /// let v = MeshVertex::new(Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(v.position.x, 1.0);
    /// assert!(v.normal.is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_mesh::MeshVertex;
    ///
    /// let v = MeshVertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with position and normal.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_mesh::{MeshVertex, Point3, Vector3};
    ///
    /// let v = MeshVertex::with_normal(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Vector3::new(0.0, 0.0, 1.0),
    /// );
    /// assert!(v.normal.is_some());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }
}

impl From<Point3<f64>> for MeshVertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for MeshVertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for MeshVertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}
