//! Lattice coordinate type.

use nalgebra::{Point3, Vector3};

/// A discrete 3D coordinate identifying one cell of the placement lattice.
///
/// Uses `i32` coordinates to support both positive and negative indices,
/// allowing the lattice origin to be placed anywhere in world space.
/// Equality is exact component-wise equality.
///
/// # Example
///
/// ```
/// use belt_grid::GridPoint;
///
/// let cell = GridPoint::new(1, 2, 3);
/// assert_eq!(cell.x, 1);
/// assert_eq!(cell.y, 2);
/// assert_eq!(cell.z, 3);
///
/// // Supports negative coordinates
/// let neg = GridPoint::new(-5, -10, -15);
/// assert_eq!(neg.x, -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// X coordinate (east axis).
    pub x: i32,
    /// Y coordinate (north axis).
    pub y: i32,
    /// Z coordinate (height axis).
    pub z: i32,
}

impl GridPoint {
    /// Creates a new lattice coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let cell = GridPoint::new(10, 20, 30);
    /// assert_eq!(cell.x, 10);
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// assert_eq!(GridPoint::origin(), GridPoint::new(0, 0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let cell = GridPoint::new(1, 2, 3);
    /// assert_eq!(cell.as_tuple(), (1, 2, 3));
    /// ```
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let cell = GridPoint::new(1, 2, 3);
    /// assert_eq!(cell.as_array(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to a floating-point world point.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    /// use nalgebra::Point3;
    ///
    /// let cell = GridPoint::new(1, 2, 3);
    /// assert_eq!(cell.to_point(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Converts to a floating-point vector.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    /// use nalgebra::Vector3;
    ///
    /// let cell = GridPoint::new(1, 2, 3);
    /// assert_eq!(cell.to_vector(), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Computes the Manhattan distance to another coordinate.
    ///
    /// The Manhattan distance is the sum of the absolute differences of the
    /// coordinates, which for conveyor routes equals the number of unit
    /// steps a staircase path between the two cells takes.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let a = GridPoint::new(0, 0, 0);
    /// let b = GridPoint::new(3, 0, 2);
    /// assert_eq!(a.manhattan_distance(b), 5);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_add(dy).saturating_add(dz)
    }

    /// Returns true if the other coordinate is exactly one unit step away
    /// along exactly one axis.
    ///
    /// Consecutive points of a resolved conveyor route are always unit
    /// steps of each other.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let cell = GridPoint::new(1, 0, 0);
    /// assert!(cell.is_unit_step(GridPoint::new(2, 0, 0)));
    /// assert!(cell.is_unit_step(GridPoint::new(1, 0, -1)));
    /// assert!(!cell.is_unit_step(GridPoint::new(2, 1, 0)));
    /// assert!(!cell.is_unit_step(cell));
    /// ```
    #[must_use]
    pub const fn is_unit_step(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the per-axis sign of this coordinate.
    ///
    /// Normalizes a step delta to a unit direction, which is how sweep
    /// directions are derived from endpoint differences.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_grid::GridPoint;
    ///
    /// let delta = GridPoint::new(7, 0, -3);
    /// assert_eq!(delta.signum(), GridPoint::new(1, 0, -1));
    /// ```
    #[must_use]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }
}

impl From<(i32, i32, i32)> for GridPoint {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for GridPoint {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<GridPoint> for (i32, i32, i32) {
    fn from(point: GridPoint) -> Self {
        point.as_tuple()
    }
}

impl From<GridPoint> for [i32; 3] {
    fn from(point: GridPoint) -> Self {
        point.as_array()
    }
}

impl std::ops::Add for GridPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for GridPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl std::ops::Neg for GridPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(
            self.x.wrapping_neg(),
            self.y.wrapping_neg(),
            self.z.wrapping_neg(),
        )
    }
}
