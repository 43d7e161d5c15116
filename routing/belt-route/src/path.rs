//! Route path representation.
//!
//! This module defines [`RoutePath`], the ordered sequence of lattice
//! points a planned route visits.
//!
//! # Example
//!
//! ```
//! use belt_route::RoutePath;
//! use belt_grid::GridPoint;
//!
//! let path = RoutePath::new(vec![
//!     GridPoint::new(0, 0, 0),
//!     GridPoint::new(1, 0, 0),
//!     GridPoint::new(2, 0, 0),
//! ]);
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.manhattan_length(), 2);
//! ```

use belt_grid::GridPoint;

/// An ordered, duplicate-free sequence of lattice points connecting two
/// endpoints via unit steps.
///
/// Paths produced by the planner satisfy: the first point is the route
/// start, the last is the route end, no point repeats, and consecutive
/// points are unit steps of each other. The type itself does not enforce
/// those invariants, so hand-built paths can hold arbitrary sequences.
///
/// # Example
///
/// ```
/// use belt_route::RoutePath;
/// use belt_grid::GridPoint;
///
/// let path = RoutePath::from_single(GridPoint::origin());
/// assert_eq!(path.len(), 1);
/// assert_eq!(path.first(), path.last());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    /// Ordered sequence of lattice points.
    points: Vec<GridPoint>,
}

impl RoutePath {
    /// Creates a new route path from a sequence of points.
    #[must_use]
    pub const fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    /// Creates an empty route path.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RoutePath;
    ///
    /// let path = RoutePath::empty();
    /// assert!(path.is_empty());
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a path from a single point.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RoutePath;
    /// use belt_grid::GridPoint;
    ///
    /// let path = RoutePath::from_single(GridPoint::new(2, 0, 1));
    /// assert_eq!(path.len(), 1);
    /// ```
    #[must_use]
    pub fn from_single(point: GridPoint) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Returns the number of points in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&GridPoint> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GridPoint> {
        self.points.last()
    }

    /// Returns the point at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridPoint> {
        self.points.get(index)
    }

    /// Returns `true` if the path visits the given point.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        self.points.contains(&point)
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> {
        self.points.iter()
    }

    /// Returns an iterator over consecutive point pairs (segments).
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RoutePath;
    /// use belt_grid::GridPoint;
    ///
    /// let path = RoutePath::new(vec![
    ///     GridPoint::new(0, 0, 0),
    ///     GridPoint::new(1, 0, 0),
    ///     GridPoint::new(2, 0, 0),
    /// ]);
    /// assert_eq!(path.segments().count(), 2);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = (&GridPoint, &GridPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns the total number of unit steps along the path.
    ///
    /// For planner output this equals `len() - 1`; for arbitrary point
    /// sequences it sums each segment's Manhattan distance.
    #[must_use]
    pub fn manhattan_length(&self) -> u32 {
        self.segments()
            .map(|(a, b)| a.manhattan_distance(*b))
            .sum()
    }

    /// Appends a point unless the path already visits it.
    ///
    /// This is the splice mechanism the planner's axis sweeps rely on:
    /// each sweep re-emits the pivot cell the previous sweep ended on, and
    /// the duplicate is dropped here.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_route::RoutePath;
    /// use belt_grid::GridPoint;
    ///
    /// let mut path = RoutePath::empty();
    /// path.push_unique(GridPoint::origin());
    /// path.push_unique(GridPoint::origin());
    /// assert_eq!(path.len(), 1);
    /// ```
    pub fn push_unique(&mut self, point: GridPoint) {
        if !self.points.contains(&point) {
            self.points.push(point);
        }
    }
}

impl FromIterator<GridPoint> for RoutePath {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for RoutePath {
    type Item = GridPoint;
    type IntoIter = std::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoutePath {
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn straight_path() -> RoutePath {
        RoutePath::new(vec![
            GridPoint::new(0, 0, 0),
            GridPoint::new(1, 0, 0),
            GridPoint::new(2, 0, 0),
        ])
    }

    #[test]
    fn test_empty() {
        let path = RoutePath::empty();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
        assert_eq!(path.manhattan_length(), 0);
    }

    #[test]
    fn test_from_single() {
        let path = RoutePath::from_single(GridPoint::new(1, 2, 3));
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), Some(&GridPoint::new(1, 2, 3)));
        assert_eq!(path.first(), path.last());
        assert_eq!(path.manhattan_length(), 0);
    }

    #[test]
    fn test_first_and_last() {
        let path = straight_path();
        assert_eq!(path.first(), Some(&GridPoint::new(0, 0, 0)));
        assert_eq!(path.last(), Some(&GridPoint::new(2, 0, 0)));
    }

    #[test]
    fn test_get() {
        let path = straight_path();
        assert_eq!(path.get(1), Some(&GridPoint::new(1, 0, 0)));
        assert_eq!(path.get(3), None);
    }

    #[test]
    fn test_contains() {
        let path = straight_path();
        assert!(path.contains(GridPoint::new(1, 0, 0)));
        assert!(!path.contains(GridPoint::new(0, 1, 0)));
    }

    #[test]
    fn test_segments() {
        let path = straight_path();
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], (&GridPoint::new(0, 0, 0), &GridPoint::new(1, 0, 0)));
    }

    #[test]
    fn test_manhattan_length() {
        assert_eq!(straight_path().manhattan_length(), 2);
    }

    #[test]
    fn test_push_unique_skips_duplicates() {
        let mut path = straight_path();
        path.push_unique(GridPoint::new(1, 0, 0));
        assert_eq!(path.len(), 3);
        path.push_unique(GridPoint::new(2, 1, 0));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_from_iterator() {
        let path: RoutePath = (0..3).map(|x| GridPoint::new(x, 0, 0)).collect();
        assert_eq!(path, straight_path());
    }

    #[test]
    fn test_into_iterator() {
        let collected: Vec<GridPoint> = straight_path().into_iter().collect();
        assert_eq!(collected.len(), 3);
    }

    #[test]
    fn test_ref_into_iterator() {
        let path = straight_path();
        let mut count = 0;
        for _point in &path {
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
