//! Reference strategies the quad-tree is measured against.
//!
//! - [`linear_scan`]: tests every point against the window.
//! - [`SortedByX`]: a copy sorted by x. It binary-searches the x range of the window
//!   and filters that slice on y ("binary+Y-filter").
//!
//! Both use the same inclusive test as the tree.

use crate::{Point, Region};

/// Appends every point of `points` inside `window` to `results` (not cleared first)
pub fn linear_scan(points: &[Point], window: &Region, results: &mut Vec<Point>) {
    results.extend(points.iter().copied().filter(|&p| window.contains(p)));
}

/// Number of points of `points` inside `window`
pub fn linear_count(points: &[Point], window: &Region) -> usize {
    points.iter().filter(|&&p| window.contains(p)).count()
}

/// Points kept sorted by x for range queries by binary search.
///
/// # Examples
/// ```
/// use quadrange::{Point, Region, baseline::SortedByX};
///
/// let sorted = SortedByX::new(vec![
///     Point::new(5.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(3.0, 9.0),
/// ]);
/// assert_eq!(sorted.count(&Region::new(1.0, 3.0, 0.0, 5.0)), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SortedByX {
    points: Vec<Point>,
}

impl SortedByX {
    /// Takes ownership of `points` and sorts them by x.
    ///
    /// Points with a NaN x are dropped; no window can contain them.
    pub fn new(mut points: Vec<Point>) -> Self {
        points.retain(|p| !p.x.is_nan());
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { points }
    }

    /// Sorted copy of a borrowed slice
    pub fn from_slice(points: &[Point]) -> Self {
        Self::new(points.to_vec())
    }

    /// The points in x order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Slice whose x lies in `[x_min, x_max]`: first x not below `x_min` up to the
    /// first x above `x_max`
    fn x_range(&self, window: &Region) -> &[Point] {
        if !window.is_valid() {
            return &[];
        }
        let low = self.points.partition_point(|p| p.x < window.x_min);
        let high = self.points.partition_point(|p| p.x <= window.x_max);
        &self.points[low..high.max(low)]
    }

    /// Appends every point inside `window` to `results` (not cleared first)
    pub fn query(&self, window: &Region, results: &mut Vec<Point>) {
        results.extend(
            self.x_range(window)
                .iter()
                .copied()
                .filter(|p| p.y >= window.y_min && p.y <= window.y_max),
        );
    }

    /// Number of points inside `window`
    pub fn count(&self, window: &Region) -> usize {
        self.x_range(window)
            .iter()
            .filter(|p| p.y >= window.y_min && p.y <= window.y_max)
            .count()
    }
}

impl From<Vec<Point>> for SortedByX {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
