//! Points, rectangular regions and the quadrant split.
//!
//! Every containment check in the crate goes through [`Region::contains`], which is
//! boundary-inclusive on all four edges. A point lying exactly on a split line is
//! therefore inside each region whose edge it touches.

use std::fmt;

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle: `[x_min, x_max] × [y_min, y_max]`.
///
/// Used both for node boundaries and for query windows. Argument order follows the
/// debug dump layout (x range first, then y range).
///
/// A region is valid when `x_min <= x_max` and `y_min <= y_max`. Inverted windows are
/// allowed as query input and simply never match anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Left edge
    pub x_min: f64,
    /// Right edge
    pub x_max: f64,
    /// Bottom edge
    pub y_min: f64,
    /// Top edge
    pub y_max: f64,
}

impl Region {
    /// Creates a region from its x range and y range
    #[inline]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Square region `[0, side] × [0, side]`
    #[inline]
    pub const fn square(side: f64) -> Self {
        Self::new(0.0, side, 0.0, side)
    }

    /// Returns true when both ranges are ordered. NaN edges are never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Returns true when all four edges are finite.
    ///
    /// Query windows may be unbounded; an index domain may not.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Inclusive membership test: `x_min <= x <= x_max && y_min <= y <= y_max`
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Separating-axis overlap test. Touching edges count as overlap.
    ///
    /// An invalid region intersects nothing, including itself.
    ///
    /// # Examples
    /// ```
    /// use quadrange::Region;
    ///
    /// let a = Region::new(0.0, 10.0, 0.0, 10.0);
    /// assert!(a.intersects(&Region::new(10.0, 20.0, 5.0, 6.0)));
    /// assert!(!a.intersects(&Region::new(11.0, 20.0, 5.0, 6.0)));
    /// assert!(!a.intersects(&Region::new(5.0, 4.0, 0.0, 10.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        !(self.x_max < other.x_min
            || self.x_min > other.x_max
            || self.y_max < other.y_min
            || self.y_min > other.y_max)
    }

    /// Width of the region
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the region
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Arithmetic midpoint on both axes.
    ///
    /// Halves each edge before adding so regions near `f64::MAX` do not overflow.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.x_min / 2.0 + self.x_max / 2.0,
            self.y_min / 2.0 + self.y_max / 2.0,
        )
    }

    /// The sub-region covering quadrant `q`, split at the midpoint
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let Point { x: mid_x, y: mid_y } = self.center();
        match q {
            Quadrant::NW => Self::new(self.x_min, mid_x, mid_y, self.y_max),
            Quadrant::NE => Self::new(mid_x, self.x_max, mid_y, self.y_max),
            Quadrant::SW => Self::new(self.x_min, mid_x, self.y_min, mid_y),
            Quadrant::SE => Self::new(mid_x, self.x_max, self.y_min, mid_y),
        }
    }

    /// All four quadrants in [`Quadrant::ALL`] order
    pub fn split(&self) -> [Self; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]x[{}, {}]", self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// One of the four children of a subdivided node.
///
/// The discriminant is the child's slot index; both insertion and query visit
/// children in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[expect(clippy::exhaustive_enums, reason = "a node has exactly four children")]
pub enum Quadrant {
    /// Upper-left
    NW = 0,
    /// Upper-right
    NE = 1,
    /// Lower-left
    SW = 2,
    /// Lower-right
    SE = 3,
}

impl Quadrant {
    /// Traversal order
    pub const ALL: [Self; 4] = [Self::NW, Self::NE, Self::SW, Self::SE];

    /// Slot index into a node's child array
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
