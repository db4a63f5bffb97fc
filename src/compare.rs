//! Timed three-way comparison of range-query strategies.
//!
//! [`Comparison`] borrows one point set in three shapes (raw, quad-tree, sorted by x)
//! and runs the same window through each, recording result counts and wall time.

use std::fmt;
use std::time::{Duration, Instant};

use crate::baseline::{self, SortedByX};
use crate::{Point, Region, SpatialIndex};

/// A range-query strategy under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Strategy {
    /// Test every point
    Linear,
    /// Quad-tree traversal with bounding-box pruning
    QuadTree,
    /// Binary search on x, then filter on y
    BinaryYFilter,
}

impl Strategy {
    /// Report order
    pub const ALL: [Self; 3] = [Self::Linear, Self::QuadTree, Self::BinaryYFilter];

    /// Label used in reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::QuadTree => "QuadTree",
            Self::BinaryYFilter => "Binary+Y-Filter",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one strategy on one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Strategy measured
    pub strategy: Strategy,
    /// Matching points found
    pub count: usize,
    /// Wall time of the query
    pub elapsed: Duration,
}

/// All three measurements for one window.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryReport {
    /// Query window
    pub window: Region,
    /// One entry per strategy, in [`Strategy::ALL`] order
    pub measurements: [Measurement; 3],
}

impl QueryReport {
    /// Measurement for `strategy`
    pub fn get(&self, strategy: Strategy) -> &Measurement {
        // Stored in Strategy::ALL order.
        &self.measurements[strategy as usize]
    }

    /// Whether all strategies found the same number of points.
    ///
    /// Under broadcast routing the tree can report extra copies of points lying
    /// exactly on a split line, which shows up here as a disagreement.
    pub fn agrees(&self) -> bool {
        let first = self.measurements[0].count;
        self.measurements.iter().all(|m| m.count == first)
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.measurements {
            writeln!(f, "{}: {}, Time = {} µs", m.strategy, m.count, m.elapsed.as_micros())?;
        }
        Ok(())
    }
}

/// The three shapes of one point set.
#[derive(Debug)]
pub struct Comparison<'a> {
    points: &'a [Point],
    index: &'a SpatialIndex,
    sorted: &'a SortedByX,
}

impl<'a> Comparison<'a> {
    /// Bundles the raw points, a tree built from them and a sorted copy of them
    pub fn new(points: &'a [Point], index: &'a SpatialIndex, sorted: &'a SortedByX) -> Self {
        Self { points, index, sorted }
    }

    /// Runs `strategy` once on `window`
    pub fn measure(&self, strategy: Strategy, window: &Region) -> Measurement {
        let start = Instant::now();
        let count = match strategy {
            Strategy::Linear => baseline::linear_count(self.points, window),
            Strategy::QuadTree => self.index.query(window).len(),
            Strategy::BinaryYFilter => self.sorted.count(window),
        };
        Measurement {
            strategy,
            count,
            elapsed: start.elapsed(),
        }
    }

    /// Runs every strategy on `window`
    pub fn run(&self, window: &Region) -> QueryReport {
        QueryReport {
            window: *window,
            measurements: Strategy::ALL.map(|s| self.measure(s, window)),
        }
    }

    /// Runs every strategy on each window
    pub fn run_all(&self, windows: &[Region]) -> Vec<QueryReport> {
        windows.iter().map(|w| self.run(w)).collect()
    }
}
