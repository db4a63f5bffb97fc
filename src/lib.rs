//! # quadrange - quad-tree range queries over 2D points
//!
//! A point quad-tree for axis-aligned rectangular range queries, plus the two
//! baselines it is usually measured against: a linear scan and a sorted-by-x scan
//! with y filtering.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadrange::prelude::*;
//!
//! // Domain [0, 1000] x [0, 1000], 50 points per node before a split
//! let mut index = SpatialIndex::new(Region::square(1000.0)).unwrap();
//!
//! index.insert(Point::new(120.0, 250.0));
//! index.insert(Point::new(130.0, 260.0));
//! index.insert(Point::new(900.0, 900.0));
//!
//! // Points outside the domain are dropped, not reported as errors
//! assert!(!index.insert(Point::new(2000.0, 5.0)));
//!
//! // Inclusive window [100, 150] x [240, 300]
//! let found = index.query(&Region::new(100.0, 150.0, 240.0, 300.0));
//! assert_eq!(found.len(), 2);
//! ```
//!
//! ## How It Works
//!
//! Each node covers a fixed rectangle and buffers up to `capacity` points. The
//! insert that meets a full leaf splits the rectangle at its midpoint into four
//! quadrants (NW, NE, SW, SE), and from then on the node forwards new points to its
//! children. A query skips any node whose rectangle misses the window, tests the
//! points buffered at the remaining nodes, and descends.
//!
//! Containment is inclusive on every edge. With the default
//! [`Routing::Broadcast`], a point lying exactly on a split line is stored in every
//! child that touches it. [`Routing::FirstMatch`] stores it once.
//!
//! The tree is single-writer: `insert` takes `&mut self` and `query` takes
//! `&self`, so a built index can be shared across threads for reading.

pub mod baseline;
pub mod compare;
pub mod config;
pub mod dump;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;
pub mod workload;


pub use config::{DEFAULT_CAPACITY, IndexConfig, Routing};
pub use error::IndexError;
pub use geometry::{Point, Quadrant, Region};
pub use quadtree::{SpatialIndex, SpatialNode};
