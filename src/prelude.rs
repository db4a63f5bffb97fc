//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadrange::prelude::*;
//! ```

pub use crate::baseline::SortedByX;
pub use crate::{IndexConfig, IndexError, Point, Quadrant, Region, Routing, SpatialIndex};
