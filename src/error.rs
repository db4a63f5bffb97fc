//! Error types for index construction and dump I/O.

use thiserror::Error;

use crate::Region;

/// Errors reported by [`SpatialIndex`](crate::SpatialIndex) construction and dump output.
///
/// Inserting a point outside the domain and querying with an empty window are not
/// errors and never produce one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IndexError {
    /// Node capacity must be at least one point
    #[error("invalid node capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// Domain has an inverted range or a non-finite edge
    #[error("invalid domain {0}: ranges must be ordered and finite")]
    InvalidDomain(Region),

    /// Writing the debug dump failed
    #[error("dump I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
