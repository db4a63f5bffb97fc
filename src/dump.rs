//! Flat text dump of a tree for external inspection.
//!
//! Layout, depth-first pre-order with children in NW, NE, SW, SE order:
//!
//! ```text
//! <x_min> <x_max> <y_min> <y_max> <point_count>
//! <x1> <y1>
//! <x2> <y2>
//! ...
//! ```
//!
//! No marker separates leaves from internal nodes; a reader has to know the tree
//! shape (or track capacity and depth) to rebuild it. Coordinates use the shortest
//! `f64` representation that parses back to the same value.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::{IndexError, SpatialIndex};

/// Writes the dump of `index` to `out`.
///
/// # Errors
/// Propagates any error from `out`.
///
/// # Examples
/// ```
/// use quadrange::{Point, Region, SpatialIndex, dump::write_dump};
///
/// let mut index = SpatialIndex::new(Region::square(10.0)).unwrap();
/// assert!(index.insert(Point::new(1.5, 2.0)));
///
/// let mut buf = Vec::new();
/// write_dump(&index, &mut buf).unwrap();
/// assert_eq!(String::from_utf8(buf).unwrap(), "0 10 0 10 1\n1.5 2\n");
/// ```
pub fn write_dump<W: Write>(index: &SpatialIndex, mut out: W) -> std::io::Result<()> {
    for (_, node) in index.nodes() {
        let r = node.region();
        writeln!(
            out,
            "{} {} {} {} {}",
            r.x_min,
            r.x_max,
            r.y_min,
            r.y_max,
            node.points().len()
        )?;
        for p in node.points() {
            writeln!(out, "{} {}", p.x, p.y)?;
        }
    }
    out.flush()
}

impl SpatialIndex {
    /// Writes the dump to a file at `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`IndexError::Io`] if the file cannot be created or written.
    pub fn save_dump<P: AsRef<Path>>(&self, path: P) -> Result<(), IndexError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        write_dump(self, BufWriter::new(file))?;
        info!(path = %path.display(), nodes = self.node_count(), "tree dump written");
        Ok(())
    }
}
