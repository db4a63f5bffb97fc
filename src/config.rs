//! Per-tree settings.

use crate::IndexError;

/// Node capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 50;

/// How an internal node hands an incoming point to its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Routing {
    /// Offer the point to all four children; each keeps it if its inclusive region
    /// contains it. Points exactly on a split line are stored once per touching child.
    #[default]
    Broadcast,
    /// Give the point to the first child (NW, NE, SW, SE order) whose region contains
    /// it. Every stored point appears exactly once.
    FirstMatch,
}

/// Construction settings for a [`SpatialIndex`](crate::SpatialIndex).
///
/// # Examples
/// ```
/// use quadrange::{IndexConfig, Routing};
///
/// let config = IndexConfig::default()
///     .with_capacity(8)
///     .with_routing(Routing::FirstMatch)
///     .with_max_depth(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Points a leaf holds before it subdivides
    pub capacity: usize,
    /// Child routing policy for internal nodes
    pub routing: Routing,
    /// Depth (root = 0) at which leaves stop subdividing and grow past `capacity`.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            routing: Routing::Broadcast,
            max_depth: None,
        }
    }
}

impl IndexConfig {
    /// Sets the node capacity
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the routing policy
    #[must_use]
    pub const fn with_routing(mut self, routing: Routing) -> Self {
        self.routing = routing;
        self
    }

    /// Caps subdivision depth
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Checks the settings.
    ///
    /// # Errors
    /// Returns [`IndexError::InvalidCapacity`] when `capacity` is zero; such a tree
    /// would subdivide on its first insert and never stop.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.capacity == 0 {
            return Err(IndexError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.capacity, 50);
        assert_eq!(config.routing, Routing::Broadcast);
        assert_eq!(config.max_depth, None);
        assert!(config.validate().is_ok(), "default config must validate");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = IndexConfig::default().with_capacity(0).validate();
        assert!(matches!(err, Err(IndexError::InvalidCapacity(0))), "got {err:?}");
    }
}
