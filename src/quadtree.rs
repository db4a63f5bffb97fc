//! Point quad-tree with lazy subdivision.
//!
//! Each node owns a fixed region and buffers up to `capacity` points. The insert that
//! finds a full leaf splits the region at its midpoint into four children and every
//! later insert into that node flows to the children; the points already buffered
//! stay where they are. Subdivision is permanent.
//!
//! Splits are always at the arithmetic midpoint, never at a data median, so inputs
//! clustered near one edge produce deep, lopsided branches. Queries then degrade
//! toward a linear scan for that branch. [`IndexConfig::max_depth`] bounds the depth
//! when that matters (for example many identical points).

use tracing::{debug, trace};

use crate::{IndexConfig, IndexError, Point, Quadrant, Region, Routing};

/// One node of the quad-tree.
///
/// A node is a leaf until its buffer overflows, after which it owns exactly four
/// children indexed by [`Quadrant`]. The children's regions tile the node's region and
/// overlap only along the split lines.
#[derive(Clone, Debug)]
pub struct SpatialNode {
    /// Fixed at creation
    region: Region,
    /// Points stored directly at this node, in insertion order
    points: Vec<Point>,
    /// Inherited from the parent
    capacity: usize,
    /// Present once the node has subdivided
    children: Option<Box<[SpatialNode; 4]>>,
}

impl SpatialNode {
    pub(crate) fn new(region: Region, capacity: usize) -> Self {
        Self {
            region,
            points: Vec::new(),
            capacity,
            children: None,
        }
    }

    /// Region covered by this node
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Points stored directly at this node (not in its children)
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Buffer size before subdivision
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the node has subdivided
    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// The four children in [`Quadrant::ALL`] order, if subdivided
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Child covering quadrant `q`, if subdivided
    #[inline]
    pub fn child(&self, q: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[q.index()])
    }

    /// Stores `p` in this subtree. Returns the number of copies stored, which is zero
    /// when `p` lies outside the region and can exceed one under
    /// [`Routing::Broadcast`] for points on a split line.
    pub(crate) fn insert(&mut self, p: Point, depth: usize, config: &IndexConfig) -> usize {
        if !self.region.contains(p) {
            return 0;
        }

        if self.children.is_none() {
            let at_depth_limit = config.max_depth.is_some_and(|max| depth >= max);
            if self.points.len() < self.capacity || at_depth_limit {
                self.points.push(p);
                return 1;
            }
        }

        let region = self.region;
        let capacity = self.capacity;
        let children = self.children.get_or_insert_with(|| {
            trace!(depth, %region, "subdividing node");
            Box::new(region.split().map(|r| Self::new(r, capacity)))
        });

        match config.routing {
            Routing::Broadcast => children
                .iter_mut()
                .map(|child| child.insert(p, depth + 1, config))
                .sum(),
            Routing::FirstMatch => children
                .iter_mut()
                .find(|child| child.region.contains(p))
                .map_or(0, |child| child.insert(p, depth + 1, config)),
        }
    }

    /// Appends every point of this subtree that lies inside `window` to `out`.
    ///
    /// Subtrees whose region does not intersect the window are skipped without
    /// looking at their points. A node's own points are emitted before its children's
    /// and children are visited in NW, NE, SW, SE order.
    pub fn query(&self, window: &Region, out: &mut Vec<Point>) {
        if !self.region.intersects(window) {
            return;
        }

        // The window may cover this node only partially.
        out.extend(self.points.iter().copied().filter(|&p| window.contains(p)));

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(window, out);
            }
        }
    }
}

/// Depth-first pre-order walk over a subtree, yielding `(depth, node)`.
///
/// Created by [`SpatialIndex::nodes`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<(usize, &'a SpatialNode)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (usize, &'a SpatialNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Some(children) = node.children() {
            // Reversed so NW is popped first.
            self.stack.extend(children.iter().rev().map(|c| (depth + 1, c)));
        }
        Some((depth, node))
    }
}

/// Quad-tree spatial index over a fixed domain.
///
/// Points are inserted one at a time; points outside the domain are dropped.
/// Queries take an axis-aligned window and return every stored point inside it,
/// edges included.
///
/// # Examples
/// ```
/// use quadrange::{Point, Region, SpatialIndex};
///
/// let mut index = SpatialIndex::with_capacity(Region::square(100.0), 4).unwrap();
/// for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
///     assert!(index.insert(Point::new(v, v)));
/// }
/// assert!(index.root().is_divided());
///
/// let mut found = index.query(&Region::new(0.0, 25.0, 0.0, 25.0));
/// found.sort_by(|a, b| a.x.total_cmp(&b.x));
/// assert_eq!(found, vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    root: SpatialNode,
    config: IndexConfig,
    /// Insert calls that landed inside the domain
    accepted: usize,
    /// Insert calls dropped as out of domain
    rejected: usize,
    /// Stored point entries across all nodes, boundary copies included
    stored: usize,
}

impl SpatialIndex {
    /// Creates an index over `domain` with the default node capacity of 50.
    ///
    /// # Errors
    /// Returns [`IndexError::InvalidDomain`] if `domain` is inverted or has a NaN or
    /// infinite edge.
    pub fn new(domain: Region) -> Result<Self, IndexError> {
        Self::with_config(domain, IndexConfig::default())
    }

    /// Creates an index over `domain` with the given node capacity.
    ///
    /// # Errors
    /// Returns [`IndexError::InvalidCapacity`] for a zero capacity and
    /// [`IndexError::InvalidDomain`] for an invalid domain.
    pub fn with_capacity(domain: Region, capacity: usize) -> Result<Self, IndexError> {
        Self::with_config(domain, IndexConfig::default().with_capacity(capacity))
    }

    /// Creates an index over `domain` with explicit settings.
    ///
    /// # Errors
    /// Same as [`SpatialIndex::with_capacity`].
    pub fn with_config(domain: Region, config: IndexConfig) -> Result<Self, IndexError> {
        config.validate()?;
        if !domain.is_valid() || !domain.is_finite() {
            return Err(IndexError::InvalidDomain(domain));
        }
        debug!(%domain, capacity = config.capacity, routing = ?config.routing, "creating spatial index");
        Ok(Self {
            root: SpatialNode::new(domain, config.capacity),
            config,
            accepted: 0,
            rejected: 0,
            stored: 0,
        })
    }

    /// Inserts a point.
    ///
    /// Returns `false` and leaves the tree untouched when `p` lies outside the
    /// domain. That is not an error; [`SpatialIndex::rejected`] counts such calls.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.root.region.contains(p) {
            trace!(x = p.x, y = p.y, "point outside domain dropped");
            self.rejected += 1;
            return false;
        }
        self.stored += self.root.insert(p, 0, &self.config);
        self.accepted += 1;
        true
    }

    /// Inserts every point from `points`, returning how many landed in the domain
    pub fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().filter(|&p| self.insert(p)).count()
    }

    /// Returns every stored point inside `window` (inclusive on all edges).
    ///
    /// Ordering is unspecified. An inverted window yields an empty result.
    pub fn query(&self, window: &Region) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_into(window, &mut found);
        found
    }

    /// Like [`SpatialIndex::query`] but appends to `out` (not cleared first)
    pub fn query_into(&self, window: &Region, out: &mut Vec<Point>) {
        self.root.query(window, out);
    }

    /// Domain covered by the root
    #[inline]
    pub fn domain(&self) -> &Region {
        self.root.region()
    }

    /// Per-node capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Construction settings
    #[inline]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Root node
    #[inline]
    pub fn root(&self) -> &SpatialNode {
        &self.root
    }

    /// Number of insert calls that landed inside the domain
    #[inline]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of insert calls dropped as out of domain
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of stored point entries.
    ///
    /// Equals [`SpatialIndex::accepted`] under [`Routing::FirstMatch`]; under
    /// [`Routing::Broadcast`] it also counts the extra copies of points that sit on a
    /// split line.
    #[inline]
    pub fn stored(&self) -> usize {
        self.stored
    }

    /// Whether nothing has been stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }

    /// Pre-order walk over all nodes, yielding `(depth, node)` with the root at depth 0
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![(0, &self.root)],
        }
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Depth of the deepest node (0 for an undivided root)
    pub fn depth(&self) -> usize {
        self.nodes().map(|(depth, _)| depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(capacity: usize) -> SpatialIndex {
        SpatialIndex::with_capacity(Region::square(100.0), capacity).unwrap()
    }

    #[test]
    fn test_insert_outside_domain() {
        let mut tree = index(4);
        assert!(!tree.insert(Point::new(150.0, 10.0)), "outside x");
        assert!(!tree.insert(Point::new(10.0, -0.5)), "outside y");
        assert!(!tree.insert(Point::new(f64::NAN, 1.0)), "NaN");
        assert_eq!(tree.stored(), 0);
        assert_eq!(tree.accepted(), 0);
        assert_eq!(tree.rejected(), 3);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_leaf_holds_exactly_capacity() {
        let mut tree = index(3);
        for i in 0..3_u32 {
            assert!(tree.insert(Point::new(10.0 + f64::from(i), 10.0)));
        }
        assert!(!tree.root().is_divided(), "capacity points must not split the node");
        assert_eq!(tree.root().points().len(), 3);
    }

    #[test]
    fn test_overflow_subdivides_once() {
        let mut tree = index(3);
        for i in 0..4_u32 {
            assert!(tree.insert(Point::new(10.0 + f64::from(i), 10.0)));
        }
        let root = tree.root();
        assert!(root.is_divided());
        assert_eq!(root.points().len(), 3, "buffered points stay at the parent");
        assert_eq!(tree.node_count(), 5);

        let sw = root.child(Quadrant::SW).unwrap();
        assert_eq!(sw.points(), &[Point::new(13.0, 10.0)]);
        assert!(!sw.is_divided());
    }

    #[test]
    fn test_children_inherit_capacity() {
        let mut tree = index(2);
        for i in 0..3_u32 {
            assert!(tree.insert(Point::new(5.0 + f64::from(i), 5.0)));
        }
        for child in tree.root().children().unwrap() {
            assert_eq!(child.capacity(), 2);
        }
    }

    #[test]
    fn test_broadcast_duplicates_split_line_point() {
        let mut tree = index(1);
        assert!(tree.insert(Point::new(10.0, 10.0)));
        // Lands on the root's cross point (50, 50): every child accepts it.
        assert!(tree.insert(Point::new(50.0, 50.0)));
        assert_eq!(tree.accepted(), 2);
        assert_eq!(tree.stored(), 5);
        assert_eq!(tree.query(&Region::new(49.0, 51.0, 49.0, 51.0)).len(), 4);
    }

    #[test]
    fn test_first_match_stores_split_line_point_once() {
        let config = IndexConfig::default()
            .with_capacity(1)
            .with_routing(Routing::FirstMatch);
        let mut tree = SpatialIndex::with_config(Region::square(100.0), config).unwrap();
        assert!(tree.insert(Point::new(10.0, 10.0)));
        assert!(tree.insert(Point::new(50.0, 50.0)));
        assert_eq!(tree.stored(), 2);
        let nw = tree.root().child(Quadrant::NW).unwrap();
        assert_eq!(nw.points(), &[Point::new(50.0, 50.0)], "first match is NW");
    }

    #[test]
    fn test_max_depth_caps_subdivision() {
        let config = IndexConfig::default().with_capacity(2).with_max_depth(3);
        let mut tree = SpatialIndex::with_config(Region::square(100.0), config).unwrap();
        for _ in 0..100 {
            assert!(tree.insert(Point::new(1.0, 1.0)));
        }
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.query(&Region::square(100.0)).len(), 100);
    }

    #[test]
    fn test_query_skips_disjoint_window() {
        let mut tree = index(4);
        assert_eq!(tree.insert_all((0..10_u32).map(|i| Point::new(f64::from(i), 1.0))), 10);
        assert!(tree.query(&Region::new(200.0, 300.0, 0.0, 100.0)).is_empty());
        assert!(tree.query(&Region::new(9.0, 1.0, 0.0, 100.0)).is_empty(), "inverted");
    }

    #[test]
    fn test_query_into_appends() {
        let mut tree = index(4);
        assert!(tree.insert(Point::new(1.0, 1.0)));
        let mut out = vec![Point::new(-1.0, -1.0)];
        tree.query_into(&Region::square(10.0), &mut out);
        assert_eq!(out, vec![Point::new(-1.0, -1.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_query_order_parent_then_children() {
        let mut tree = index(1);
        assert!(tree.insert(Point::new(90.0, 90.0)));
        assert!(tree.insert(Point::new(10.0, 10.0)));
        assert!(tree.insert(Point::new(10.0, 90.0)));
        let found = tree.query(&Region::square(100.0));
        assert_eq!(
            found,
            vec![Point::new(90.0, 90.0), Point::new(10.0, 90.0), Point::new(10.0, 10.0)],
            "root first, then NW before SW"
        );
    }

    #[test]
    fn test_nodes_preorder() {
        let mut tree = index(1);
        assert!(tree.insert(Point::new(10.0, 10.0)));
        assert!(tree.insert(Point::new(20.0, 20.0)));
        let regions: Vec<(usize, Region)> = tree.nodes().map(|(d, n)| (d, *n.region())).collect();
        assert_eq!(regions.len(), 5);
        assert_eq!(regions[0], (0, Region::square(100.0)));
        assert_eq!(regions[1], (1, Region::new(0.0, 50.0, 50.0, 100.0)));
        assert_eq!(regions[4], (1, Region::new(50.0, 100.0, 0.0, 50.0)));
    }

    #[test]
    fn test_index_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpatialIndex>();
    }
}
