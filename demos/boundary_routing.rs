//! Points on a split line: broadcast stores copies, first-match stores one.
use quadrange::prelude::*;

fn build(routing: Routing) -> SpatialIndex {
    let config = IndexConfig::default().with_capacity(1).with_routing(routing);
    let mut tree = SpatialIndex::with_config(Region::square(100.0), config).unwrap();
    let _ = tree.insert(Point::new(10.0, 10.0)); // Fills the root
    let _ = tree.insert(Point::new(50.0, 50.0)); // Centre of the domain
    let _ = tree.insert(Point::new(50.0, 20.0)); // On the vertical split line
    tree
}

fn main() {
    for routing in [Routing::Broadcast, Routing::FirstMatch] {
        let tree = build(routing);
        let found = tree.query(tree.domain());
        println!(
            "{:?}: accepted {}, stored {}, domain query returns {}",
            routing,
            tree.accepted(),
            tree.stored(),
            found.len()
        );
    }

    let broadcast = build(Routing::Broadcast);
    assert_eq!(broadcast.stored(), 7, "centre point x4, split-line point x2");
    let first_match = build(Routing::FirstMatch);
    assert_eq!(first_match.stored(), 3, "every point stored once");
}
