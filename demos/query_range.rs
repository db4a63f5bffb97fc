//! Find points inside a query rectangle.
use quadrange::prelude::*;

fn main() {
    let mut tree = SpatialIndex::with_capacity(Region::square(100.0), 4).unwrap();
    for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
        let _ = tree.insert(Point::new(v, v));
    }
    println!("Subdivided after 5 inserts: {}", tree.root().is_divided());

    let found = tree.query(&Region::new(0.0, 25.0, 0.0, 25.0));
    println!("Inside [0, 25] x [0, 25]: {:?}", found);

    // Window [0, 25] x [0, 25] holds (10, 10) and (20, 20), edges included
    assert_eq!(found.len(), 2, "Expected 2 points");
    assert!(found.contains(&Point::new(10.0, 10.0)), "(10, 10) should be found");
    assert!(found.contains(&Point::new(20.0, 20.0)), "(20, 20) should be found");
    assert!(!found.contains(&Point::new(30.0, 30.0)), "(30, 30) is outside");
}
