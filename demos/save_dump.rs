//! Write the flat debug dump of a tree
use quadrange::dump::write_dump;
use quadrange::prelude::*;

fn main() -> Result<(), IndexError> {
    println!("=== Quad-tree dump example ===");

    let mut tree = SpatialIndex::with_capacity(Region::square(1000.0), 2)?;
    let _ = tree.insert(Point::new(100.0, 100.0));
    let _ = tree.insert(Point::new(900.0, 150.0));
    let _ = tree.insert(Point::new(120.0, 880.0)); // Splits the root
    let _ = tree.insert(Point::new(760.0, 910.0));

    // Dump to stdout
    write_dump(&tree, std::io::stdout().lock())?;

    // Dump to file
    let path = std::env::temp_dir().join("quadtree_output.txt");
    tree.save_dump(&path)?;
    println!("Quad-tree saved to '{}'", path.display());

    // Header lines + point lines
    let text = std::fs::read_to_string(&path)?;
    assert_eq!(text.lines().count(), tree.node_count() + tree.stored());
    println!("✓ {} nodes, {} stored points", tree.node_count(), tree.stored());

    // Missing directory: reported as IndexError::Io
    match tree.save_dump("/nonexistent-dir/quadtree_output.txt") {
        Ok(()) => println!("✗ Should have failed writing to a missing directory"),
        Err(e) => println!("✓ Correctly reported: {}", e),
    }
    Ok(())
}
