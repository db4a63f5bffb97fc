//! Performance profiling example for quad-tree range queries
//!
//! This example performs intensive query operations on a large quad-tree.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf
//! ```

use quadrange::prelude::*;
use quadrange::workload::uniform_points;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

fn main() {
    println!("Building large quad-tree...");
    let domain = Region::square(1000.0);
    let mut tree = SpatialIndex::new(domain).unwrap();

    // Insert 1 million random points
    let mut rng = StdRng::seed_from_u64(12345);
    let points = uniform_points(&mut rng, &domain, 1_000_000);
    let build_start = Instant::now();
    let _ = tree.insert_all(points);
    let build_duration = build_start.elapsed();

    println!(
        "Tree built in {:.2}ms: {} nodes, depth {}",
        build_duration.as_secs_f64() * 1000.0,
        tree.node_count(),
        tree.depth()
    );

    let mut results = Vec::new();
    let mut total_hits = 0;
    let query_start = Instant::now();

    // Each query window covers 1% of the space
    for _ in 0..100_000 {
        let center_x: f64 = rng.random_range(0.0..1000.0);
        let center_y: f64 = rng.random_range(0.0..1000.0);

        let query_size = 100.0;
        let window = Region::new(
            (center_x - query_size / 2.0).max(0.0),
            (center_x + query_size / 2.0).min(1000.0),
            (center_y - query_size / 2.0).max(0.0),
            (center_y + query_size / 2.0).min(1000.0),
        );

        results.clear();
        tree.query_into(&window, &mut results);
        total_hits += results.len();
    }

    let query_duration = query_start.elapsed();

    println!(
        "\nCompleted 100,000 queries in {:.2}ms ({:.2}µs per query, {} hits)",
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / 100_000.0,
        total_hits
    );

    println!("\nProfile Summary:");
    println!("  Building: {:.2}ms", build_duration.as_secs_f64() * 1000.0);
    println!("  Querying: {:.2}ms", query_duration.as_secs_f64() * 1000.0);
    println!("  Total:    {:.2}ms", (build_duration + query_duration).as_secs_f64() * 1000.0);
}
