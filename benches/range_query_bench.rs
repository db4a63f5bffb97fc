//! Benchmark for quad-tree range queries against the two baselines
//!
//! Builds a `SpatialIndex` over 1M uniformly distributed points in a 1000x1000
//! domain and runs batches of square windows of varying size (10%, 1%, 0.25% and
//! 0.01% of the area) through the quad-tree, a linear scan and `SortedByX`.

use quadrange::baseline::{self, SortedByX};
use quadrange::workload::{random_windows, uniform_points};
use quadrange::{Point, Region, SpatialIndex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// Time one strategy over a batch of windows, returning total hits
fn bench<F>(label: &str, windows: &[Region], percentage_str: &str, mut run: F)
where
    F: FnMut(&Region) -> usize,
{
    let start = Instant::now();
    let mut hits = 0;
    for window in windows {
        hits += run(window);
    }
    let elapsed = start.elapsed();
    println!(
        "{:<16} {} searches {}%: {:.2}ms ({} hits)",
        label,
        windows.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0,
        hits
    );
}

fn main() {
    println!("Quad-tree Range Query Benchmark");
    println!("===============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;
    let domain = Region::square(1000.0);

    // Fixed seed for reproducibility
    let mut rng = StdRng::seed_from_u64(95756739);
    let points: Vec<Point> = uniform_points(&mut rng, &domain, num_items);

    println!("Building index with {} points...", num_items);
    let start = Instant::now();
    let mut tree = SpatialIndex::new(domain).unwrap();
    let accepted = tree.insert_all(points.iter().copied());
    let build_time = start.elapsed();
    println!(
        "Index built in {:.2}ms ({} accepted, {} nodes, depth {})",
        build_time.as_secs_f64() * 1000.0,
        accepted,
        tree.node_count(),
        tree.depth()
    );

    let start = Instant::now();
    let sorted = SortedByX::from_slice(&points);
    println!("Sorted copy built in {:.2}ms\n", start.elapsed().as_secs_f64() * 1000.0);

    // Side lengths for 10%, 1%, 0.01% coverage, plus the 50x50 windows of the driver
    let sizes = [
        ((0.1_f64).sqrt() * 1000.0, "10"),
        (100.0, "1"),
        (10.0, "0.01"),
        (50.0, "0.25"),
    ];

    println!("Running query benchmarks:");
    println!("-----------------------");
    let mut found = Vec::new();
    for (side, percentage_str) in sizes {
        let windows = random_windows(&mut rng, &domain, num_tests, side);
        bench("Linear", &windows, percentage_str, |w| baseline::linear_count(&points, w));
        bench("QuadTree", &windows, percentage_str, |w| {
            found.clear();
            tree.query_into(w, &mut found);
            found.len()
        });
        bench("Binary+Y-Filter", &windows, percentage_str, |w| sorted.count(w));
        println!();
    }
}
