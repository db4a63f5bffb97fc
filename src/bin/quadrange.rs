//! Range-query comparison driver.
//!
//! Generates a uniform point set, builds a quad-tree and a sorted-by-x copy, then
//! times linear scan, quad-tree and binary+Y-filter queries over the same random
//! windows.
//!
//! ```bash
//! cargo run --release --bin quadrange -- --points 1000000 --queries 20 --dump quadtree_output.txt
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use quadrange::baseline::SortedByX;
use quadrange::compare::Comparison;
use quadrange::workload::{random_windows, uniform_points};
use quadrange::{IndexConfig, Region, Routing, SpatialIndex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoutingArg {
    /// Offer each point to all four children
    Broadcast,
    /// Store each point in the first matching child only
    FirstMatch,
}

impl From<RoutingArg> for Routing {
    fn from(arg: RoutingArg) -> Self {
        match arg {
            RoutingArg::Broadcast => Self::Broadcast,
            RoutingArg::FirstMatch => Self::FirstMatch,
        }
    }
}

/// Compare linear, quad-tree and binary+Y-filter range queries
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of random points
    #[arg(long, default_value_t = 1_000_000)]
    points: usize,

    /// Number of random query windows
    #[arg(long, default_value_t = 20)]
    queries: usize,

    /// Side length of each query window
    #[arg(long, default_value_t = 50.0)]
    window: f64,

    /// Points per node before it subdivides
    #[arg(long, default_value_t = quadrange::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Domain is [0, extent] x [0, extent]
    #[arg(long, default_value_t = 1000.0)]
    extent: f64,

    /// RNG seed; a random seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write the tree dump to this file
    #[arg(long)]
    dump: Option<PathBuf>,

    /// How internal nodes route points to children
    #[arg(long, value_enum, default_value_t = RoutingArg::Broadcast)]
    routing: RoutingArg,

    /// Maximum subdivision depth
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("quadrange v{}", env!("CARGO_PKG_VERSION"));
    info!(seed, points = args.points, queries = args.queries, "starting comparison");

    let domain = Region::square(args.extent);
    let mut config = IndexConfig::default()
        .with_capacity(args.capacity)
        .with_routing(args.routing.into());
    config.max_depth = args.max_depth;
    let mut index = SpatialIndex::with_config(domain, config).context("invalid index settings")?;

    let mut rng = StdRng::seed_from_u64(seed);

    info!("Generating {} points...", args.points);
    let points = uniform_points(&mut rng, &domain, args.points);
    let sorted = SortedByX::from_slice(&points);

    info!("Building quad-tree...");
    let start = Instant::now();
    let accepted = index.insert_all(points.iter().copied());
    info!(
        accepted,
        stored = index.stored(),
        nodes = index.node_count(),
        depth = index.depth(),
        "quad-tree built in {:.2}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(path) = &args.dump {
        index
            .save_dump(path)
            .with_context(|| format!("failed to write dump to {}", path.display()))?;
        info!("Quad-tree saved to '{}'", path.display());
    }

    info!("Running {} queries (linear vs quad-tree vs binary)...", args.queries);
    let windows = random_windows(&mut rng, &domain, args.queries, args.window);
    let comparison = Comparison::new(&points, &index, &sorted);

    let mut mismatches = 0_usize;
    for (i, window) in windows.iter().enumerate() {
        let report = comparison.run(window);
        println!(
            "\nQuery {}: x1={}, y1={}, x2={}, y2={}",
            i + 1,
            window.x_min,
            window.y_min,
            window.x_max,
            window.y_max
        );
        print!("{report}");
        if !report.agrees() {
            mismatches += 1;
            warn!(query = i + 1, %window, "strategies returned different counts");
        }
    }

    if mismatches > 0 {
        warn!(mismatches, "some queries disagreed; points on split lines are stored more than once under broadcast routing");
    }
    Ok(())
}
