//! Seedable point sets and query windows for the comparison driver.
//!
//! All generators take the RNG as an argument so runs are reproducible with a seeded
//! [`rand::rngs::StdRng`].

use rand::Rng;

use crate::{Point, Region};

/// `n` points drawn uniformly from `domain`, edges included
pub fn uniform_points<R: Rng>(rng: &mut R, domain: &Region, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(domain.x_min..=domain.x_max),
                rng.random_range(domain.y_min..=domain.y_max),
            )
        })
        .collect()
}

/// A `side × side` window whose lower-left corner sits at a whole-number offset from
/// the domain origin, in `[0, extent - side)` on each axis.
///
/// If the domain is not wider than `side` on an axis, the offset on that axis is 0.
pub fn random_window<R: Rng>(rng: &mut R, domain: &Region, side: f64) -> Region {
    let x = domain.x_min + whole_offset(rng, domain.width() - side);
    let y = domain.y_min + whole_offset(rng, domain.height() - side);
    Region::new(x, x + side, y, y + side)
}

/// `n` windows from [`random_window`]
pub fn random_windows<R: Rng>(
    rng: &mut R,
    domain: &Region,
    n: usize,
    side: f64,
) -> Vec<Region> {
    (0..n).map(|_| random_window(rng, domain, side)).collect()
}

fn whole_offset<R: Rng>(rng: &mut R, span: f64) -> f64 {
    let span = span.floor();
    if span >= 1.0 && span.is_finite() {
        rng.random_range(0.0..span).floor()
    } else {
        0.0
    }
}
