//! Timing probe for the closest-pair solver on clustered inputs.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does a solve take on
//!   two well-separated clusters?" and confirm that the reported pair
//!   stays inside one cluster instead of straddling the gap.

use std::time::Instant;

use closest_pair::closest::min_distance_traced;
use closest_pair::points::rand::{draw_points_clustered, ClusterCfg, ReplayToken};

fn main() {
    let cfg = ClusterCfg {
        clusters: 2,
        per_cluster: 512,
        center_radius: 1000.0,
        spread: 5.0,
    };
    let points = draw_points_clustered(cfg, ReplayToken { seed: 7, index: 0 });

    let start = Instant::now();
    let solution = min_distance_traced(&points).expect("at least two points");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    // Cross-cluster pairs are ~2000 apart; intra-cluster pairs fit in a
    // box of diameter 2·spread·√2.
    let intra_bound = 2.0 * cfg.spread * std::f64::consts::SQRT_2;
    assert!(
        solution.distance < intra_bound,
        "expected an intra-cluster pair, got {}",
        solution.distance
    );

    println!("points={} regions={}", points.len(), solution.regions.len());
    println!("distance={:.9}", solution.distance);
    println!("solve_time_ms={elapsed_ms:.3}");
}
