//! Reproducible random point sets (uniform boxes and separated clusters).
//!
//! Model
//! - Draws are keyed by a replay token `(seed, index)` mixed into a single
//!   RNG, so a given token always reproduces the same point set.
//! - The clustered sampler places cluster centers on a wide circle and
//!   scatters points in a small box around each center; with the default
//!   geometry the clusters stay far apart, which makes the sampler useful
//!   for exercising the cross-boundary pruning of the solver.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform sampler configuration: `count` points in a centered square of
/// half-width `half_width`.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    pub count: usize,
    pub half_width: f64,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            count: 64,
            half_width: 100.0,
        }
    }
}

/// Clustered sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClusterCfg {
    pub clusters: usize,
    pub per_cluster: usize,
    /// Radius of the circle the cluster centers sit on.
    pub center_radius: f64,
    /// Half-width of the box each cluster scatters into.
    pub spread: f64,
}

impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            clusters: 2,
            per_cluster: 4,
            center_radius: 100.0,
            spread: 1.0,
        }
    }
}

/// Draw `cfg.count` points uniformly in a centered square.
pub fn draw_points_uniform(cfg: BoxCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let w = cfg.half_width.max(f64::MIN_POSITIVE);
    (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(-w..w);
            let y = rng.gen_range(-w..w);
            Vector2::new(x, y)
        })
        .collect()
}

/// Draw `cfg.clusters * cfg.per_cluster` points around equally spaced
/// cluster centers.
pub fn draw_points_clustered(cfg: ClusterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let k = cfg.clusters.max(1);
    let s = cfg.spread.max(f64::MIN_POSITIVE);
    let mut points = Vec::with_capacity(k * cfg.per_cluster);
    for c in 0..k {
        let theta = (c as f64) * std::f64::consts::TAU / (k as f64);
        let center = Vector2::new(theta.cos(), theta.sin()) * cfg.center_radius;
        for _ in 0..cfg.per_cluster {
            let dx = rng.gen_range(-s..s);
            let dy = rng.gen_range(-s..s);
            points.push(center + Vector2::new(dx, dy));
        }
    }
    points
}
