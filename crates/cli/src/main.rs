use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use closest_pair::closest::{min_distance_traced, Solution};
use closest_pair::points::rand::{
    draw_points_clustered, draw_points_uniform, BoxCfg, ClusterCfg, ReplayToken,
};

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair runner and input generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a point file and print the per-region trace
    Solve {
        /// Input point file: a count, then one `x y` pair per line
        input: PathBuf,
        /// Emit a JSON document instead of the text trace
        #[arg(long)]
        json: bool,
    },
    /// Write a random point file for demos and benchmarks
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Scatter into this many separated clusters instead of one box
        #[arg(long)]
        clusters: Option<usize>,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, json } => solve(&input, json),
        Action::Gen {
            count,
            seed,
            clusters,
            out,
        } => gen(count, seed, clusters, &out),
    }
}

fn solve(input: &Path, json: bool) -> Result<()> {
    let points = input::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "solve");
    let solution = min_distance_traced(&points)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&Report::from(&solution))?);
    } else {
        for r in &solution.regions {
            println!("D[{},{}]: {:.4}", r.low, r.high, r.distance);
        }
        println!("minimum distance: {:.4}", solution.distance);
    }
    Ok(())
}

/// JSON rendering of a traced solve.
#[derive(Serialize)]
struct Report {
    distance: f64,
    regions: Vec<ReportRegion>,
}

#[derive(Serialize)]
struct ReportRegion {
    low: usize,
    high: usize,
    distance: f64,
}

impl From<&Solution> for Report {
    fn from(s: &Solution) -> Self {
        Self {
            distance: s.distance,
            regions: s
                .regions
                .iter()
                .map(|r| ReportRegion {
                    low: r.low,
                    high: r.high,
                    distance: r.distance,
                })
                .collect(),
        }
    }
}

fn gen(count: usize, seed: u64, clusters: Option<usize>, out: &Path) -> Result<()> {
    tracing::info!(count, seed, clusters = ?clusters, out = %out.display(), "gen");
    let tok = ReplayToken { seed, index: 0 };
    let points = match clusters {
        Some(k) if k > 0 => {
            let per_cluster = (count + k - 1) / k;
            let mut pts = draw_points_clustered(
                ClusterCfg {
                    clusters: k,
                    per_cluster,
                    ..ClusterCfg::default()
                },
                tok,
            );
            pts.truncate(count);
            pts
        }
        _ => draw_points_uniform(
            BoxCfg {
                count,
                half_width: 1000.0,
            },
            tok,
        ),
    };

    let mut text = String::with_capacity(points.len() * 24 + 16);
    text.push_str(&format!("{}\n", points.len()));
    for p in &points {
        text.push_str(&format!("{} {}\n", p.x, p.y));
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
