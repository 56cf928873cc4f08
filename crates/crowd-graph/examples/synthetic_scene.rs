//! Example: lines and clusters in a synthetic crowd scene.
//!
//! Builds one frame of detection centers containing a queue of people, a
//! dense crowd and a few stragglers, runs `FrameAnalyzer` on it and writes the
//! integer frame record as JSON. Timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p crowd-graph --example synthetic_scene -- --help
//!   cargo run -p crowd-graph --example synthetic_scene -- --crowd 30

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crowd_graph::{AnalyzerConfig, FrameAnalyzer, Point2f, PruneConfig, ShapeConfig};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Analyze a synthetic queue-and-crowd frame")]
struct Args {
    /// People standing in the queue
    #[arg(long, default_value_t = 8)]
    queue: usize,

    /// People in the crowd blob
    #[arg(long, default_value_t = 20)]
    crowd: usize,

    /// Edges this many standard deviations above the mean length are cut
    #[arg(long, default_value_t = 1.0)]
    prune_z: f32,

    /// Output JSON path (default: print to stdout)
    #[arg(long)]
    out: Option<String>,
}

// ── Scene ─────────────────────────────────────────────────────────────────────

fn scene(queue: usize, crowd: usize) -> Vec<Point2f> {
    let mut points = Vec::with_capacity(queue + crowd + 3);

    // Slightly slanted queue with 40 px spacing.
    for i in 0..queue {
        let t = i as f32;
        points.push(Point2f::new(60.0 + 40.0 * t, 400.0 - 6.0 * t));
    }

    // Sunflower-packed crowd around (900, 250).
    for i in 0..crowd {
        let a = i as f32 * 2.399_963;
        let r = 14.0 * (i as f32).sqrt();
        points.push(Point2f::new(900.0 + r * a.cos(), 250.0 + r * a.sin()));
    }

    points.push(Point2f::new(500.0, 50.0));
    points.push(Point2f::new(1200.0, 650.0));
    points.push(Point2f::new(40.0, 680.0));

    points
}

fn main() -> Result<()> {
    let args = Args::parse();
    let points = scene(args.queue, args.crowd);

    let analyzer = FrameAnalyzer::new(AnalyzerConfig {
        prune: PruneConfig {
            z_score: args.prune_z,
        },
        shape: ShapeConfig::default(),
        ..AnalyzerConfig::default()
    });

    let t0 = Instant::now();
    let report = analyzer.analyze(&points);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    println!(
        "{} points -> {} lines, {} clusters in {elapsed_ms:.3} ms",
        report.num_points,
        report.lines.len(),
        report.clusters.len()
    );

    let json =
        serde_json::to_string_pretty(&report.to_record()).context("serializing frame record")?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {path}"))?;
            println!("wrote {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
