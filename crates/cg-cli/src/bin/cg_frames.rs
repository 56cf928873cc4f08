use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crowd_graph::{
    AnalyzerConfig, BoxError, FrameAnalyzer, FramePipeline, Graph, JsonLinesSink, KMeansConfig,
    Point2f, PruneConfig, Shape, ShapeClassifier, ShapeConfig, SizeMetric, minimum_spanning_forest,
    prune_long_edges,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cg_frames")]
#[command(about = "Run the crowd-graph engine on recorded detection points")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze every frame of a frames file into a JSON lines report
    #[command(name = "analyze")]
    Analyze(AnalyzeArgs),
    /// Dump the pruned spanning forest of a single point set
    #[command(name = "forest")]
    Forest(ForestArgs),
}

#[derive(Args, Debug, Clone)]
struct EngineArgs {
    #[arg(long, default_value_t = 1.0)]
    prune_z: f32,
    #[arg(long, default_value_t = 0.4)]
    line_r2: f32,
    #[arg(long, default_value_t = 8)]
    subdivide_above: usize,
    #[arg(long, value_enum, default_value_t = MetricArg::NodeCount)]
    size_metric: MetricArg,
    #[arg(long, default_value_t = 8)]
    group_size: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum MetricArg {
    NodeCount,
    TreeDiameter,
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "report.jsonl")]
    out: PathBuf,
    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Args, Debug, Clone)]
struct ForestArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "forest.json")]
    out: PathBuf,
    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Debug, Clone, Deserialize)]
struct FramesFile {
    frames: Vec<Vec<[f32; 2]>>,
}

#[derive(Debug, Clone, Deserialize)]
struct PointsFile {
    points: Vec<[f32; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct EdgeDto {
    a: usize,
    b: usize,
    weight: f32,
}

#[derive(Debug, Clone, Serialize)]
struct ComponentDto {
    shape: &'static str,
    coords: Vec<[f32; 2]>,
    edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, Serialize)]
struct ForestDto {
    coords: Vec<[f32; 2]>,
    forest: Vec<EdgeDto>,
    components: Vec<ComponentDto>,
    meta: MetaForest,
}

#[derive(Debug, Clone, Serialize)]
struct MetaForest {
    prune_z: f32,
    line_r2: f32,
    node_count: usize,
    forest_edges: usize,
    forest_weight: f32,
    component_count: usize,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Analyze(args) => run_analyze(args),
        Command::Forest(args) => run_forest(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn analyzer_config(args: &EngineArgs) -> AnalyzerConfig {
    AnalyzerConfig {
        prune: PruneConfig {
            z_score: args.prune_z,
        },
        shape: ShapeConfig {
            line_r2_threshold: args.line_r2,
            subdivide_above: args.subdivide_above,
            size_metric: match args.size_metric {
                MetricArg::NodeCount => SizeMetric::NodeCount,
                MetricArg::TreeDiameter => SizeMetric::TreeDiameter,
            },
        },
        grouping: KMeansConfig {
            target_group_size: args.group_size,
            ..KMeansConfig::default()
        },
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    ensure_file_exists(&args.input, "frames")?;
    let frames: FramesFile = read_json(&args.input)?;

    let file = fs::File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let sink = JsonLinesSink::new(BufWriter::new(file));

    let mut pipeline: FramePipeline<Vec<[f32; 2]>, _> =
        FramePipeline::new(FrameAnalyzer::new(analyzer_config(&args.engine)), sink)
            .with_detector(|frame: &Vec<[f32; 2]>| -> Result<Vec<Point2f>, BoxError> {
                Ok(frame.iter().copied().map(Point2f::from).collect())
            });

    let pushed = pipeline.run(&frames.frames);
    pipeline
        .into_sink()
        .into_inner()
        .flush()
        .context("flushing report")?;

    info!(
        frames = frames.frames.len(),
        pushed,
        out = %args.out.display(),
        "analysis finished"
    );
    Ok(())
}

fn run_forest(args: ForestArgs) -> Result<()> {
    ensure_file_exists(&args.input, "points")?;
    let input: PointsFile = read_json(&args.input)?;
    if input.points.iter().flatten().any(|v| !v.is_finite()) {
        bail!("points file contains non-finite coordinates");
    }

    let cfg = analyzer_config(&args.engine);
    let coords: Vec<Point2f> = input.points.iter().copied().map(Point2f::from).collect();
    let forest = minimum_spanning_forest(&Graph::complete(coords));
    let parts = prune_long_edges(&forest, &cfg.prune);
    let classifier = ShapeClassifier::new(cfg.shape.clone());

    let components = parts
        .iter()
        .map(|c| ComponentDto {
            shape: match classifier.classify(c) {
                Shape::Line(_) => "line",
                Shape::Clusters(_) => "cluster",
            },
            coords: c.coords().iter().map(|p| [p.x, p.y]).collect(),
            edges: edge_dtos(c),
        })
        .collect::<Vec<_>>();

    let meta = MetaForest {
        prune_z: cfg.prune.z_score,
        line_r2: cfg.shape.line_r2_threshold,
        node_count: forest.size(),
        forest_edges: forest.edges().len(),
        forest_weight: forest.total_weight(),
        component_count: components.len(),
    };
    info!(
        nodes = meta.node_count,
        components = meta.component_count,
        "forest built"
    );

    write_json(
        &args.out,
        &ForestDto {
            coords: input.points,
            forest: edge_dtos(&forest),
            components,
            meta,
        },
    )
}

fn edge_dtos(g: &Graph) -> Vec<EdgeDto> {
    g.iter_edges()
        .map(|e| EdgeDto {
            a: e.a,
            b: e.b,
            weight: e.weight,
        })
        .collect()
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
