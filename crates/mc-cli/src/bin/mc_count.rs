use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use moore_contours::{
    ChainConfig, ContourSet, Grid, GridView, IntensityCount, Method, SeedPolicy, SurveyConfig,
    TraceConfig, count_contours, distinct_intensities, intensity_histogram, survey,
    survey_intensity, trace_all_intensities,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "mc_count")]
#[command(about = "Count same-intensity contours in a grayscale image or raw u8 buffer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count contours for every intensity (or one) and print the frequency table.
    #[command(name = "count")]
    Count(CountArgs),
    /// List the distinct intensities in first-seen order with pixel counts.
    #[command(name = "intensities")]
    Intensities(InputArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Image file, or raw row-major u8 buffer (`.bin`/`.raw`, or any file when --shape is set).
    input: PathBuf,
    /// Raw buffer shape as ROWS,COLS. Square shape is inferred when omitted.
    #[arg(long, short = 's', value_parser = parse_shape)]
    shape: Option<(usize, usize)>,
    /// Row pitch in bytes for padded raw frames.
    #[arg(long, requires = "shape")]
    stride: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct CountArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, value_enum, default_value_t = MethodArg::Trace)]
    method: MethodArg,
    /// Only count this intensity.
    #[arg(long)]
    intensity: Option<u8>,
    /// Where chaining starts new runs (chain method only).
    #[arg(long, value_enum, default_value_t = SeedPolicyArg::FrameEdgeFirst)]
    seed_policy: SeedPolicyArg,
    /// Walker step cap per contour; defaults to rows * cols.
    #[arg(long)]
    max_steps: Option<usize>,
    /// Print all 256 intensities, including absent ones.
    #[arg(long)]
    all: bool,
    /// Write a JSON report to this path.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Include traced contour points in the JSON report (trace method only).
    #[arg(long)]
    contours: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Trace,
    Chain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeedPolicyArg {
    FrameEdgeFirst,
    SortedOrder,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Trace => Method::Trace,
            MethodArg::Chain => Method::Chain,
        }
    }
}

impl From<SeedPolicyArg> for SeedPolicy {
    fn from(p: SeedPolicyArg) -> Self {
        match p {
            SeedPolicyArg::FrameEdgeFirst => SeedPolicy::FrameEdgeFirst,
            SeedPolicyArg::SortedOrder => SeedPolicy::SortedOrder,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct IntensityDto {
    intensity: u8,
    pixels: usize,
    count: usize,
    closed: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
struct ContourDto {
    seed: [isize; 2],
    outcome: &'static str,
    region_size: usize,
    points: Vec<[isize; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct ContourSetDto {
    intensity: u8,
    contours: Vec<ContourDto>,
}

#[derive(Debug, Clone, Serialize)]
struct ReportDto {
    input: String,
    rows: usize,
    cols: usize,
    method: &'static str,
    seed_policy: Option<&'static str>,
    max_steps: Option<usize>,
    intensities: Vec<IntensityDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contours: Option<Vec<ContourSetDto>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Count(args) => run_count(args),
        Command::Intensities(args) => run_intensities(args),
    }
}

fn run_count(args: CountArgs) -> Result<()> {
    let frame = load_frame(&args.input)?;
    let view = frame.view()?;

    let cfg = SurveyConfig {
        method: args.method.into(),
        trace: TraceConfig {
            max_steps: args.max_steps,
        },
        chain: ChainConfig {
            seed_policy: args.seed_policy.into(),
        },
    };

    let want_contours = args.contours && cfg.method == Method::Trace;
    if args.contours && !want_contours {
        tracing::warn!("--contours only applies to the trace method; ignoring");
    }

    let (counts, sets) = if want_contours {
        let sets = match args.intensity {
            Some(i) => vec![count_contours(&view, i, &cfg.trace)],
            None => trace_all_intensities(&view, &cfg.trace),
        };
        let hist = intensity_histogram(&view);
        let counts = sets
            .iter()
            .map(|s| IntensityCount {
                intensity: s.intensity,
                pixels: hist[s.intensity as usize],
                count: s.count(),
                closed: Some(s.num_closed()),
            })
            .collect();
        (counts, Some(sets))
    } else {
        let counts = match args.intensity {
            Some(i) => vec![survey_intensity(&view, i, &cfg)],
            None => survey(&view, &cfg),
        };
        (counts, None)
    };

    let total: usize = counts.iter().map(|c| c.count).sum();
    tracing::info!(
        "{} intensities, {} contours ({})",
        counts.len(),
        total,
        method_name(cfg.method)
    );

    let rows = if args.all && args.intensity.is_none() {
        dense_rows(&counts)
    } else {
        counts.clone()
    };
    print!("{}", format_table(&rows));

    if let Some(path) = &args.json {
        let input = args.input.input.display().to_string();
        let report = build_report(input, &view, &cfg, &counts, sets.as_deref());
        write_json(path, &report)?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}

fn run_intensities(args: InputArgs) -> Result<()> {
    let frame = load_frame(&args)?;
    let view = frame.view()?;

    let hist = intensity_histogram(&view);
    let distinct = distinct_intensities(&view);
    tracing::info!("{} distinct intensities", distinct.len());

    println!("intensity  pixels");
    for i in distinct {
        println!("{:>9}  {:>6}", i, hist[i as usize]);
    }

    Ok(())
}

/// Loaded input. Raw frames may carry row padding (`pitch > cols`).
#[derive(Debug)]
struct Frame {
    rows: usize,
    cols: usize,
    pitch: usize,
    data: Vec<u8>,
}

impl Frame {
    fn packed(grid: Grid<u8>) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            pitch: grid.cols(),
            data: grid.into_raw(),
        }
    }

    fn view(&self) -> Result<GridView<'_, u8>> {
        GridView::from_slice(self.rows, self.cols, self.pitch, &self.data).with_context(|| {
            format!(
                "borrowing {}x{} frame with pitch {}",
                self.rows, self.cols, self.pitch
            )
        })
    }
}

fn load_frame(args: &InputArgs) -> Result<Frame> {
    ensure_file_exists(&args.input, "input")?;
    tracing::info!("Loading input: {}", args.input.display());

    let frame = if args.shape.is_some() || is_raw_path(&args.input) {
        load_raw_u8(&args.input, args.shape, args.stride)?
    } else {
        Frame::packed(load_image_u8(&args.input)?)
    };

    tracing::info!(
        "Grid size: {}x{} (pitch {})",
        frame.rows,
        frame.cols,
        frame.pitch
    );
    Ok(frame)
}

fn load_raw_u8(
    path: &Path,
    shape: Option<(usize, usize)>,
    stride: Option<usize>,
) -> Result<Frame> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let (rows, cols) = match shape {
        Some(s) => s,
        None => infer_square(data.len()).with_context(|| {
            format!(
                "{} holds {} bytes, which is not a square grid; pass --shape ROWS,COLS",
                path.display(),
                data.len()
            )
        })?,
    };

    match stride {
        Some(pitch) => {
            let frame = Frame {
                rows,
                cols,
                pitch,
                data,
            };
            frame
                .view()
                .with_context(|| format!("reading {} as a padded frame", path.display()))?;
            Ok(frame)
        }
        None => Grid::from_vec(rows, cols, data)
            .map(Frame::packed)
            .with_context(|| format!("reshaping {} as {rows}x{cols}", path.display())),
    }
}

fn load_image_u8(path: &Path) -> Result<Grid<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    Grid::from_vec(h as usize, w as usize, data)
        .with_context(|| format!("constructing grid from {}", path.display()))
}

fn parse_shape(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once([',', 'x'])
        .ok_or_else(|| format!("expected ROWS,COLS, got '{s}'"))?;
    let rows = r
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid rows '{r}': {e}"))?;
    let cols = c
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid cols '{c}': {e}"))?;
    Ok((rows, cols))
}

fn infer_square(len: usize) -> Option<(usize, usize)> {
    let side = len.isqrt();
    (side * side == len).then_some((side, side))
}

fn is_raw_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("bin") || e.eq_ignore_ascii_case("raw"))
}

fn dense_rows(counts: &[IntensityCount]) -> Vec<IntensityCount> {
    let mut rows: Vec<IntensityCount> = (0..=255u8)
        .map(|i| IntensityCount {
            intensity: i,
            pixels: 0,
            count: 0,
            closed: None,
        })
        .collect();
    for c in counts {
        rows[c.intensity as usize] = *c;
    }
    rows
}

fn format_table(rows: &[IntensityCount]) -> String {
    let mut out = String::from("intensity  pixels  count  closed\n");
    for c in rows {
        let closed = c.closed.map_or_else(|| "-".to_string(), |n| n.to_string());
        out.push_str(&format!(
            "{:>9}  {:>6}  {:>5}  {:>6}\n",
            c.intensity, c.pixels, c.count, closed
        ));
    }
    out
}

fn build_report(
    input: String,
    view: &GridView<'_, u8>,
    cfg: &SurveyConfig,
    counts: &[IntensityCount],
    sets: Option<&[ContourSet]>,
) -> ReportDto {
    ReportDto {
        input,
        rows: view.rows(),
        cols: view.cols(),
        method: method_name(cfg.method),
        seed_policy: (cfg.method == Method::Chain).then(|| seed_policy_name(cfg.chain.seed_policy)),
        max_steps: cfg.trace.max_steps,
        intensities: counts.iter().map(intensity_dto).collect(),
        contours: sets.map(|s| s.iter().map(contour_set_dto).collect()),
    }
}

fn intensity_dto(c: &IntensityCount) -> IntensityDto {
    IntensityDto {
        intensity: c.intensity,
        pixels: c.pixels,
        count: c.count,
        closed: c.closed,
    }
}

fn contour_set_dto(set: &ContourSet) -> ContourSetDto {
    let contours = set
        .contours
        .iter()
        .map(|c| ContourDto {
            seed: [c.seed().row, c.seed().col],
            outcome: c.outcome.name(),
            region_size: c.region_size,
            points: c.points.iter().map(|p| [p.row, p.col]).collect(),
        })
        .collect();

    ContourSetDto {
        intensity: set.intensity,
        contours,
    }
}

fn method_name(m: Method) -> &'static str {
    match m {
        Method::Trace => "trace",
        Method::Chain => "chain",
    }
}

fn seed_policy_name(p: SeedPolicy) -> &'static str {
    match p {
        SeedPolicy::FrameEdgeFirst => "frame_edge_first",
        SeedPolicy::SortedOrder => "sorted_order",
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
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
