use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use parcoord::{
    AxisLimits, Canvas, ChartDoc, CpuBackend, CpuBackendOpts, OutputFormat, ParCoord, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "parcoord", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart document to PNG or SVG.
    Render(RenderArgs),
    /// Print per-axis limits and tick labels as JSON.
    Limits(LimitsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; the extension picks the format (.png or .svg).
    #[arg(long)]
    out: PathBuf,

    /// Override the canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Skip text when rasterizing (PNG only).
    #[arg(long, default_value_t = false)]
    no_text: bool,
}

#[derive(Parser, Debug)]
struct LimitsArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Serialize)]
struct AxisReport<'a> {
    label: Option<&'a str>,
    #[serde(flatten)]
    limits: AxisLimits,
    ticks: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Limits(args) => cmd_limits(args),
    }
}

fn load_chart(path: &Path) -> anyhow::Result<ChartDoc> {
    ChartDoc::from_path(path).with_context(|| format!("load chart '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut doc = load_chart(&args.in_path)?;
    if let Some(w) = args.width {
        doc.canvas.width = w;
    }
    if let Some(h) = args.height {
        doc.canvas.height = h;
    }
    Canvas::validate(doc.canvas)?;

    let chart = doc.build()?;
    match OutputFormat::from_path(&args.out)? {
        OutputFormat::Png if args.no_text => write_png_without_text(&chart, &args.out)?,
        _ => chart.save_fig(&args.out)?,
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png_without_text(chart: &ParCoord, out: &Path) -> anyhow::Result<()> {
    let mut backend = CpuBackend::new(CpuBackendOpts {
        render_text: false,
        ..CpuBackendOpts::default()
    });
    write_png(&chart.render_with(&mut backend)?, out)?;
    Ok(())
}

fn cmd_limits(args: LimitsArgs) -> anyhow::Result<()> {
    let doc = load_chart(&args.in_path)?;
    let chart = doc.build()?;

    let limits = chart
        .axis_limits()
        .context("chart was not plotted")?
        .to_vec();
    let ticks = chart.axis_ticks()?;
    let labels = chart.labels();

    let report: Vec<AxisReport<'_>> = limits
        .into_iter()
        .zip(ticks)
        .enumerate()
        .map(|(d, (limits, ticks))| AxisReport {
            label: labels.and_then(|l| l.get(d)).map(String::as_str),
            limits,
            ticks: ticks.labels,
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize limits")?
    );
    Ok(())
}
