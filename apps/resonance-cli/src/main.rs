use anyhow::Context;
use clap::Parser;
use resonance::ephemeris::SwissEphemerisAdapter;
use resonance::export::ReportExporter;
use resonance::rendering::ChartSpecGenerator;
use resonance::report::Normalization;
use resonance_config::{load_run_config, parse_birth, validate_run_config, RunConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily transit resonance scores for one year")]
struct Args {
    /// TOML config file (default: configs/resonance.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Birth timestamp in UTC, e.g. "1979-06-04 12:00". Overrides the config.
    #[arg(long)]
    birth: Option<String>,

    /// Calendar year to score. Overrides the config.
    #[arg(long)]
    year: Option<i32>,

    /// Directory for the CSV, SVG and chart JSON.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Swiss Ephemeris data directory (default: built-in Moshier ephemeris).
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 1400)]
    width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Debug logging, including per-day scores.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    run(&config, args.width as f32, args.height as f32)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Config file (or defaults) with command-line overrides applied on top
fn resolve_config(args: &Args) -> anyhow::Result<RunConfig> {
    let mut config = load_run_config(args.config.as_deref())?;

    if let Some(birth) = &args.birth {
        config.birth = parse_birth(birth)?;
    }
    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(dir) = &args.out_dir {
        config.output_dir = dir.clone();
    }
    if let Some(path) = &args.ephemeris_path {
        config.ephemeris_path = Some(path.clone());
    }

    validate_run_config(&config)?;
    Ok(config)
}

fn run(config: &RunConfig, width: f32, height: f32) -> anyhow::Result<()> {
    log::info!(
        "Scoring {} against birth {}",
        config.year,
        config.birth.format("%Y-%m-%d %H:%M UTC")
    );

    let mut adapter = SwissEphemerisAdapter::new(config.ephemeris_path.clone())
        .context("Failed to initialize the Swiss Ephemeris")?;

    let report = resonance::compute_report(&mut adapter, &config.scoring, config.birth, config.year)
        .context("Failed to fetch planetary positions")?;

    match report.normalization {
        Normalization::Scaled { min, max } => {
            log::info!("Raw scores range from {:.2} to {:.2}", min, max)
        }
        Normalization::Degenerate { score } => {
            log::warn!("Every day scored {:.2}; normalized column is flat", score)
        }
        Normalization::Empty => anyhow::bail!("No days returned for {}", config.year),
    }

    let chart = ChartSpecGenerator::new().generate(&report, width, height);
    let paths = ReportExporter::new(&config.output_dir)
        .export(&report, &chart)
        .with_context(|| format!("Failed to export report to {}", config.output_dir.display()))?;

    println!(
        "Done! Wrote '{}', '{}' and '{}'.",
        paths.table.display(),
        paths.chart.display(),
        paths.chart_spec.display()
    );
    Ok(())
}
