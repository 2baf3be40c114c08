//! pharmaplot: evaluate kinetics and receptor curves from the command line
//! and write the interactive chart pages.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pharma_core::constants::LINE_SAMPLES;
use pharma_core::sampling::{linspace, logspace};
use pharma_core::types::parse_param;
use pharma_core::{ModelKind, ParamSet};
use pharma_plot::{build_model, scene, write_page, CurveArtifact, OutputFormat, PlotConfig};
use tracing::{debug, info};

/// Pharmacology curves: enzyme kinetics, inhibition and receptor binding.
#[derive(Parser)]
#[command(name = "pharmaplot")]
#[command(version, about = "Enzyme kinetics and receptor binding curves.")]
struct Cli {
    /// Configuration file (default: ./pharmaplot.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the stock chart pages.
    List,
    /// Evaluate a model over a grid and print the curve.
    Eval(EvalArgs),
    /// Write chart pages as standalone HTML files.
    Render(RenderArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Grid {
    /// Evenly spaced from `--start` to `--end`.
    Lin,
    /// `10^start` to `10^end`, evenly spaced in log10.
    Log,
}

#[derive(Args)]
struct EvalArgs {
    /// Model name, e.g. michaelis-menten, lb-competitive, four-parameter-logistic.
    model: ModelKind,

    /// Parameter as name=value; repeat for each parameter the model needs.
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, f64)>,

    /// Input grid spacing.
    #[arg(long, value_enum, default_value_t = Grid::Log)]
    grid: Grid,

    /// First grid value (an exponent for --grid log).
    #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
    start: f64,

    /// Last grid value (an exponent for --grid log).
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    end: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = LINE_SAMPLES)]
    num: usize,

    /// Explicit comma-separated inputs, replacing the grid.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["grid", "start", "end", "num"]
    )]
    x: Option<Vec<f64>>,

    /// Output format (default from config).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
struct RenderArgs {
    /// Page slugs to render (see `pharmaplot list`).
    slugs: Vec<String>,

    /// Render every stock page.
    #[arg(long, conflicts_with = "slugs")]
    all: bool,

    /// Output directory (default from config).
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PlotConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.log_level, cli.log_format);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::List => list(),
        Commands::Eval(args) => eval(args, &config),
        Commands::Render(args) => render(args, &config),
    }
}

/// Logs go to stderr so `eval` output stays clean on stdout.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}

fn list() -> Result<()> {
    for page in scene::all() {
        println!("{:<26} {}", page.slug, page.title);
    }
    Ok(())
}

impl EvalArgs {
    fn inputs(&self) -> Vec<f64> {
        match (&self.x, self.grid) {
            (Some(x), _) => x.clone(),
            (None, Grid::Lin) => linspace(self.start, self.end, self.num),
            (None, Grid::Log) => logspace(self.start, self.end, self.num),
        }
    }
}

fn eval(args: EvalArgs, config: &PlotConfig) -> Result<()> {
    let params: ParamSet = args.params.iter().cloned().collect();
    let model = build_model(args.model, &params)
        .with_context(|| format!("Cannot build {}", args.model))?;

    let inputs = args.inputs();
    if inputs.is_empty() {
        bail!("No input values to evaluate");
    }
    debug!(model = %args.model, points = inputs.len(), "evaluating curve");

    let artifact = CurveArtifact::evaluate(model.as_ref(), inputs);
    match args.format.unwrap_or(config.format) {
        OutputFormat::Csv => print!("{}", artifact.to_csv()),
        OutputFormat::Json => {
            let json = artifact.to_json().context("Failed to serialize curve")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render(args: RenderArgs, config: &PlotConfig) -> Result<()> {
    let pages = if args.all {
        scene::all()
    } else if args.slugs.is_empty() {
        bail!("No pages given; pass one or more slugs or --all");
    } else {
        args.slugs
            .iter()
            .map(|slug| scene::by_slug(slug))
            .collect::<Result<Vec<_>, _>>()
            .context("See `pharmaplot list` for available pages")?
    };

    let out = args.out.as_deref().unwrap_or(&config.output_dir);
    for page in &pages {
        let path = write_page(page, out)
            .with_context(|| format!("Failed to render {} into {}", page.slug, out.display()))?;
        info!(slug = %page.slug, path = %path.display(), "page written");
        println!("{}", path.display());
    }
    Ok(())
}
