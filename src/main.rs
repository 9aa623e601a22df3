use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shadowcast::scene::io::{read_params, to_params_string};
use shadowcast::shadow::raster::{SampleGrid, classify_grid};
use shadowcast::shadow::readout::Readout;
use shadowcast::view::config::ViewConfig;
use shadowcast::view::plan::build_plan;
use shadowcast::view::viewport::{Viewport, WorldToViewport};
use shadowcast::{Backend, ParameterStore, ShadowConfig, solve};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Readouts only
    Summary,
    /// Readouts and a text map of the ground
    Ascii,
    /// Render plan as JSON
    Plan,
    /// Effective (range-checked) parameters as JSON
    Params,
}

/// Shadow cast by a box-shaped building on flat ground
#[derive(Debug, Parser)]
#[command(name = "shadowcast", version, about)]
struct Cli {
    /// JSON file with scene parameters (missing fields use defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Parameter override, repeatable, e.g. `--set sunAltitude=30`
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Shadow evaluation strategy: hull or slab
    #[arg(long, default_value = "hull")]
    backend: Backend,

    #[arg(long, value_enum, default_value_t = Output::Ascii)]
    output: Output,

    /// Text map columns
    #[arg(long, default_value_t = 72)]
    columns: usize,

    /// Text map rows
    #[arg(long, default_value_t = 36)]
    rows: usize,

    /// Viewport size in pixels for the render plan, `WIDTHxHEIGHT`
    #[arg(long, default_value = "1000x700")]
    viewport: String,

    /// Emit render plan coordinates in viewport pixels instead of meters
    #[arg(long)]
    pixels: bool,
}

fn parse_override(text: &str) -> Result<(&str, f64)> {
    let (name, value) = text
        .split_once('=')
        .with_context(|| format!("Expected NAME=VALUE, got `{text}`"))?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid number for {name}: `{value}`"))?;
    Ok((name.trim(), value))
}

fn parse_viewport(text: &str) -> Result<Viewport> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected WIDTHxHEIGHT, got `{text}`"))?;
    let w: f64 = w.trim().parse().context("Invalid viewport width")?;
    let h: f64 = h.trim().parse().context("Invalid viewport height")?;
    Viewport::new(w, h)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut store = match &cli.params {
        Some(path) => ParameterStore::from_params(read_params(path)?)?,
        None => ParameterStore::new(),
    };
    for text in &cli.overrides {
        let (name, value) = parse_override(text)?;
        let stored = store.set_by_name(name, value)?;
        info!(param = name, requested = value, stored, "parameter set");
    }

    let params = store.snapshot();
    let shadow_config = ShadowConfig::new();
    let geometry = solve(&params, &shadow_config);
    let readout = Readout::new(&params, &geometry);

    match cli.output {
        Output::Summary => println!("{readout}"),
        Output::Ascii => {
            let grid = SampleGrid::covering_ground(params.ground_size, cli.columns, cli.rows)?;
            let classifier = cli.backend.classifier(&geometry, &shadow_config);
            let map = classify_grid(classifier.as_ref(), &grid);
            println!("{readout}");
            println!();
            print!("{}", map.to_ascii());
        }
        Output::Plan => {
            let view_config = ViewConfig::new();
            let viewport = parse_viewport(&cli.viewport)?;
            let mapping =
                WorldToViewport::fit_ground(&viewport, params.ground_size, view_config.frame_margin)?;
            let mut plan = build_plan(&params, &geometry, &mapping, &view_config);
            if cli.pixels {
                plan = plan.to_viewport(&mapping);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("Failed to serialize render plan")?
            );
        }
        Output::Params => println!("{}", to_params_string(&params)?),
    }

    Ok(())
}
