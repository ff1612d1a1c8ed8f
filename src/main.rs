//! `smooth`: renders B-spline curves through a point sequence as SVG.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use smooth_rs::{parse_points, render_svg, CurveSet, Layer, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "smooth", version, about = "Smooth curves through 2D points, rendered as SVG")]
struct Cli {
    /// Point list as space-separated integers (`x0 y0 x1 y1 ...`). Use `-` to read stdin.
    input: Option<String>,

    /// Read the point list from a file instead.
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// TOML render options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective render options to this path.
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Make a layer visible (repeatable).
    #[arg(long = "show", value_name = "LAYER")]
    show: Vec<Layer>,

    /// Hide a layer (repeatable).
    #[arg(long = "hide", value_name = "LAYER")]
    hide: Vec<Layer>,

    /// Write the SVG here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log the recovered control polygons.
    #[arg(long)]
    print_control_points: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(cli: &Cli, options: &RenderOptions) -> anyhow::Result<String> {
    if let Some(path) = &cli.input_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display()));
    }
    match cli.input.as_deref() {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading input from stdin")?;
            Ok(text)
        }
        Some(text) => Ok(text.to_string()),
        None => Ok(options.default_input.clone()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut options = match &cli.config {
        Some(path) => RenderOptions::load_from_file(path),
        None => RenderOptions::default(),
    };
    for &layer in &cli.show {
        options.show(layer);
    }
    for &layer in &cli.hide {
        options.hide(layer);
    }
    if let Some(path) = &cli.write_config {
        options.save_to_file(path)?;
    }

    let text = read_input(&cli, &options)?;
    let points = parse_points(&text);
    log::info!("Parsed {} points", points.len());

    let curves = CurveSet::compute(&points);
    if cli.print_control_points {
        for (name, polygon) in [
            ("smooth", &curves.smooth_polygon),
            ("oldSmooth", &curves.legacy_polygon),
        ] {
            match polygon {
                Ok(p) => log::info!("{} control points: {:?}", name, p),
                Err(e) => log::warn!("{} control points unavailable: {}", name, e),
            }
        }
    }

    let svg = render_svg(&curves, &options);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}
