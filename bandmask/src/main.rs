//! bandmask CLI: marks pixels whose intensity lies in a `[low, high)` band.

use std::path::PathBuf;

use anyhow::Context;
use bandmask::{read_gray, save_mask, SegmentationConfig};
use clap::Parser;
use common::log_setup::setup_logging;
use ndarray::Array2;

#[derive(Parser)]
#[command(name = "bandmask")]
#[command(about = "Segment an image by an intensity band [low, high)")]
#[command(version)]
struct Cli {
    /// Path to the input image (png, jpg, tiff).
    input: PathBuf,

    /// Path to write the mask image.
    output: PathBuf,

    /// Inclusive lower bound of the band, in normalized intensity.
    #[arg(long)]
    low: Option<f64>,

    /// Exclusive upper bound of the band, in normalized intensity.
    #[arg(long)]
    high: Option<f64>,

    /// YAML or JSON config file. Command-line bounds override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug`. Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Fail on reversed or non-finite bounds.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SegmentationConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SegmentationConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    let _logger = setup_logging(&config.log_level);

    let thresholds = config
        .resolve_thresholds(cli.low, cli.high, cli.strict)
        .context("Invalid thresholds")?;

    let img = read_gray(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let mask: Array2<f32> = thresholds.segment(&img);

    let in_band = mask.iter().filter(|&&v| v == 1.0).count();
    let fraction = in_band as f64 / mask.len().max(1) as f64;
    log::info!(
        "{} of {} pixels ({:.2}%) in [{}, {})",
        in_band,
        mask.len(),
        fraction * 100.0,
        thresholds.low,
        thresholds.high
    );

    save_mask(&mask, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
