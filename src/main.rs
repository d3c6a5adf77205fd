use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sprite_slicer_rs::image_pipeline::{
    ChromaKeyParams, Connectivity, ExtractionConfig, GridSpec, IconLayout, PngCompression,
    SpriteToIconsPipeline,
};
use sprite_slicer_rs::logger;

use tracing::{error, info};

/// Slice a chroma-keyed sprite sheet into trimmed, transparent PNG icons.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Sprite sheet to slice (JPEG or PNG)
    #[arg(short, long, default_value = "apps/frontend/public/assets/generated-sprite.jpeg", value_hint = clap::ValueHint::FilePath)]
    source: PathBuf,

    /// Directory the icons are written to (created if missing)
    #[arg(short, long, default_value = "apps/frontend/public/assets/incident-types", value_hint = clap::ValueHint::DirPath)]
    output: PathBuf,

    /// TOML manifest with `columns`, `rows` and `[[icons]]` entries
    /// (default: built-in incident-type table)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    layout: Option<PathBuf>,

    /// Override the layout's column count
    #[arg(long)]
    columns: Option<u32>,

    /// Override the layout's row count
    #[arg(long)]
    rows: Option<u32>,

    /// Key hue in degrees
    #[arg(long, default_value_t = 120.0)]
    hue_center: f32,

    /// Maximum hue distance in degrees for a background pixel
    #[arg(long, default_value_t = 35.0)]
    hue_tolerance: f32,

    /// Minimum saturation (percent) for a background pixel
    #[arg(long, default_value_t = 50.0)]
    min_saturation: f32,

    /// Minimum value (percent) for a background pixel
    #[arg(long, default_value_t = 50.0)]
    min_value: f32,

    /// Dilation passes applied to the background mask
    #[arg(long, default_value_t = 2)]
    dilation: u32,

    /// Dilate with corner neighbors too
    #[arg(long)]
    eight_connected: bool,

    /// Alpha values below this become transparent, the rest opaque
    #[arg(long, default_value_t = 64)]
    alpha_threshold: u8,

    /// Transparent margin in pixels around each icon
    #[arg(long, default_value_t = 10)]
    padding: u32,

    /// PNG compression: fast, default or best
    #[arg(long, default_value_t = PngCompression::Default)]
    compression: PngCompression,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> ExtractionConfig {
        let connectivity = if self.eight_connected {
            Connectivity::Eight
        } else {
            Connectivity::Four
        };

        ExtractionConfig::builder()
            .chroma_key(
                ChromaKeyParams::builder()
                    .hue_center(self.hue_center)
                    .hue_tolerance(self.hue_tolerance)
                    .min_saturation(self.min_saturation)
                    .min_value(self.min_value)
                    .dilation_iterations(self.dilation)
                    .connectivity(connectivity)
                    .build(),
            )
            .alpha_threshold(self.alpha_threshold)
            .padding(self.padding)
            .compression(self.compression)
            .build()
    }

    fn layout(&self) -> anyhow::Result<IconLayout> {
        let layout = match &self.layout {
            Some(path) => IconLayout::load(path)
                .with_context(|| format!("loading layout {}", path.display()))?,
            None => IconLayout::incident_types(),
        };

        let grid = layout.grid();
        let grid = GridSpec::new(
            self.columns.unwrap_or(grid.columns),
            self.rows.unwrap_or(grid.rows),
        );
        Ok(layout.with_grid(grid))
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let layout = cli.layout()?;
    let pipeline = SpriteToIconsPipeline::new(cli.config());

    info!(
        source = %cli.source.display(),
        output = %cli.output.display(),
        icons = layout.len(),
        "Starting sprite extraction"
    );
    info!("Chroma key: {:?}", pipeline.config().chroma_key);

    let report = pipeline
        .extract_file(&cli.source, &layout, &cli.output)
        .with_context(|| format!("extracting icons from {}", cli.source.display()))?;

    if report.degenerate_count() > 0 {
        info!(
            "{} of {} cells had no foreground after keying",
            report.degenerate_count(),
            report.len()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
