// src/main.rs

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use parallel_plot_render::data_analysis::aligned_layout::AlignedOptions;
use parallel_plot_render::data_analysis::curve_builder::CurveMode;
use parallel_plot_render::data_input::csv_input::read_dataset;
use parallel_plot_render::types::FigureConfig;
use parallel_plot_render::{aligned_parallel, parallel, ParallelOptions, RecordColors};

#[derive(Parser)]
#[command(name = "parallel_plot_render", version)]
#[command(about = "Parallel-coordinates and aligned-panel plots from CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw every column as a parallel axis and every row as one line
    Parallel {
        /// Input CSV file with a header row
        input: PathBuf,
        /// Output image; `.svg` writes SVG, anything else PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Straight segments instead of Bezier curves
        #[arg(long)]
        linear: bool,
        /// Axis padding as a fraction of each axis' span
        #[arg(long, default_value_t = 0.05)]
        padding: f64,
        #[arg(long, default_value_t = 1)]
        line_width: u32,
        #[arg(long)]
        title: Option<String>,
        /// Column used to color the records instead of being drawn as an axis
        #[arg(long)]
        color_column: Option<String>,
        #[arg(long, default_value_t = 750)]
        width: u32,
        #[arg(long, default_value_t = 300)]
        height: u32,
    },
    /// Draw every column as a panel against a shared position column
    Aligned {
        input: PathBuf,
        /// Column holding the vertical position of every row
        #[arg(long)]
        position_column: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Use the global value range on every panel
        #[arg(long)]
        share_limits: bool,
        #[arg(long)]
        slider: bool,
        #[arg(long)]
        slider_label: Option<String>,
        /// Initial readout position
        #[arg(long)]
        y: Option<f64>,
        #[arg(long, default_value_t = 0.0)]
        xoffset: f64,
        #[arg(long, default_value_t = 0.0)]
        yoffset: f64,
        #[arg(long = "ytick")]
        yticks: Vec<f64>,
        #[arg(long = "hline")]
        hlines: Vec<f64>,
        #[arg(long = "vline")]
        vlines: Vec<f64>,
        #[arg(long)]
        suptitle: Option<String>,
        /// Rotation of the horizontal tick labels in degrees
        #[arg(long, default_value_t = 0.0)]
        rotation: f64,
        /// Move the readout through this many positions, one frame each
        #[arg(long)]
        sweep: Option<usize>,
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long, default_value_t = 720)]
        height: u32,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parallel {
            input,
            output,
            linear,
            padding,
            line_width,
            title,
            color_column,
            width,
            height,
        } => {
            let mut data = read_dataset(&input)?;
            let colors = match color_column {
                Some(column) => RecordColors::Values(data.take_column(&column)?),
                None => RecordColors::Palette,
            };
            let options = ParallelOptions {
                padding,
                colors,
                line_width,
                mode: if linear {
                    CurveMode::Linear
                } else {
                    CurveMode::Bezier
                },
                figure: FigureConfig::new(width, height),
                title,
                return_figure: false,
                ..Default::default()
            };
            let output = output.unwrap_or_else(|| default_output(&input, "parallel"));
            parallel(&data, &options, &output)?;
        }
        Commands::Aligned {
            input,
            position_column,
            output,
            share_limits,
            slider,
            slider_label,
            y,
            xoffset,
            yoffset,
            yticks,
            hlines,
            vlines,
            suptitle,
            rotation,
            sweep,
            width,
            height,
        } => {
            let mut data = read_dataset(&input)?;
            let datapos = data.take_column(&position_column)?;
            let options = AlignedOptions {
                yticks: (!yticks.is_empty()).then_some(yticks),
                sharelimits: share_limits,
                xticks_rotation: rotation,
                suptitle,
                slider,
                slider_label,
                hlines,
                vlines,
                y,
                xoffset,
                yoffset,
                figure: FigureConfig::new(width, height),
                return_figure: sweep.is_some(),
                ..Default::default()
            };
            let output = output.unwrap_or_else(|| default_output(&input, "aligned"));
            let figure = aligned_parallel(&data, &datapos, &options, &output)?;
            if let (Some(steps), Some(figure)) = (sweep, figure) {
                let frames = figure.sweep(&output, steps)?;
                info!("Readout sweep finished: {} frames.", frames.len());
            }
        }
    }
    Ok(())
}

// `<input stem>_<kind>.png` next to the input file.
fn default_output(input: &Path, kind: &str) -> PathBuf {
    let root_name = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{root_name}_{kind}.png"))
}

// src/main.rs
