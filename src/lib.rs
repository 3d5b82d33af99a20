// src/lib.rs - Library interface for the plotting pipelines

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod formatting;
pub mod plot_framework;
pub mod plot_functions;
pub mod readout;
pub mod types;

pub use data_input::dataset::Dataset;
pub use error::{PlotError, Result};
pub use plot_functions::plot_aligned::{aligned_parallel, AlignedFigure};
pub use plot_functions::plot_parallel::{parallel, ParallelFigure, ParallelOptions, RecordColors};
