// src/plot_functions/plot_parallel.rs

use std::path::Path;

use ndarray::Array2;
use plotters::style::RGBColor;
use tracing::debug;

use crate::constants::{
    BEZIER_SAMPLES_PER_SEGMENT, DEFAULT_LINE_WIDTH, DEFAULT_PADDING_FRACTION,
    PARALLEL_PLOT_HEIGHT, PARALLEL_PLOT_WIDTH,
};
use crate::data_analysis::curve_builder::{build_curves, CurveMode, RecordCurve};
use crate::data_analysis::range_normalizer::compute_ranges;
use crate::data_analysis::rescale::rescale_columns;
use crate::data_input::dataset::Dataset;
use crate::error::{PlotError, Result};
use crate::plot_framework::{draw_parallel_plot, ParallelPlotConfig, PlotSeries};
use crate::types::{AxisRange, FigureConfig};

/// How records are colored.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecordColors {
    /// Cycle through a categorical palette.
    #[default]
    Palette,
    /// One explicit color per record.
    PerRecord(Vec<RGBColor>),
    /// One scalar per record, mapped through the viridis colormap.
    Values(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallelOptions {
    /// Axis titles replacing the dataset labels.
    pub labels: Option<Vec<String>>,
    pub padding: f64,
    pub colors: RecordColors,
    pub line_width: u32,
    pub mode: CurveMode,
    pub figure: FigureConfig,
    pub title: Option<String>,
    /// Explicit axis ranges, one per column, used instead of the data extremes.
    pub ranges: Option<Vec<AxisRange>>,
    pub return_figure: bool,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            labels: None,
            padding: DEFAULT_PADDING_FRACTION,
            colors: RecordColors::default(),
            line_width: DEFAULT_LINE_WIDTH,
            mode: CurveMode::default(),
            figure: FigureConfig::new(PARALLEL_PLOT_WIDTH, PARALLEL_PLOT_HEIGHT),
            title: None,
            ranges: None,
            return_figure: true,
        }
    }
}

/// A computed parallel-coordinates figure.
#[derive(Debug, Clone)]
pub struct ParallelFigure {
    pub labels: Vec<String>,
    /// Padded display range of every axis.
    pub ranges: Vec<AxisRange>,
    /// Records mapped onto the first axis' range.
    pub rescaled: Array2<f64>,
    pub curves: Vec<RecordCurve>,
    pub colors: Vec<RGBColor>,
    pub line_width: u32,
    pub title: String,
    pub figure: FigureConfig,
}

impl ParallelFigure {
    pub fn plot_config(&self) -> ParallelPlotConfig {
        let series = self
            .curves
            .iter()
            .zip(&self.colors)
            .map(|(curve, &color)| PlotSeries {
                data: curve.to_polyline(BEZIER_SAMPLES_PER_SEGMENT),
                color,
                stroke_width: self.line_width,
            })
            .collect();
        ParallelPlotConfig {
            title: self.title.clone(),
            labels: self.labels.clone(),
            ranges: self.ranges.clone(),
            series,
            figure: self.figure,
        }
    }

    /// Renders the figure again, to another file or format.
    pub fn save(&self, output: &Path) -> Result<()> {
        draw_parallel_plot(output, &self.plot_config())
    }
}

/// Draws a parallel-coordinates plot of `data` into `output`.
///
/// Every column gets its own vertical axis; each record becomes one line
/// crossing every axis at its value. All input is validated before the file
/// is created. Returns the figure when `options.return_figure` is set.
pub fn parallel(
    data: &Dataset,
    options: &ParallelOptions,
    output: &Path,
) -> Result<Option<ParallelFigure>> {
    let figure = compute_parallel(data, options)?;
    figure.save(output)?;
    Ok(options.return_figure.then_some(figure))
}

/// Computes ranges, curves and colors without drawing anything.
pub fn compute_parallel(data: &Dataset, options: &ParallelOptions) -> Result<ParallelFigure> {
    let values = data.values();
    let labels = match &options.labels {
        Some(labels) if labels.len() != data.n_columns() => {
            return Err(PlotError::Shape(format!(
                "{} labels given for {} columns",
                labels.len(),
                data.n_columns()
            )));
        }
        Some(labels) => labels.clone(),
        None => data.labels().to_vec(),
    };

    let ranges = compute_ranges(values, options.ranges.as_deref(), options.padding)?;
    let rescaled = rescale_columns(values, &ranges)?;
    let curves = build_curves(rescaled.view(), options.mode)?;
    let colors = resolve_colors(&options.colors, data.n_records())?;
    debug!(
        "Parallel plot: {} records over {} axes ({:?})",
        data.n_records(),
        data.n_columns(),
        options.mode
    );

    Ok(ParallelFigure {
        labels,
        ranges,
        rescaled,
        curves,
        colors,
        line_width: options.line_width,
        title: options.title.clone().unwrap_or_default(),
        figure: options.figure,
    })
}

/// One color per record.
pub fn resolve_colors(colors: &RecordColors, n_records: usize) -> Result<Vec<RGBColor>> {
    let check_count = |given: usize| {
        if given == n_records {
            Ok(())
        } else {
            Err(PlotError::InvalidValue(format!(
                "{given} colors given for {n_records} records"
            )))
        }
    };

    match colors {
        RecordColors::Palette => Ok((0..n_records)
            .map(|record| {
                let palette = &colorous::CATEGORY10;
                to_rgb(palette[record % palette.len()])
            })
            .collect()),
        RecordColors::PerRecord(colors) => {
            check_count(colors.len())?;
            Ok(colors.clone())
        }
        RecordColors::Values(values) => {
            check_count(values.len())?;
            if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                return Err(PlotError::InvalidValue(format!(
                    "color values must be finite, got {bad}"
                )));
            }
            let (min, max) = values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            let span = max - min;
            Ok(values
                .iter()
                .map(|&v| {
                    let t = if span > 0.0 { (v - min) / span } else { 0.5 };
                    to_rgb(colorous::VIRIDIS.eval_continuous(t))
                })
                .collect())
        }
    }
}

fn to_rgb(color: colorous::Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_column_data() -> Dataset {
        Dataset::from_pairs([("a", vec![0.0, 10.0]), ("b", vec![100.0, 200.0])]).unwrap()
    }

    #[test]
    fn test_compute_parallel_matches_pipeline() {
        let options = ParallelOptions {
            padding: 0.0,
            ..Default::default()
        };
        let figure = compute_parallel(&two_column_data(), &options).unwrap();
        assert_eq!(figure.ranges[0], AxisRange::new(0.0, 10.0));
        assert_eq!(figure.ranges[1], AxisRange::new(100.0, 200.0));
        assert_abs_diff_eq!(figure.rescaled[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(figure.rescaled[[1, 1]], 10.0, epsilon = 1e-12);
        assert_eq!(figure.curves.len(), 2);
        assert_eq!(figure.colors.len(), 2);
        assert_eq!(figure.labels, ["a", "b"]);
    }

    #[test]
    fn test_plot_config_has_one_series_per_record() {
        let figure = compute_parallel(&two_column_data(), &ParallelOptions::default()).unwrap();
        let config = figure.plot_config();
        assert_eq!(config.series.len(), 2);
        // Two axes, one cubic segment sampled BEZIER_SAMPLES_PER_SEGMENT times.
        assert_eq!(config.series[0].data.len(), BEZIER_SAMPLES_PER_SEGMENT + 1);
        assert_eq!(config.series[0].stroke_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_label_override_count() {
        let options = ParallelOptions {
            labels: Some(vec!["x".into()]),
            ..Default::default()
        };
        assert!(matches!(
            compute_parallel(&two_column_data(), &options),
            Err(PlotError::Shape(_))
        ));
    }

    #[test]
    fn test_color_count_must_match_records() {
        let colors = RecordColors::PerRecord(vec![RGBColor(0, 0, 0)]);
        assert!(matches!(
            resolve_colors(&colors, 2),
            Err(PlotError::InvalidValue(_))
        ));
        let colors = RecordColors::Values(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            resolve_colors(&colors, 2),
            Err(PlotError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_value_colors_follow_viridis() {
        let colors = resolve_colors(&RecordColors::Values(vec![0.0, 1.0]), 2).unwrap();
        assert_eq!(colors[0], to_rgb(colorous::VIRIDIS.eval_continuous(0.0)));
        assert_eq!(colors[1], to_rgb(colorous::VIRIDIS.eval_continuous(1.0)));
    }

    #[test]
    fn test_palette_cycles() {
        let colors = resolve_colors(&RecordColors::Palette, 12).unwrap();
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], colors[10]);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_render_svg_and_return_figure() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("parallel.svg");
        let options = ParallelOptions {
            title: Some("Random records".into()),
            ..Default::default()
        };
        let figure = parallel(&two_column_data(), &options, &output).unwrap();
        assert!(figure.is_some());
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));

        let options = ParallelOptions {
            return_figure: false,
            mode: CurveMode::Linear,
            ..Default::default()
        };
        let other = dir.path().join("linear.svg");
        assert!(parallel(&two_column_data(), &options, &other).unwrap().is_none());
        assert!(other.exists());
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.svg");
        let options = ParallelOptions {
            colors: RecordColors::PerRecord(vec![]),
            ..Default::default()
        };
        assert!(parallel(&two_column_data(), &options, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_nan_range_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nan_range.svg");
        let options = ParallelOptions {
            ranges: Some(vec![
                AxisRange::new(f64::NAN, 1.0),
                AxisRange::new(100.0, 200.0),
            ]),
            ..Default::default()
        };
        let result = parallel(&two_column_data(), &options, &output);
        assert!(matches!(result, Err(PlotError::InvalidValue(_))));
        assert!(!output.exists());
    }
}

// src/plot_functions/plot_parallel.rs
