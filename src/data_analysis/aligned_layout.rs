// src/data_analysis/aligned_layout.rs

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use tracing::debug;

use crate::constants::{
    ALIGNED_PLOT_HEIGHT, ALIGNED_PLOT_WIDTH, AUTOSCALE_HALF_WIDTH, TICK_SIG_DIGITS,
    X_LIMIT_TOLERANCE,
};
use crate::data_input::dataset::Dataset;
use crate::error::{PlotError, Result};
use crate::formatting::float_to_str_sig;
use crate::types::{AxisRange, FigureConfig, Polyline};

/// Options of an aligned-panel figure.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedOptions {
    /// Panel order; defaults to the dataset's column order.
    pub labels: Option<Vec<String>>,
    /// Tick positions on the shared vertical axis (first panel only).
    pub yticks: Option<Vec<f64>>,
    /// Use the global value range for every panel's horizontal axis.
    pub sharelimits: bool,
    /// Panel titles replacing the labels, one per panel.
    pub texlabels: Option<Vec<String>>,
    /// Rotation of the horizontal tick labels, in degrees.
    pub xticks_rotation: f64,
    pub suptitle: Option<String>,
    pub slider: bool,
    pub slider_label: Option<String>,
    /// Positions of extra horizontal reference lines.
    pub hlines: Vec<f64>,
    /// Values of vertical reference lines.
    pub vlines: Vec<f64>,
    /// Initial readout position; defaults to the middle of the position range.
    pub y: Option<f64>,
    /// Horizontal margin as a fraction of the panel's value span.
    pub xoffset: f64,
    /// Vertical margin as a fraction of the position span.
    pub yoffset: f64,
    pub figure: FigureConfig,
    pub return_figure: bool,
}

impl Default for AlignedOptions {
    fn default() -> Self {
        Self {
            labels: None,
            yticks: None,
            sharelimits: false,
            texlabels: None,
            xticks_rotation: 0.0,
            suptitle: None,
            slider: false,
            slider_label: None,
            hlines: Vec::new(),
            vlines: Vec::new(),
            y: None,
            xoffset: 0.0,
            yoffset: 0.0,
            figure: FigureConfig::new(ALIGNED_PLOT_WIDTH, ALIGNED_PLOT_HEIGHT),
            return_figure: true,
        }
    }
}

/// Current readout of one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// Vertical position of the marker line.
    pub position: f64,
    pub value: f64,
    pub text: String,
    pub visible: bool,
}

/// One sub-plot of the aligned figure, holding one data series.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub label: String,
    pub title: String,
    pub values: Vec<f64>,
    /// Extremes of this panel's own values.
    pub min: f64,
    pub max: f64,
    /// Range used for the horizontal axis (own or shared).
    pub value_range: AxisRange,
    /// Horizontal limits including the margin; `None` autoscales a constant panel.
    pub x_limits: Option<AxisRange>,
    pub x_ticks: [f64; 2],
    pub x_tick_labels: [String; 2],
    /// Plotted pairs of (value, position).
    pub curve: Polyline,
    pub readout: Readout,
}

impl Panel {
    /// Horizontal limits the renderer should use.
    pub fn display_x_range(&self) -> AxisRange {
        self.x_limits.unwrap_or_else(|| {
            AxisRange::new(
                self.value_range.min - AUTOSCALE_HALF_WIDTH,
                self.value_range.max + AUTOSCALE_HALF_WIDTH,
            )
        })
    }
}

/// Settings of the slider column.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub label: String,
    pub range: AxisRange,
}

/// Everything needed to draw an aligned-panel figure.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedLayout {
    pub panels: Vec<Panel>,
    /// Extremes over all panels' values.
    pub global: AxisRange,
    /// Extremes of the position sequence.
    pub positions: AxisRange,
    /// Vertical limits shared by every panel.
    pub y_limits: AxisRange,
    pub y_ticks: Vec<f64>,
    pub y_tick_labels: Vec<String>,
    /// Horizontal reference lines: the outer y ticks followed by the extra lines.
    pub hlines: Vec<f64>,
    pub vlines: Vec<f64>,
    pub initial_position: f64,
    pub slider: Option<SliderSpec>,
    pub suptitle: String,
    pub xticks_rotation: f64,
    pub figure: FigureConfig,
}

/// Computes panel ranges, limits, ticks and curves for aligned panels.
///
/// `datapos` holds the shared vertical position of every record and must be
/// as long as each data column.
pub fn compute_aligned_layout(
    data: &Dataset,
    datapos: &[f64],
    options: &AlignedOptions,
) -> Result<AlignedLayout> {
    let labels: Vec<String> = match &options.labels {
        Some(labels) => labels.clone(),
        None => data.labels().to_vec(),
    };
    if labels.is_empty() {
        return Err(PlotError::Shape("at least one panel is required".into()));
    }
    if datapos.len() != data.n_records() {
        return Err(PlotError::InvalidValue(format!(
            "{} positions given for columns of length {}",
            datapos.len(),
            data.n_records()
        )));
    }
    if let Some(texlabels) = &options.texlabels {
        if texlabels.len() != labels.len() {
            return Err(PlotError::InvalidValue(format!(
                "{} panel titles given for {} panels",
                texlabels.len(),
                labels.len()
            )));
        }
    }
    for (name, value) in [("xoffset", options.xoffset), ("yoffset", options.yoffset)] {
        if !value.is_finite() {
            return Err(PlotError::InvalidValue(format!("{name} must be finite, got {value}")));
        }
    }

    let positions = value_extremes(ArrayView1::from(datapos), "positions")?;

    // Per-panel extremes; a missing label fails before anything else is built.
    let mut columns = Vec::with_capacity(labels.len());
    for label in &labels {
        let column = data
            .column(label)
            .ok_or_else(|| PlotError::MissingLabel(label.clone()))?;
        let extremes = value_extremes(column, label)?;
        columns.push((label, column, extremes));
    }
    let global = columns.iter().fold(
        AxisRange::new(f64::INFINITY, f64::NEG_INFINITY),
        |acc, (_, _, own)| AxisRange::new(acc.min.min(own.min), acc.max.max(own.max)),
    );
    debug!(
        "Aligned layout: {} panels, global range {:?}, positions {:?}",
        labels.len(),
        global,
        positions
    );

    let initial_position = options.y.unwrap_or_else(|| positions.midpoint());
    let panels = columns
        .into_iter()
        .enumerate()
        .map(|(index, (label, column, own))| {
            let value_range = if options.sharelimits { global } else { own };
            let title = options
                .texlabels
                .as_ref()
                .map_or_else(|| label.clone(), |titles| titles[index].clone());
            let values = column.to_vec();
            let curve = values.iter().copied().zip(datapos.iter().copied()).collect();
            Panel {
                label: label.clone(),
                title,
                values,
                min: own.min,
                max: own.max,
                value_range,
                x_limits: horizontal_limits(value_range, options.xoffset),
                x_ticks: [value_range.min, value_range.max],
                x_tick_labels: [
                    float_to_str_sig(value_range.min, TICK_SIG_DIGITS),
                    float_to_str_sig(value_range.max, TICK_SIG_DIGITS),
                ],
                curve,
                readout: Readout {
                    position: initial_position,
                    value: f64::NAN,
                    text: "NaN".to_string(),
                    visible: false,
                },
            }
        })
        .collect();

    let y_ticks = options.yticks.clone().unwrap_or_default();
    let y_tick_labels = y_ticks
        .iter()
        .map(|&tick| float_to_str_sig(tick, TICK_SIG_DIGITS))
        .collect();
    let mut hlines: Vec<f64> = match (y_ticks.first(), y_ticks.last()) {
        (Some(&first), Some(&last)) if first != last => vec![first, last],
        (Some(&first), _) => vec![first],
        _ => Vec::new(),
    };
    hlines.extend(options.hlines.iter().copied());

    Ok(AlignedLayout {
        panels,
        global,
        positions,
        y_limits: vertical_limits(positions, options.yoffset),
        y_ticks,
        y_tick_labels,
        hlines,
        vlines: options.vlines.clone(),
        initial_position,
        slider: options.slider.then(|| SliderSpec {
            label: options.slider_label.clone().unwrap_or_default(),
            range: positions,
        }),
        suptitle: options.suptitle.clone().unwrap_or_default(),
        xticks_rotation: options.xticks_rotation,
        figure: options.figure,
    })
}

/// Horizontal limits with a symmetric margin, or `None` for a constant panel.
pub fn horizontal_limits(range: AxisRange, xoffset: f64) -> Option<AxisRange> {
    if range.span().abs() > X_LIMIT_TOLERANCE {
        Some(range.padded(xoffset))
    } else {
        None
    }
}

/// Vertical limits with a symmetric margin; a single position is widened so
/// the panel keeps a usable height.
pub fn vertical_limits(positions: AxisRange, yoffset: f64) -> AxisRange {
    if positions.span().abs() > X_LIMIT_TOLERANCE {
        positions.padded(yoffset)
    } else {
        AxisRange::new(
            positions.min - AUTOSCALE_HALF_WIDTH,
            positions.max + AUTOSCALE_HALF_WIDTH,
        )
    }
}

fn value_extremes(values: ArrayView1<'_, f64>, name: &str) -> Result<AxisRange> {
    let min = values
        .min()
        .map_err(|e| PlotError::InvalidValue(format!("{name} has no finite minimum: {e}")))?;
    let max = values
        .max()
        .map_err(|e| PlotError::InvalidValue(format!("{name} has no finite maximum: {e}")))?;
    Ok(AxisRange::new(*min, *max))
}


// src/data_analysis/aligned_layout.rs
