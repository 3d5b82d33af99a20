// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::BLACK;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::path::Path;

use ndarray::Array1;
use tracing::info;

use crate::constants::{
    AXIS_LABEL_AREA_PX, AXIS_TICK_COUNT, CHAR_WIDTH_RATIO, COLOR_AXIS_LINE,
    COLOR_PANEL_BACKGROUND, COLOR_PANEL_CURVE, COLOR_READOUT_LABEL_FILL, COLOR_READOUT_MARKER,
    COLOR_SLIDER_FILL, COLOR_SLIDER_TRACK, FIGURE_MARGIN_PX, FONT_SIZE_READOUT,
    LEFT_MARGIN_RATIO, LINE_WIDTH_CURVE_PANEL, LINE_WIDTH_MARKER, LINE_WIDTH_REFERENCE,
    PANEL_SPACING_RATIO, PANEL_TITLE_AREA_PX, SLIDER_WIDTH_RATIO, TICK_LENGTH_PX,
    TICK_SIG_DIGITS, TITLE_AREA_PX, X_TICK_AREA_PX,
};
use crate::data_analysis::aligned_layout::{AlignedLayout, Panel};
use crate::data_analysis::rescale::axis_to_host;
use crate::error::{PlotError, Result};
use crate::font_config::{
    rotation_transform, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_READOUT, FONT_TUPLE_TICK_LABEL,
};
use crate::formatting::float_to_str_sig;
use crate::readout::Slider;
use crate::types::{AxisRange, FigureConfig, Polyline};

/// Image format of a rendered figure, picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Polyline,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Everything the parallel-coordinates renderer draws. Series are already in
/// host coordinates (axis index on x, column 0's range on y).
#[derive(Debug, Clone)]
pub struct ParallelPlotConfig {
    pub title: String,
    pub labels: Vec<String>,
    pub ranges: Vec<AxisRange>,
    pub series: Vec<PlotSeries>,
    pub figure: FigureConfig,
}

/// Renders a parallel-coordinates figure to `output`.
pub fn draw_parallel_plot(output: &Path, config: &ParallelPlotConfig) -> Result<()> {
    let size = config.figure.size();
    match OutputFormat::from_path(output) {
        OutputFormat::Png => {
            let root = BitMapBackend::new(output, size).into_drawing_area();
            draw_parallel_chart(&root, config)?;
            root.present()?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(output, size).into_drawing_area();
            draw_parallel_chart(&root, config)?;
            root.present()?;
        }
    }
    info!("Parallel plot saved as '{}'.", output.display());
    Ok(())
}

/// Renders an aligned-panel figure to `output` with the readout at `position`.
///
/// `panels` carries the current readout state and normally comes from the
/// layout itself or from a live figure.
pub fn draw_aligned_plot(
    output: &Path,
    layout: &AlignedLayout,
    panels: &[Panel],
    position: f64,
) -> Result<()> {
    let size = layout.figure.size();
    match OutputFormat::from_path(output) {
        OutputFormat::Png => {
            let root = BitMapBackend::new(output, size).into_drawing_area();
            draw_aligned_chart(&root, layout, panels, position)?;
            root.present()?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(output, size).into_drawing_area();
            draw_aligned_chart(&root, layout, panels, position)?;
            root.present()?;
        }
    }
    info!("Aligned plot saved as '{}'.", output.display());
    Ok(())
}

/// Evenly spaced tick values across one parallel axis.
pub fn axis_ticks(range: AxisRange) -> Vec<f64> {
    Array1::linspace(range.min, range.max, AXIS_TICK_COUNT).to_vec()
}

/// Horizontal pixel spans `(offset, width)` of the panels, followed by the
/// slider column when present. Gaps between columns are
/// `PANEL_SPACING_RATIO` of a panel width; the slider is
/// `SLIDER_WIDTH_RATIO` of a panel width.
pub fn column_spans(total_width: i32, n_panels: usize, with_slider: bool) -> Vec<(i32, i32)> {
    let n_gaps = n_panels.saturating_sub(1) + usize::from(with_slider);
    let units = n_panels as f64
        + n_gaps as f64 * PANEL_SPACING_RATIO
        + if with_slider { SLIDER_WIDTH_RATIO } else { 0.0 };
    if units <= 0.0 {
        return Vec::new();
    }
    let unit = f64::from(total_width.max(0)) / units;
    let mut widths = vec![unit; n_panels];
    if with_slider {
        widths.push(unit * SLIDER_WIDTH_RATIO);
    }

    let mut spans = Vec::with_capacity(widths.len());
    let mut cursor: f64 = 0.0;
    for width in widths {
        spans.push((cursor.round() as i32, width.round() as i32));
        cursor += width + unit * PANEL_SPACING_RATIO;
    }
    spans
}

/// The readout marker is only drawn inside the panel's vertical limits.
fn marker_in_view(y_limits: AxisRange, position: f64) -> bool {
    position.is_finite() && y_limits.contains(position)
}

fn draw_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    pos: (i32, i32),
    font: (&'static str, i32),
    anchor: Pos,
) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let style = font.into_font().color(&BLACK).pos(anchor);
    area.draw(&Text::new(text.to_string(), pos, style))?;
    Ok(())
}

fn draw_parallel_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ParallelPlotConfig,
) -> Result<()> {
    let host = config
        .ranges
        .first()
        .copied()
        .ok_or_else(|| PlotError::Shape("at least one axis is required".into()))?;
    let n_axes = config.ranges.len();
    let x_max = n_axes.saturating_sub(1).max(1) as f64;
    let (width, _) = root.dim_in_pixel();

    root.fill(&config.figure.background)?;
    let mut top = FIGURE_MARGIN_PX + AXIS_LABEL_AREA_PX;
    if !config.title.is_empty() {
        draw_label(
            root,
            &config.title,
            (width as i32 / 2, FIGURE_MARGIN_PX),
            FONT_TUPLE_CHART_TITLE,
            Pos::new(HPos::Center, VPos::Top),
        )?;
        top += TITLE_AREA_PX;
    }

    let side = (f64::from(width) * LEFT_MARGIN_RATIO * 0.5) as i32;
    let mut chart = ChartBuilder::on(root)
        .margin(FIGURE_MARGIN_PX)
        .margin_top(top)
        .margin_left(side)
        .margin_right(side)
        .build_cartesian_2d(0.0..x_max, host.as_range())?;

    for series in &config.series {
        chart.draw_series(LineSeries::new(
            series.data.iter().copied(),
            series.color.stroke_width(series.stroke_width),
        ))?;
    }

    // Axes are drawn over the curves so every tick stays readable.
    for (axis, (label, &range)) in config.labels.iter().zip(&config.ranges).enumerate() {
        let x = axis as f64;
        let (px, top_py) = chart.backend_coord(&(x, host.max));
        let (_, bottom_py) = chart.backend_coord(&(x, host.min));
        root.draw(&PathElement::new(
            vec![(px, top_py), (px, bottom_py)],
            COLOR_AXIS_LINE.stroke_width(LINE_WIDTH_REFERENCE),
        ))?;

        // Ticks point into the plot: right of every axis but the last.
        let is_last = axis + 1 == n_axes && n_axes > 1;
        let (direction, hpos) = if is_last {
            (-1, HPos::Right)
        } else {
            (1, HPos::Left)
        };
        for tick in axis_ticks(range) {
            let (_, py) = chart.backend_coord(&(x, axis_to_host(tick, range, host)));
            root.draw(&PathElement::new(
                vec![(px, py), (px + direction * TICK_LENGTH_PX, py)],
                COLOR_AXIS_LINE.stroke_width(LINE_WIDTH_REFERENCE),
            ))?;
            draw_label(
                root,
                &float_to_str_sig(tick, TICK_SIG_DIGITS),
                (px + direction * (TICK_LENGTH_PX + 2), py),
                FONT_TUPLE_TICK_LABEL,
                Pos::new(hpos, VPos::Center),
            )?;
        }

        draw_label(
            root,
            label,
            (px, top_py - 6),
            FONT_TUPLE_AXIS_LABEL,
            Pos::new(HPos::Center, VPos::Bottom),
        )?;
    }
    Ok(())
}

fn draw_aligned_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &AlignedLayout,
    panels: &[Panel],
    position: f64,
) -> Result<()> {
    let (width, _) = root.dim_in_pixel();
    root.fill(&layout.figure.background)?;

    let mut top = FIGURE_MARGIN_PX;
    if !layout.suptitle.is_empty() {
        draw_label(
            root,
            &layout.suptitle,
            (width as i32 / 2, FIGURE_MARGIN_PX),
            FONT_TUPLE_MAIN_TITLE,
            Pos::new(HPos::Center, VPos::Top),
        )?;
        top += TITLE_AREA_PX;
    }
    let left = (f64::from(width) * LEFT_MARGIN_RATIO) as i32;
    let body = root.margin(top, FIGURE_MARGIN_PX, left, FIGURE_MARGIN_PX);
    let (body_width, body_height) = body.dim_in_pixel();

    let spans = column_spans(body_width as i32, panels.len(), layout.slider.is_some());
    for (index, (panel, &(offset, span))) in panels.iter().zip(&spans).enumerate() {
        let area = body
            .clone()
            .shrink((offset, 0), (span.max(1), body_height as i32));
        draw_panel(root, &area, layout, panel, index == 0)?;
    }

    if let (Some(slider), Some(&(offset, span))) = (&layout.slider, spans.get(panels.len())) {
        let area = body
            .clone()
            .shrink((offset, 0), (span.max(1), body_height as i32));
        let slider = Slider::new(slider.label.clone(), slider.range, position);
        draw_slider(root, &area, layout, &slider)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    area: &DrawingArea<DB, Shift>,
    layout: &AlignedLayout,
    panel: &Panel,
    show_y_ticks: bool,
) -> Result<()> {
    let x_range = panel.display_x_range();
    let y_range = layout.y_limits;
    let mut chart = ChartBuilder::on(area)
        .margin_top(PANEL_TITLE_AREA_PX)
        .x_label_area_size(X_TICK_AREA_PX)
        .build_cartesian_2d(x_range.as_range(), y_range.as_range())?;

    chart.plotting_area().fill(&COLOR_PANEL_BACKGROUND)?;
    chart.plotting_area().draw(&Rectangle::new(
        [(x_range.min, y_range.min), (x_range.max, y_range.max)],
        BLACK.stroke_width(LINE_WIDTH_REFERENCE),
    ))?;

    let (pixels_x, pixels_y) = area.get_pixel_range();
    draw_label(
        root,
        &panel.title,
        ((pixels_x.start + pixels_x.end) / 2, pixels_y.start + 4),
        FONT_TUPLE_CHART_TITLE,
        Pos::new(HPos::Center, VPos::Top),
    )?;

    let reference = BLACK.stroke_width(LINE_WIDTH_REFERENCE);
    chart.draw_series(layout.hlines.iter().map(|&h| {
        PathElement::new(vec![(x_range.min, h), (x_range.max, h)], reference)
    }))?;
    chart.draw_series(layout.vlines.iter().map(|&v| {
        PathElement::new(vec![(v, y_range.min), (v, y_range.max)], reference)
    }))?;

    chart.draw_series(LineSeries::new(
        panel.curve.iter().copied(),
        COLOR_PANEL_CURVE.stroke_width(LINE_WIDTH_CURVE_PANEL),
    ))?;

    let rotation = rotation_transform(layout.xticks_rotation);
    for (&tick, label) in panel.x_ticks.iter().zip(&panel.x_tick_labels) {
        let (px, py) = chart.backend_coord(&(tick, y_range.min));
        root.draw(&PathElement::new(vec![(px, py), (px, py + TICK_LENGTH_PX)], reference))?;
        let style = FONT_TUPLE_TICK_LABEL
            .into_font()
            .transform(rotation.clone())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(label.clone(), (px, py + TICK_LENGTH_PX + 2), style))?;
    }

    if show_y_ticks {
        for (&tick, label) in layout.y_ticks.iter().zip(&layout.y_tick_labels) {
            let (px, py) = chart.backend_coord(&(x_range.min, tick));
            root.draw(&PathElement::new(vec![(px - TICK_LENGTH_PX, py), (px, py)], reference))?;
            draw_label(
                root,
                label,
                (px - TICK_LENGTH_PX - 2, py),
                FONT_TUPLE_TICK_LABEL,
                Pos::new(HPos::Right, VPos::Center),
            )?;
        }
    }

    let readout = &panel.readout;
    if readout.visible && marker_in_view(y_range, readout.position) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x_range.min, readout.position), (x_range.max, readout.position)],
            COLOR_READOUT_MARKER.stroke_width(LINE_WIDTH_MARKER),
        )))?;
        if readout.value.is_finite() {
            let anchor = chart.backend_coord(&(readout.value, readout.position));
            draw_readout_label(root, &readout.text, anchor)?;
        }
    }
    Ok(())
}

fn draw_readout_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    (px, py): (i32, i32),
) -> Result<()> {
    let half_width =
        (text.len() as f64 * CHAR_WIDTH_RATIO * f64::from(FONT_SIZE_READOUT) / 2.0) as i32 + 4;
    let half_height = FONT_SIZE_READOUT / 2 + 3;
    let corners = [
        (px - half_width, py - half_height),
        (px + half_width, py + half_height),
    ];
    root.draw(&Rectangle::new(
        corners,
        COLOR_READOUT_LABEL_FILL.mix(0.8).filled(),
    ))?;
    root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;
    draw_label(
        root,
        text,
        (px, py),
        FONT_TUPLE_READOUT,
        Pos::new(HPos::Center, VPos::Center),
    )
}

fn draw_slider<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    area: &DrawingArea<DB, Shift>,
    layout: &AlignedLayout,
    slider: &Slider,
) -> Result<()> {
    let range = slider.range();
    let value = range.min + slider.fraction() * range.span();

    // Same vertical margins as the panels, so slider values line up with
    // the panel positions.
    let mut chart = ChartBuilder::on(area)
        .margin_top(PANEL_TITLE_AREA_PX)
        .x_label_area_size(X_TICK_AREA_PX)
        .build_cartesian_2d(0.0..1.0, layout.y_limits.as_range())?;
    chart.plotting_area().fill(&COLOR_PANEL_BACKGROUND)?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.4, range.min), (0.6, range.max)],
        COLOR_SLIDER_TRACK.filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.4, range.min), (0.6, value)],
        COLOR_SLIDER_FILL.filled(),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.2, value), (0.8, value)],
        BLACK.stroke_width(LINE_WIDTH_MARKER),
    )))?;

    let (center_x, top_py) = chart.backend_coord(&(0.5, range.max));
    let (_, bottom_py) = chart.backend_coord(&(0.5, range.min));
    draw_label(
        root,
        slider.label(),
        (center_x, top_py - 6),
        FONT_TUPLE_AXIS_LABEL,
        Pos::new(HPos::Center, VPos::Bottom),
    )?;
    draw_label(
        root,
        &slider.value_text(),
        (center_x, bottom_py + 6),
        FONT_TUPLE_TICK_LABEL,
        Pos::new(HPos::Center, VPos::Top),
    )
}


// src/plot_framework.rs
