// src/data_analysis/curve_builder.rs

use ndarray::{Array1, ArrayView2};

use crate::error::{PlotError, Result};
use crate::types::{PlotPoint, Polyline};

/// How a record is drawn across the parallel axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// Straight segments between consecutive axis crossings.
    Linear,
    /// Cubic Bezier segments with horizontal tangents at every axis.
    #[default]
    Bezier,
}

/// Path command attached to each control vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo,
    /// One vertex of a cubic segment; three in a row complete a segment.
    Curve4,
}

/// Control vertices and commands of a cubic Bezier path.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPath {
    pub vertices: Vec<PlotPoint>,
    pub commands: Vec<PathCommand>,
}

/// One record's drawable curve.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordCurve {
    Polyline(Polyline),
    Bezier(ControlPath),
}

/// Builds the curve for one record's rescaled values, ordered by axis.
///
/// Bezier mode produces `3M - 2` control vertices. Their x coordinates are
/// evenly spaced from axis 0 to axis `M - 1`, so every axis position is hit
/// exactly with two interior control points in between. Each value is
/// repeated three times, the first and last only twice. The path therefore
/// passes through every axis crossing with a flat tangent, and may over- or
/// undershoot between axes.
pub fn build_curve(values: &[f64], mode: CurveMode) -> Result<RecordCurve> {
    let n_axes = values.len();
    if n_axes < 2 {
        return Err(PlotError::InvalidValue(format!(
            "at least two axes are needed to draw a line, got {n_axes}"
        )));
    }

    match mode {
        CurveMode::Linear => Ok(RecordCurve::Polyline(
            values
                .iter()
                .enumerate()
                .map(|(axis, &value)| (axis as f64, value))
                .collect(),
        )),
        CurveMode::Bezier => {
            let n_vertices = 3 * n_axes - 2;
            let xs = Array1::linspace(0.0, (n_axes - 1) as f64, n_vertices);
            let ys = values
                .iter()
                .flat_map(|&value| std::iter::repeat(value).take(3))
                .skip(1)
                .take(n_vertices);
            let vertices: Vec<PlotPoint> = xs.iter().copied().zip(ys).collect();

            let mut commands = Vec::with_capacity(n_vertices);
            commands.push(PathCommand::MoveTo);
            commands.resize(n_vertices, PathCommand::Curve4);

            Ok(RecordCurve::Bezier(ControlPath { vertices, commands }))
        }
    }
}

/// Builds one curve per record (row) of a rescaled matrix.
pub fn build_curves(rescaled: ArrayView2<'_, f64>, mode: CurveMode) -> Result<Vec<RecordCurve>> {
    rescaled
        .rows()
        .into_iter()
        .map(|row| build_curve(&row.to_vec(), mode))
        .collect()
}

impl ControlPath {
    /// Cubic segments as `[start, control1, control2, end]`.
    pub fn segments(&self) -> impl Iterator<Item = [PlotPoint; 4]> + '_ {
        let n_segments = self.vertices.len().saturating_sub(1) / 3;
        (0..n_segments).map(move |i| {
            let v = &self.vertices[3 * i..3 * i + 4];
            [v[0], v[1], v[2], v[3]]
        })
    }

    /// Evaluates every segment at `samples_per_segment` steps, for backends
    /// that can only draw straight lines. The start and end of each segment
    /// are included exactly.
    pub fn flatten(&self, samples_per_segment: usize) -> Polyline {
        let steps = samples_per_segment.max(1);
        let mut points = Vec::with_capacity(self.vertices.len() / 3 * steps + 1);
        if let Some(&first) = self.vertices.first() {
            points.push(first);
        }
        for segment in self.segments() {
            for step in 1..=steps {
                let t = step as f64 / steps as f64;
                points.push(cubic_point(&segment, t));
            }
        }
        points
    }
}

impl RecordCurve {
    /// Straight-line approximation suitable for a line series.
    pub fn to_polyline(&self, samples_per_segment: usize) -> Polyline {
        match self {
            RecordCurve::Polyline(points) => points.clone(),
            RecordCurve::Bezier(path) => path.flatten(samples_per_segment),
        }
    }
}

// Bernstein form of a cubic Bezier segment.
fn cubic_point(segment: &[PlotPoint; 4], t: f64) -> PlotPoint {
    if t >= 1.0 {
        return segment[3];
    }
    let u = 1.0 - t;
    let weights = [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t];
    segment
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(x, y), (&(px, py), w)| (x + w * px, y + w * py))
}


// src/data_analysis/curve_builder.rs
