// src/types.rs
// Shared value types and aliases for the plotting pipelines.

use plotters::style::colors::WHITE;
use plotters::style::RGBColor;
use std::ops::Range;

/// A closed display range of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Widens the range by `fraction` of its span on both ends.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self::new(self.min - pad, self.max + pad)
    }

    pub fn as_range(&self) -> Range<f64> {
        self.min..self.max
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Figure construction settings handed to the drawing backend as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
}

impl FigureConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: WHITE,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

// Plot data types
pub type PlotPoint = (f64, f64);
pub type Polyline = Vec<PlotPoint>;

// src/types.rs
