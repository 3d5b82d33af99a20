// src/error.rs

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while validating input or rendering a figure.
///
/// Validation errors are always returned before any backend call is made,
/// so a failed call never leaves a partially written figure behind.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Mismatched column lengths, empty data or a wrong number of ranges.
    #[error("shape error: {0}")]
    Shape(String),

    /// A value that cannot be plotted (NaN data, too few axes, bad option).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A requested label is not present in the data mapping.
    #[error("missing label '{0}' in data")]
    MissingLabel(String),

    /// Labels are required for list and array input but none were given.
    #[error("labels are required for {0} input")]
    MissingLabels(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the drawing backend mid-render.
    #[error("render error: {0}")]
    Render(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

// src/error.rs
