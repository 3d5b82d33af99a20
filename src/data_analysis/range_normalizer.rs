// src/data_analysis/range_normalizer.rs

use ndarray::ArrayView2;
use ndarray_stats::QuantileExt;
use tracing::debug;

use crate::constants::{DEGENERATE_RANGE_EXPANSION, DEGENERATE_RANGE_TOLERANCE};
use crate::error::{PlotError, Result};
use crate::types::AxisRange;

/// Computes one padded display range per column of `data` (records × columns).
///
/// Ranges come from `explicit` when given, otherwise from each column's
/// min/max. A range narrower than 1e-12 is widened by 1.0 on both ends, then
/// every range is padded by `padding` times its span on both ends.
pub fn compute_ranges(
    data: ArrayView2<'_, f64>,
    explicit: Option<&[AxisRange]>,
    padding: f64,
) -> Result<Vec<AxisRange>> {
    let (n_records, n_columns) = data.dim();
    if n_columns < 1 {
        return Err(PlotError::Shape("at least one column is required".into()));
    }
    if n_records < 1 {
        return Err(PlotError::Shape("at least one record is required".into()));
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(PlotError::InvalidValue(format!(
            "padding must be a non-negative number, got {padding}"
        )));
    }

    let raw_ranges = match explicit {
        Some(ranges) => {
            if ranges.len() != n_columns {
                return Err(PlotError::Shape(format!(
                    "{} ranges given for {n_columns} columns",
                    ranges.len()
                )));
            }
            if let Some((index, range)) = ranges
                .iter()
                .enumerate()
                .find(|(_, range)| !range.min.is_finite() || !range.max.is_finite())
            {
                return Err(PlotError::InvalidValue(format!(
                    "range of column {index} must be finite, got {range:?}"
                )));
            }
            ranges.to_vec()
        }
        None => data_ranges(data)?,
    };

    Ok(raw_ranges
        .into_iter()
        .enumerate()
        .map(|(index, range)| {
            let guarded = widen_degenerate(range);
            if guarded != range {
                debug!(
                    "Column {index} has a degenerate range {:?}, widened to {:?}",
                    range, guarded
                );
            }
            guarded.padded(padding)
        })
        .collect())
}

/// Per-column (min, max) of the data.
pub fn data_ranges(data: ArrayView2<'_, f64>) -> Result<Vec<AxisRange>> {
    data.columns()
        .into_iter()
        .enumerate()
        .map(|(index, column)| {
            let min = column.min().map_err(|e| nan_column_error(index, e))?;
            let max = column.max().map_err(|e| nan_column_error(index, e))?;
            Ok(AxisRange::new(*min, *max))
        })
        .collect()
}

/// Expands a zero-width range so it can be scaled onto a display axis.
pub fn widen_degenerate(range: AxisRange) -> AxisRange {
    if (range.max - range.min).abs() < DEGENERATE_RANGE_TOLERANCE {
        AxisRange::new(
            range.min - DEGENERATE_RANGE_EXPANSION,
            range.max + DEGENERATE_RANGE_EXPANSION,
        )
    } else {
        range
    }
}

fn nan_column_error(index: usize, err: ndarray_stats::errors::MinMaxError) -> PlotError {
    PlotError::InvalidValue(format!("column {index} has no finite min/max: {err}"))
}


// src/data_analysis/range_normalizer.rs
