// src/data_analysis/rescale.rs

use ndarray::{Array2, ArrayView2, Axis};

use crate::error::{PlotError, Result};
use crate::types::AxisRange;

/// Maps every column onto the padded range of column 0 (the host axis).
///
/// Column 0 is copied unchanged. Column `k` is mapped affinely from its own
/// range onto the host range, so each value keeps its relative position on
/// its axis while all columns share one vertical scale. Ranges must be
/// non-degenerate, as produced by `compute_ranges`.
pub fn rescale_columns(data: ArrayView2<'_, f64>, ranges: &[AxisRange]) -> Result<Array2<f64>> {
    if ranges.len() != data.ncols() {
        return Err(PlotError::Shape(format!(
            "{} ranges given for {} columns",
            ranges.len(),
            data.ncols()
        )));
    }
    let host = ranges
        .first()
        .copied()
        .ok_or_else(|| PlotError::Shape("at least one column is required".into()))?;

    let mut rescaled = data.to_owned();
    for (k, mut column) in rescaled.axis_iter_mut(Axis(1)).enumerate().skip(1) {
        let axis_range = ranges[k];
        column.mapv_inplace(|value| axis_to_host(value, axis_range, host));
    }
    Ok(rescaled)
}

/// Position of `value` from `axis_range` expressed in `host` coordinates.
pub fn axis_to_host(value: f64, axis_range: AxisRange, host: AxisRange) -> f64 {
    (value - axis_range.min) / axis_range.span() * host.span() + host.min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::range_normalizer::compute_ranges;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_midpoint_maps_to_host_midpoint() {
        let data = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
        let ranges = compute_ranges(data.view(), None, 0.0).unwrap();
        let rescaled = rescale_columns(data.view(), &ranges).unwrap();
        assert_eq!(rescaled.column(0), data.column(0));
        assert_abs_diff_eq!(rescaled[[1, 1]], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rescaled[[0, 1]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rescaled[[2, 1]], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rescaled_values_stay_inside_host_range() {
        let data = array![
            [0.1, -300.0, 1e6, 7.0],
            [0.4, 150.0, 2e6, 7.0],
            [0.9, 20.0, 1.5e6, 7.0]
        ];
        let ranges = compute_ranges(data.view(), None, 0.05).unwrap();
        let rescaled = rescale_columns(data.view(), &ranges).unwrap();
        assert!(rescaled.iter().all(|&value| ranges[0].contains(value)));
    }

    #[test]
    fn test_axis_to_host_keeps_relative_position() {
        let host = AxisRange::new(-1.0, 1.0);
        let axis = AxisRange::new(100.0, 300.0);
        assert_abs_diff_eq!(axis_to_host(250.0, axis, host), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(axis_to_host(100.0, axis, host), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_range_count_must_match() {
        let data = array![[1.0, 2.0]];
        let result = rescale_columns(data.view(), &[AxisRange::new(0.0, 1.0)]);
        assert!(matches!(result, Err(PlotError::Shape(_))));
    }
}

// src/data_analysis/rescale.rs
