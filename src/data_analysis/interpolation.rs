// src/data_analysis/interpolation.rs

/// One-dimensional linear interpolation over a lookup table.
///
/// `xp` is expected to be increasing. Queries below `xp[0]` return `fp[0]`
/// and queries above the last point return the last value. For tables that
/// are not increasing the result is whatever segment the search lands on;
/// it is not validated. Returns NaN for an empty table.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First index whose position exceeds x; 1 <= upper <= n - 1 here.
    let upper = xp[..n].partition_point(|&p| p <= x).clamp(1, n - 1);
    let lower = upper - 1;
    let (x0, x1) = (xp[lower], xp[upper]);
    let (y0, y1) = (fp[lower], fp[upper]);
    let dx = x1 - x0;
    if dx == 0.0 {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exact_points_return_their_values() {
        let xp = [-1.0, 0.0, 0.5, 2.0];
        let fp = [10.0, 20.0, -5.0, 7.0];
        for (&x, &f) in xp.iter().zip(&fp) {
            assert_abs_diff_eq!(interp(x, &xp, &fp), f, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_between_points() {
        let xp = [0.0, 1.0, 3.0];
        let fp = [0.0, 10.0, 30.0];
        assert_abs_diff_eq!(interp(0.5, &xp, &fp), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp(2.0, &xp, &fp), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let xp = [0.0, 1.0];
        let fp = [3.0, 4.0];
        assert_eq!(interp(-10.0, &xp, &fp), 3.0);
        assert_eq!(interp(10.0, &xp, &fp), 4.0);
    }

    #[test]
    fn test_single_point_and_empty_tables() {
        assert_eq!(interp(5.0, &[1.0], &[2.0]), 2.0);
        assert!(interp(5.0, &[], &[]).is_nan());
    }
}

// src/data_analysis/interpolation.rs
