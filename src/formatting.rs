// src/formatting.rs

use crate::constants::SIG_FORMAT_ZERO_TOLERANCE;

/// Formats `value` rounded to `sig` significant digits.
///
/// Values closer to zero than 1e-7 print as `"0.0"`. Whole numbers keep a
/// trailing `.0` so tick labels read as real values (`20.0`, not `20`).
pub fn float_to_str_sig(value: f64, sig: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value.abs() < SIG_FORMAT_ZERO_TOLERANCE {
        return "0.0".to_string();
    }
    let rounded = round_to_sig(value, sig.max(1));
    if rounded.fract() == 0.0 && rounded.abs() < 1e16 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Rounds `value` to `sig` significant digits.
pub fn round_to_sig(value: f64, sig: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = sig as i32 - 1 - magnitude;
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    }
}

/// Formats a slider value the way a `%.3f` value format would.
pub fn format_slider_value(value: f64) -> String {
    format!("{value:.3}")
}


// src/formatting.rs
