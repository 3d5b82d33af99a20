// src/font_config.rs

// Font style constants for plot rendering.
// Every text element of both figure kinds takes its family and size from here.

use plotters::style::FontTransform;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_MAIN_TITLE, FONT_SIZE_READOUT,
    FONT_SIZE_TICK_LABEL,
};

/// Font family used for all text; plotters resolves it against system fonts.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);
pub const FONT_TUPLE_READOUT: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_READOUT);

/// Maps a tick label rotation in degrees onto the nearest quarter turn
/// plotters can render.
pub fn rotation_transform(degrees: f64) -> FontTransform {
    let quarter_turns = (degrees / 90.0).round().rem_euclid(4.0) as u8;
    match quarter_turns {
        1 => FontTransform::Rotate90,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_snaps_to_quarter_turns() {
        assert!(matches!(rotation_transform(0.0), FontTransform::None));
        assert!(matches!(rotation_transform(80.0), FontTransform::Rotate90));
        assert!(matches!(rotation_transform(180.0), FontTransform::Rotate180));
        assert!(matches!(rotation_transform(-90.0), FontTransform::Rotate270));
        assert!(matches!(rotation_transform(360.0), FontTransform::None));
    }
}

// src/font_config.rs
