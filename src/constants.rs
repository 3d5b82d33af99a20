// src/constants.rs

use plotters::style::RGBColor;

// Default figure dimensions in pixels (7.5 x 3 inches at 100 dpi).
pub const PARALLEL_PLOT_WIDTH: u32 = 750;
pub const PARALLEL_PLOT_HEIGHT: u32 = 300;
pub const ALIGNED_PLOT_WIDTH: u32 = 1280;
pub const ALIGNED_PLOT_HEIGHT: u32 = 720;

// --- Range normalization ---
pub const DEFAULT_PADDING_FRACTION: f64 = 0.05;
pub const DEGENERATE_RANGE_TOLERANCE: f64 = 1e-12; // Spans below this are widened
pub const DEGENERATE_RANGE_EXPANSION: f64 = 1.0; // Widen each end by this amount

// --- Aligned panels ---
pub const X_LIMIT_TOLERANCE: f64 = 1e-7; // Below this span horizontal limits are autoscaled
pub const AUTOSCALE_HALF_WIDTH: f64 = 0.5; // Autoscale margin around a constant panel
pub const TICK_SIG_DIGITS: usize = 3;
pub const READOUT_SIG_DIGITS: usize = 4;
pub const SIG_FORMAT_ZERO_TOLERANCE: f64 = 1e-7;
pub const SLIDER_WIDTH_RATIO: f64 = 0.15; // Relative to one panel
pub const PANEL_SPACING_RATIO: f64 = 0.2; // Gap between panels, relative to mean panel width
pub const LEFT_MARGIN_RATIO: f64 = 0.1;

// --- Curves ---
pub const DEFAULT_LINE_WIDTH: u32 = 1;
pub const BEZIER_SAMPLES_PER_SEGMENT: usize = 24;
pub const AXIS_TICK_COUNT: usize = 5; // Ticks drawn on every parallel axis

// --- Pixel layout ---
pub const FIGURE_MARGIN_PX: i32 = 10;
pub const TITLE_AREA_PX: i32 = 40; // Reserved above the charts when a title is set
pub const AXIS_LABEL_AREA_PX: i32 = 24; // Column names above the parallel axes
pub const PANEL_TITLE_AREA_PX: i32 = 24;
pub const X_TICK_AREA_PX: i32 = 36;
pub const TICK_LENGTH_PX: i32 = 4;
pub const CHAR_WIDTH_RATIO: f64 = 0.6; // Approximate character width relative to font size

// --- Font sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 20;
pub const FONT_SIZE_CHART_TITLE: i32 = 16;
pub const FONT_SIZE_AXIS_LABEL: i32 = 11;
pub const FONT_SIZE_TICK_LABEL: i32 = 10;
pub const FONT_SIZE_READOUT: i32 = 12;

// --- Plot Color Assignments ---
pub const COLOR_PANEL_BACKGROUND: RGBColor = RGBColor(250, 250, 210); // lightgoldenrodyellow
pub const COLOR_READOUT_MARKER: RGBColor = RGBColor(0xd6, 0x27, 0x28);
pub const COLOR_READOUT_LABEL_FILL: RGBColor = RGBColor(255, 255, 0);
pub const COLOR_SLIDER_TRACK: RGBColor = RGBColor(117, 117, 117);
pub const COLOR_SLIDER_FILL: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const COLOR_PANEL_CURVE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const COLOR_AXIS_LINE: RGBColor = RGBColor(0, 0, 0);

// Stroke widths for lines
pub const LINE_WIDTH_REFERENCE: u32 = 1;
pub const LINE_WIDTH_MARKER: u32 = 2;
pub const LINE_WIDTH_CURVE_PANEL: u32 = 2;

// src/constants.rs
