use crate::types::ThemeMode;

/// Fully transparent color used for figure and legend backgrounds.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
/// Font family applied to every themed figure.
pub const FONT_FAMILY: &str = "'Nexa', sans-serif";
/// Hover-label font size used when the figure doesn't set one.
pub const HOVER_FONT_SIZE: u64 = 12;
/// Border width around pie slices.
pub const SLICE_BORDER_WIDTH: u64 = 2;
/// Border width around scatter points and bars.
pub const MARKER_BORDER_WIDTH: u64 = 1;

/// Colors bound to a theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub text: &'static str,
    /// Muted text for tick labels.
    pub secondary_text: &'static str,
    pub tooltip_bg: &'static str,
    /// Grid lines, axis lines and borders.
    pub grid: &'static str,
    pub annotation_bg: &'static str,
    /// Translucent fill behind gauge indicators.
    pub gauge_bg: &'static str,
    pub slice_border: &'static str,
    pub marker_border: &'static str,
}

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    text: "#e8eaed",
    secondary_text: "#9ca3af",
    tooltip_bg: "#3b4249",
    grid: "#4a5a68",
    annotation_bg: "rgba(59,66,73,0.85)",
    gauge_bg: "rgba(255,255,255,0.05)",
    slice_border: "#62686e",
    marker_border: "#2c2e33",
};

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    text: "#1d1d1b",
    secondary_text: "#808080",
    tooltip_bg: "#ffffff",
    grid: "#f2f2f2",
    annotation_bg: "rgba(255,255,255,0.85)",
    gauge_bg: "rgba(0,0,0,0.05)",
    slice_border: "#ffffff",
    marker_border: "#ffffff",
};

impl ColorPalette {
    /// The palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> &'static ColorPalette {
        match mode {
            ThemeMode::Dark => &DARK_PALETTE,
            ThemeMode::Light => &LIGHT_PALETTE,
        }
    }
}
