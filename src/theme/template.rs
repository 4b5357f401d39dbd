//! Base layouts registered under the `zam_dark` and `zam_light` template
//! names. Themed figures reference these by name through `layout.template`.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::palette::{ColorPalette, FONT_FAMILY, TRANSPARENT};
use crate::types::ThemeMode;

/// Default trace colors shared by both templates.
pub const COLORWAY: [&str; 6] = [
    "#418cdf", "#e27f08", "#4c9f54", "#e9a13b", "#808080", "#ff0000",
];

const BASE_FONT_SIZE: u64 = 12;
const TICK_FONT_SIZE: u64 = 10;

static DARK_LAYOUT: Lazy<Value> = Lazy::new(|| base_layout(ThemeMode::Dark));
static LIGHT_LAYOUT: Lazy<Value> = Lazy::new(|| base_layout(ThemeMode::Light));

/// The template layout bound to `mode`.
pub fn template_layout(mode: ThemeMode) -> &'static Value {
    match mode {
        ThemeMode::Dark => &*DARK_LAYOUT,
        ThemeMode::Light => &*LIGHT_LAYOUT,
    }
}

/// Both templates keyed by template name, ready to hand to a charting
/// library's template registry.
pub fn templates() -> Map<String, Value> {
    ThemeMode::ALL
        .iter()
        .map(|mode| (mode.template_name().to_string(), json!({ "layout": template_layout(*mode) })))
        .collect()
}

fn base_layout(mode: ThemeMode) -> Value {
    let palette = ColorPalette::for_mode(mode);
    let tickfont = json!({ "size": TICK_FONT_SIZE, "color": palette.secondary_text });

    json!({
        "paper_bgcolor": TRANSPARENT,
        "plot_bgcolor": TRANSPARENT,
        "margin": { "t": 35, "b": 45, "l": 50, "r": 20 },
        "colorway": COLORWAY,
        "font": {
            "family": FONT_FAMILY,
            "color": palette.text,
            "size": BASE_FONT_SIZE,
        },
        "xaxis": {
            "showgrid": false,
            "zeroline": false,
            "tickfont": tickfont.clone(),
        },
        "yaxis": {
            "showgrid": true,
            "gridcolor": palette.grid,
            "gridwidth": 1,
            "zeroline": false,
            "tickfont": tickfont,
        },
        "legend": {
            "orientation": "h",
            "yanchor": "bottom",
            "y": 1.02,
            "xanchor": "center",
            "x": 0.5,
            "font": { "size": TICK_FONT_SIZE },
        },
        "bargap": 0.18,
        "bargroupgap": 0.12,
    })
}
