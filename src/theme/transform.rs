//! Theme application over chart figures.
//!
//! A figure is a JSON tree with an optional `layout` object and an optional
//! `data` array of traces. Theming rewrites only the styling fields listed in
//! [`theme_figure`] and leaves every other field as it was. Inputs are never
//! mutated; each figure is cloned before it is restyled.

use log::Level;
use serde_json::{Map, Value};

use super::palette::{
    ColorPalette, FONT_FAMILY, HOVER_FONT_SIZE, MARKER_BORDER_WIDTH, SLICE_BORDER_WIDTH,
    TRANSPARENT,
};
use crate::theme_log;
use crate::types::{CallbackOutput, ThemeMode};
use crate::utils::json::{
    existing_object, has_str, objects_in_array, set_nested_color, set_str, update_object,
    update_path,
};

/// Restyle every figure in `figures` for `mode`.
///
/// A missing mode means dark. A missing or non-array `figures` yields
/// [`CallbackOutput::NoUpdate`]. Otherwise the output has exactly one entry
/// per input slot, with `null` slots kept as `null`.
pub fn apply_theme(mode: Option<ThemeMode>, figures: Option<&Value>) -> CallbackOutput {
    let mode = mode.unwrap_or_default();
    let Some(figures) = figures.and_then(Value::as_array) else {
        theme_log!(Level::Debug, "no figure list supplied, skipping {} restyle", mode);
        return CallbackOutput::NoUpdate;
    };

    let themed: Vec<Value> = figures
        .iter()
        .map(|fig| match fig {
            Value::Null => Value::Null,
            fig => theme_figure(fig, mode),
        })
        .collect();

    theme_log!(Level::Debug, "applied {} theme to {} figures", mode, themed.len());
    CallbackOutput::Update(themed)
}

/// Return a restyled copy of a single figure, using the palette bound to
/// `mode`.
///
/// Non-object values are returned as plain clones since there is nothing to
/// style on them.
pub fn theme_figure(figure: &Value, mode: ThemeMode) -> Value {
    let palette = ColorPalette::for_mode(mode);
    let mut themed = figure.clone();
    if let Value::Object(root) = &mut themed {
        update_object(root, "layout", |layout| apply_layout(layout, mode, palette));

        if let Some(traces) = root.get_mut("data").and_then(Value::as_array_mut) {
            for trace in traces.iter_mut().filter_map(Value::as_object_mut) {
                apply_trace(trace, palette);
            }
        }
    }
    themed
}

fn apply_layout(layout: &mut Map<String, Value>, mode: ThemeMode, palette: &ColorPalette) {
    set_str(layout, "template", mode.template_name());
    set_str(layout, "paper_bgcolor", TRANSPARENT);
    set_str(layout, "plot_bgcolor", TRANSPARENT);

    update_object(layout, "font", |font| {
        set_str(font, "color", palette.text);
        set_str(font, "family", FONT_FAMILY);
    });

    update_object(layout, "hoverlabel", |hoverlabel| {
        set_str(hoverlabel, "bgcolor", palette.tooltip_bg);
        set_str(hoverlabel, "bordercolor", palette.grid);
        update_object(hoverlabel, "font", |font| {
            set_str(font, "color", palette.text);
            font.entry("size")
                .or_insert_with(|| Value::from(HOVER_FONT_SIZE));
        });
    });

    for annotation in objects_in_array(layout, "annotations") {
        set_nested_color(annotation, "font", palette.text);
        set_str(annotation, "bgcolor", palette.annotation_bg);
        set_str(annotation, "bordercolor", palette.grid);
    }

    let axis_keys: Vec<String> = layout.keys().filter(|k| is_axis_key(k)).cloned().collect();
    for key in axis_keys {
        if let Some(axis) = existing_object(layout, &key) {
            apply_axis(axis, palette);
        }
    }

    if let Some(legend) = existing_object(layout, "legend") {
        set_nested_color(legend, "font", palette.text);
        set_str(legend, "bgcolor", TRANSPARENT);
    }

    for shape in objects_in_array(layout, "shapes") {
        update_object(shape, "line", |line| {
            if !has_str(line, "color") {
                set_str(line, "color", palette.grid);
            }
        });
    }
}

/// `xaxis`, `yaxis` and their numbered subplot variants (`xaxis2`, ...).
fn is_axis_key(key: &str) -> bool {
    ["xaxis", "yaxis"].iter().any(|prefix| {
        key.strip_prefix(prefix)
            .is_some_and(|suffix| suffix.chars().all(|c| c.is_ascii_digit()))
    })
}

fn apply_axis(axis: &mut Map<String, Value>, palette: &ColorPalette) {
    set_str(axis, "gridcolor", palette.grid);
    set_str(axis, "linecolor", palette.grid);
    set_nested_color(axis, "tickfont", palette.secondary_text);

    match axis.get_mut("title") {
        None | Some(Value::Null) => {}
        Some(title) => {
            if let Some(text) = title.as_str().map(str::to_owned) {
                let mut promoted = Map::new();
                promoted.insert("text".to_string(), Value::String(text));
                *title = Value::Object(promoted);
            }
            if let Value::Object(title) = title {
                set_nested_color(title, "font", palette.text);
            }
        }
    }
}

fn apply_trace(trace: &mut Map<String, Value>, palette: &ColorPalette) {
    let trace_type = trace
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    match trace_type.as_str() {
        "indicator" => apply_indicator(trace, palette),
        "pie" => apply_pie(trace, palette),
        "scatter" | "bar" => {
            if let Some(marker) = existing_object(trace, "marker") {
                update_object(marker, "line", |line| {
                    set_str(line, "color", palette.marker_border);
                    line.insert("width".to_string(), Value::from(MARKER_BORDER_WIDTH));
                });
            }
        }
        _ => {}
    }
}

fn apply_indicator(trace: &mut Map<String, Value>, palette: &ColorPalette) {
    update_path(trace, &["number", "font"], |font| set_str(font, "color", palette.text));

    for key in ["title", "delta"] {
        if let Some(part) = existing_object(trace, key) {
            set_nested_color(part, "font", palette.text);
        }
    }

    if let Some(gauge) = existing_object(trace, "gauge") {
        set_str(gauge, "bgcolor", palette.gauge_bg);
        set_str(gauge, "bordercolor", palette.grid);
        if let Some(axis) = existing_object(gauge, "axis") {
            set_nested_color(axis, "tickfont", palette.secondary_text);
        }
    }
}

fn apply_pie(trace: &mut Map<String, Value>, palette: &ColorPalette) {
    update_path(trace, &["marker", "line"], |line| {
        set_str(line, "color", palette.slice_border);
        line.insert("width".to_string(), Value::from(SLICE_BORDER_WIDTH));
    });

    set_nested_color(trace, "textfont", palette.text);
}
