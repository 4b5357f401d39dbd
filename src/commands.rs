//! Operations behind the `dashtheme` subcommands.
//!
//! Each function takes the loaded [`AppConfig`] and an open storage so the
//! binary only parses arguments and moves bytes between files and stdio.

use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;

use crate::config::AppConfig;
use crate::storage::{persist_theme, toggle_theme, ThemeStorage};
use crate::theme::{apply_theme, template_layout};
use crate::types::{CallbackOutput, ThemeMode};

/// Restyle the JSON figure list in `input`.
///
/// Returns the pretty-printed themed list, or `None` when `input` is valid
/// JSON but not a list of figures.
pub fn apply_figures(
    config: &AppConfig,
    storage: &dyn ThemeStorage,
    explicit: Option<ThemeMode>,
    input: &str,
) -> Result<Option<String>> {
    let figures: Value = serde_json::from_str(input).context("figures are not valid JSON")?;
    let mode = config.resolve_mode(explicit, storage);
    match apply_theme(Some(mode), Some(&figures)) {
        CallbackOutput::Update(themed) => {
            info!("restyled {} figures for {} theme", themed.len(), mode);
            Ok(Some(serde_json::to_string_pretty(&Value::Array(themed))?))
        }
        CallbackOutput::NoUpdate => {
            warn!("input is not a list of figures, no update");
            Ok(None)
        }
    }
}

/// The active theme: persisted, else the configured default.
pub fn show_theme(config: &AppConfig, storage: &dyn ThemeStorage) -> ThemeMode {
    config.resolve_mode(None, storage)
}

/// Flip the active theme and persist the result.
pub fn toggle_persisted(
    config: &AppConfig,
    storage: &mut dyn ThemeStorage,
) -> Result<ThemeMode> {
    let next = toggle_theme(Some(show_theme(config, storage)));
    persist_theme(storage, next)?;
    Ok(next)
}

/// Pretty-printed template layout for `explicit`, or the configured default.
pub fn render_template(config: &AppConfig, explicit: Option<ThemeMode>) -> Result<String> {
    let mode = explicit.unwrap_or(config.theme.default_mode);
    Ok(serde_json::to_string_pretty(template_layout(mode))?)
}
