//! # Dashboard Chart Theming Library
//!
//! `dashtheme` re-themes chart figures for a data dashboard that switches
//! between a dark and a light color scheme. Figures are JSON trees in the
//! shape a Plotly-style charting library consumes: a `layout` object and a
//! `data` array of traces.
//!
//! ## Features
//!
//! - Restyle figure lists for the dark or light palette without touching the input
//! - Base layouts for the `zam_dark` and `zam_light` templates
//! - Persist and restore the theme preference from a key/value store
//! - Mirror the active theme onto the document root attribute
//! - Register the restyling callback with a host framework by name
//!
//! ## Example
//!
//! ```
//! use dashtheme::{apply_theme, ThemeMode};
//! use serde_json::json;
//!
//! let figures = json!([{"layout": {}, "data": [{"type": "bar", "marker": {"color": "red"}}]}]);
//! let themed = apply_theme(Some(ThemeMode::Dark), Some(&figures))
//!     .into_figures()
//!     .unwrap();
//!
//! assert_eq!(themed[0]["layout"]["template"], "zam_dark");
//! assert_eq!(themed[0]["data"][0]["marker"]["color"], "red");
//! ```

pub mod callbacks;
pub mod commands;
pub mod config;
pub mod document;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use callbacks::{register_theme_callbacks, CallbackRegistry, ClientsideCallback};
pub use document::{hydrate_theme, mirror_theme, Document};
pub use storage::{load_persisted_theme, persist_theme, restore_theme, toggle_theme, ThemeStorage};
pub use theme::{apply_theme, theme_figure, ColorPalette};
pub use types::{CallbackOutput, ThemeMode};
