//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! selecting a theme and reporting the result of a theme callback.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Template name registered for the dark theme.
pub const DARK_TEMPLATE: &str = "zam_dark";
/// Template name registered for the light theme.
pub const LIGHT_TEMPLATE: &str = "zam_light";

/// The dark/light display preference driving color selection.
///
/// Serialized as the lowercase strings `"dark"` and `"light"`, which is also
/// the form stored in the theme store and written onto the document root.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark chart styling (default).
    #[default]
    Dark,
    /// Light chart styling.
    Light,
}

impl ThemeMode {
    /// Both modes, dark first.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    /// The lowercase identifier used in storage and on the document.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Name of the chart template bound to this mode.
    pub fn template_name(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_TEMPLATE,
            ThemeMode::Light => LIGHT_TEMPLATE,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Interpret a loosely typed callback argument.
    ///
    /// Only the strings `"dark"` and `"light"` name a mode; `null`, other
    /// strings and non-string values yield `None` so the caller can fall back
    /// to the default.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode '{0}', expected 'dark' or 'light'")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Result of a theme callback.
///
/// `NoUpdate` tells the host framework to leave the previously rendered
/// output untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackOutput {
    /// Restyled figures, one per input slot; `Null` slots are preserved.
    Update(Vec<Value>),
    /// Leave the prior output unchanged.
    NoUpdate,
}

impl CallbackOutput {
    pub fn is_no_update(&self) -> bool {
        matches!(self, CallbackOutput::NoUpdate)
    }

    /// The restyled figures, or `None` for `NoUpdate`.
    pub fn into_figures(self) -> Option<Vec<Value>> {
        match self {
            CallbackOutput::Update(figures) => Some(figures),
            CallbackOutput::NoUpdate => None,
        }
    }
}
