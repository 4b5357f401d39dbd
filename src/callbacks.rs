//! # Clientside Callbacks
//!
//! The host dashboard framework calls restyling functions by a
//! `(namespace, name)` pair with positional JSON arguments. Instead of a
//! shared global namespace, callbacks are registered on a
//! [`CallbackRegistry`] that the host receives at initialisation.

use log::Level;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::callback_log;
use crate::document::{mirror_theme, Document};
use crate::theme::apply_theme;
use crate::types::{CallbackOutput, ThemeMode};

/// Namespace the theme callbacks are registered under.
pub const CLIENTSIDE_NAMESPACE: &str = "clientside";
/// Name of the figure restyling callback.
pub const SWITCH_GRAPH_THEME: &str = "switch_graph_theme";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("no callback registered as {namespace}.{name}")]
    NotRegistered { namespace: String, name: String },
}

/// A function the host can invoke by name.
pub trait ClientsideCallback: Send + Sync {
    /// Run the callback. Missing positional arguments read as `null`.
    fn call(&self, args: &[Value]) -> CallbackOutput;
}

impl<F> ClientsideCallback for F
where
    F: Fn(&[Value]) -> CallbackOutput + Send + Sync,
{
    fn call(&self, args: &[Value]) -> CallbackOutput {
        self(args)
    }
}

/// Callbacks keyed by namespace and name.
#[derive(Default, Clone)]
pub struct CallbackRegistry {
    callbacks: HashMap<(String, String), Arc<dyn ClientsideCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`, replacing anything already under the same name.
    pub fn register(
        &mut self,
        namespace: &str,
        name: &str,
        callback: Arc<dyn ClientsideCallback>,
    ) -> &mut Self {
        callback_log!(Level::Debug, "registering {}.{}", namespace, name);
        self.callbacks
            .insert((namespace.to_string(), name.to_string()), callback);
        self
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.callbacks
            .contains_key(&(namespace.to_string(), name.to_string()))
    }

    pub fn invoke(
        &self,
        namespace: &str,
        name: &str,
        args: &[Value],
    ) -> Result<CallbackOutput, CallbackError> {
        let key = (namespace.to_string(), name.to_string());
        let callback = self.callbacks.get(&key).ok_or_else(|| {
            callback_log!(Level::Warn, "unknown callback {}.{}", namespace, name);
            CallbackError::NotRegistered {
                namespace: key.0.clone(),
                name: key.1.clone(),
            }
        })?;
        Ok(callback.call(args))
    }
}

/// The figure restyling callback.
///
/// Arguments are `(themeMode, componentIds, figures)`. The component ids are
/// accepted for the host's calling convention and otherwise ignored.
#[derive(Debug, Default, Clone)]
pub struct SwitchGraphTheme {
    document: Option<Arc<Document>>,
}

impl SwitchGraphTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also mirror the active mode onto `document` on every call.
    pub fn with_document(document: Arc<Document>) -> Self {
        Self {
            document: Some(document),
        }
    }
}

impl ClientsideCallback for SwitchGraphTheme {
    fn call(&self, args: &[Value]) -> CallbackOutput {
        let mode = args.first().and_then(ThemeMode::from_value);
        if let Some(document) = &self.document {
            mirror_theme(document, mode.unwrap_or_default());
        }
        apply_theme(mode, args.get(2))
    }
}

/// Register the theme callbacks under [`CLIENTSIDE_NAMESPACE`].
pub fn register_theme_callbacks(registry: &mut CallbackRegistry, document: Option<Arc<Document>>) {
    let callback = match document {
        Some(document) => SwitchGraphTheme::with_document(document),
        None => SwitchGraphTheme::new(),
    };
    registry.register(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, Arc::new(callback));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::COLOR_SCHEME_ATTRIBUTE;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn figures() -> Value {
        json!([{"data": [{"type": "bar", "marker": {"color": "red"}}]}, null])
    }

    #[test]
    fn test_invoke_matches_apply_theme() {
        let mut registry = CallbackRegistry::new();
        register_theme_callbacks(&mut registry, None);

        let args = [json!("light"), json!(["graph-1", "graph-2"]), figures()];
        let output = registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &args)
            .unwrap();
        assert_eq!(output, apply_theme(Some(ThemeMode::Light), Some(&figures())));
    }

    #[test]
    fn test_missing_arguments() {
        let mut registry = CallbackRegistry::new();
        register_theme_callbacks(&mut registry, None);

        let output = registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &[])
            .unwrap();
        assert!(output.is_no_update());

        let args = [json!(null), json!(null), figures()];
        let output = registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &args)
            .unwrap();
        assert_eq!(output, apply_theme(Some(ThemeMode::Dark), Some(&figures())));
    }

    #[test]
    fn test_mirrors_mode_onto_document() {
        let document = Arc::new(Document::new());
        let mut registry = CallbackRegistry::new();
        register_theme_callbacks(&mut registry, Some(document.clone()));

        // the attribute is written even when there is nothing to restyle
        let output = registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &[json!("light")])
            .unwrap();
        assert!(output.is_no_update());
        assert_eq!(document.attribute(COLOR_SCHEME_ATTRIBUTE).as_deref(), Some("light"));

        registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &[json!(null), json!([]), figures()])
            .unwrap();
        assert_eq!(document.color_scheme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_unknown_callback() {
        let registry = CallbackRegistry::new();
        let err = registry.invoke("clientside", "missing", &[]).unwrap_err();
        assert_eq!(
            err,
            CallbackError::NotRegistered {
                namespace: "clientside".to_string(),
                name: "missing".to_string(),
            }
        );
        assert!(!registry.contains(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME));
    }

    #[test]
    fn test_closure_callbacks() {
        let mut registry = CallbackRegistry::new();
        registry.register(
            "custom",
            "always_skip",
            Arc::new(|_: &[Value]| CallbackOutput::NoUpdate),
        );
        assert!(registry.contains("custom", "always_skip"));
        assert!(registry.invoke("custom", "always_skip", &[]).unwrap().is_no_update());
    }
}
