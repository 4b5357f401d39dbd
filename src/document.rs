//! Mirror of the active theme onto the document root, so styling outside the
//! charts follows the same mode.

use log::Level;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::storage::{restore_theme, ThemeStorage};
use crate::theme_log;
use crate::types::ThemeMode;

/// Root attribute read by the UI component library's CSS.
pub const COLOR_SCHEME_ATTRIBUTE: &str = "data-mantine-color-scheme";

/// Attributes of the document's root element.
#[derive(Debug, Default)]
pub struct Document {
    attributes: RwLock<BTreeMap<String, String>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut attributes = match self.attributes.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        let attributes = match self.attributes.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        attributes.get(name).cloned()
    }

    /// The mode currently mirrored on the root, if any.
    pub fn color_scheme(&self) -> Option<ThemeMode> {
        self.attribute(COLOR_SCHEME_ATTRIBUTE)?.parse().ok()
    }
}

/// Write `mode` onto the document root.
pub fn mirror_theme(document: &Document, mode: ThemeMode) {
    document.set_attribute(COLOR_SCHEME_ATTRIBUTE, mode.as_str());
}

/// Apply the persisted theme before the first render. Falls back to dark when
/// nothing usable is stored.
pub fn hydrate_theme(document: &Document, storage: &dyn ThemeStorage) -> ThemeMode {
    let mode = restore_theme(storage);
    mirror_theme(document, mode);
    theme_log!(Level::Info, "document hydrated with {} theme", mode);
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_mirror_theme() {
        let document = Document::new();
        assert_eq!(document.color_scheme(), None);

        mirror_theme(&document, ThemeMode::Light);
        assert_eq!(document.attribute(COLOR_SCHEME_ATTRIBUTE).as_deref(), Some("light"));
        assert_eq!(document.color_scheme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_hydrate_from_storage() {
        let storage: MemoryStorage = [("theme-store", r#"{"data":"light"}"#)].into_iter().collect();
        let document = Document::new();

        assert_eq!(hydrate_theme(&document, &storage), ThemeMode::Light);
        assert_eq!(document.color_scheme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_hydrate_defaults_to_dark() {
        let document = Document::new();
        let storage: MemoryStorage = [("theme-store", "garbage{")].into_iter().collect();

        assert_eq!(hydrate_theme(&document, &storage), ThemeMode::Dark);
        assert_eq!(document.attribute(COLOR_SCHEME_ATTRIBUTE).as_deref(), Some("dark"));
    }
}
