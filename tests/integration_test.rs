use dashtheme::callbacks::{CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME};
use dashtheme::document::COLOR_SCHEME_ATTRIBUTE;
use dashtheme::storage::FileStorage;
use dashtheme::{
    hydrate_theme, persist_theme, register_theme_callbacks, restore_theme, toggle_theme,
    CallbackOutput, CallbackRegistry, Document, ThemeMode,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn dashboard_figures() -> Value {
    json!([
        {
            "layout": {
                "xaxis": {"title": {"text": "Mes"}},
                "yaxis": {"title": "Monto"},
                "hoverlabel": {"namelength": -1}
            },
            "data": [
                {"type": "bar", "x": ["ENE", "FEB"], "y": [10, 12], "marker": {"color": "#e9a13b"}},
                {"type": "scatter", "x": ["ENE", "FEB"], "y": [9, 11], "marker": {"size": 6}}
            ]
        },
        null,
        {
            "layout": {"annotations": [{"text": "64%", "x": 0.5, "y": 0.5}]},
            "data": [{"type": "pie", "hole": 0.6, "values": [64, 36]}]
        }
    ])
}

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().join("storage.json");

    // First load: nothing persisted, the page starts dark
    let document = Arc::new(Document::new());
    let mut storage = FileStorage::new(&storage_path);
    assert_eq!(hydrate_theme(&document, &storage), ThemeMode::Dark);
    assert_eq!(document.attribute(COLOR_SCHEME_ATTRIBUTE).as_deref(), Some("dark"));

    // The host wires the callback in at initialisation
    let mut registry = CallbackRegistry::new();
    register_theme_callbacks(&mut registry, Some(document.clone()));

    // User toggles the theme
    let next = toggle_theme(Some(restore_theme(&storage)));
    assert_eq!(next, ThemeMode::Light);
    persist_theme(&mut storage, next).unwrap();

    let figures = dashboard_figures();
    let snapshot = figures.clone();
    let args = [json!(next), json!(["graph-a", "graph-b", "graph-c"]), figures.clone()];
    let themed = match registry.invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &args).unwrap() {
        CallbackOutput::Update(themed) => themed,
        CallbackOutput::NoUpdate => panic!("expected restyled figures"),
    };

    assert_eq!(figures, snapshot);
    assert_eq!(themed.len(), 3);
    assert!(themed[1].is_null());
    assert_eq!(document.color_scheme(), Some(ThemeMode::Light));

    let bar_chart = &themed[0];
    assert_eq!(bar_chart["layout"]["template"], json!("zam_light"));
    assert_eq!(bar_chart["layout"]["hoverlabel"]["namelength"], json!(-1));
    assert_eq!(
        bar_chart["layout"]["yaxis"]["title"],
        json!({"text": "Monto", "font": {"color": "#1d1d1b"}})
    );
    assert_eq!(bar_chart["data"][0]["marker"]["color"], json!("#e9a13b"));
    assert_eq!(bar_chart["data"][1]["marker"]["size"], json!(6));
    assert_eq!(bar_chart["data"][1]["marker"]["line"]["width"], json!(1));

    let donut = &themed[2];
    assert_eq!(donut["layout"]["annotations"][0]["x"], json!(0.5));
    assert_eq!(donut["data"][0]["hole"], json!(0.6));
    assert_eq!(donut["data"][0]["marker"]["line"], json!({"color": "#ffffff", "width": 2}));

    // Reload: the persisted light theme is applied before first render
    let reloaded = Document::new();
    let storage = FileStorage::new(&storage_path);
    assert_eq!(hydrate_theme(&reloaded, &storage), ThemeMode::Light);
    assert_eq!(reloaded.color_scheme(), Some(ThemeMode::Light));
}

#[test]
fn test_error_handling() {
    let mut registry = CallbackRegistry::new();
    register_theme_callbacks(&mut registry, None);

    // No figure list means no update rather than an error
    for figures in [json!(null), json!({"layout": {}}), json!(3)] {
        let output = registry
            .invoke(CLIENTSIDE_NAMESPACE, SWITCH_GRAPH_THEME, &[json!("dark"), json!([]), figures])
            .unwrap();
        assert!(output.is_no_update());
    }

    // Unknown callbacks are reported to the host
    assert!(registry.invoke("clientside", "switch_table_theme", &[]).is_err());

    // A corrupt storage file falls back to the default theme
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    std::fs::write(&path, "{\"theme-store\": ").unwrap();
    let document = Document::new();
    assert_eq!(hydrate_theme(&document, &FileStorage::new(&path)), ThemeMode::Dark);
}
