//! Configuration tests - YAML persistence and measurer construction

use std::time::Duration;

use tedit::config::EditorConfig;
use tedit::editor::Editor;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        tab_size: 2,
        caret_width: 2.0,
        blink_interval_ms: 400,
        ..EditorConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_zero_tab_size_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_size: 0\nnative_tab_size: 0\n").unwrap();

    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded.tab_size, 1);
    assert_eq!(loaded.native_tab_size, 8);
}

#[test]
fn test_blink_interval_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    std::fs::write(&path, "blink_interval_ms: 300\n").unwrap();
    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded.blink_interval(), Duration::from_millis(300));

    // A zero period would tick continuously
    std::fs::write(&path, "blink_interval_ms: 0\n").unwrap();
    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded.blink_interval(), Duration::from_millis(530));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_size: [not a number\n").unwrap();
    assert!(EditorConfig::load_from(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(EditorConfig::load_from(&dir.path().join("absent.yaml")).is_err());
}

#[test]
fn test_configured_tab_size_reaches_editor() {
    let config = EditorConfig {
        tab_size: 2,
        ..EditorConfig::default()
    };
    let editor = Editor::with_text("a\tb", config.measurer().unwrap());
    assert_eq!(editor.measurer().options().tab_size, 2);
    assert_eq!(editor.tab_segments(0).len(), 1);
}
