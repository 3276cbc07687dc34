//! Configuration system tests
//!
//! Tests for config paths and site config loading/saving.

use docsite::config::SiteConfig;
use docsite::config_paths;
use docsite::theme::ThemeMode;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("docsite"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_preferences_file_is_json_in_config_dir() {
    if let (Some(config), Some(prefs)) = (
        config_paths::config_dir(),
        config_paths::preferences_file(),
    ) {
        assert!(prefs.starts_with(&config));
        assert!(prefs.to_string_lossy().ends_with("preferences.json"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Site Config Tests
// ========================================================================

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "copy_feedback_ms: [not, a, number]\n").unwrap();

    assert_eq!(SiteConfig::load_from(&path), SiteConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = SiteConfig {
        site_title: "Query Guide".to_string(),
        default_theme: ThemeMode::Light,
        copy_feedback_ms: 750,
        search_debounce_ms: 120,
        ..SiteConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = SiteConfig::load_from(&path);
    assert_eq!(loaded, config);
    assert_eq!(loaded.copy_feedback().as_millis(), 750);
    assert_eq!(loaded.search_debounce().as_millis(), 120);
}

#[test]
fn test_yaml_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "site_title: Ops Runbook\ntoc_container: article\ntoc_target: sidebar-toc\n",
    )
    .unwrap();

    let config = SiteConfig::load_from(&path);
    assert_eq!(config.site_title, "Ops Runbook");
    assert_eq!(config.toc_container, "article");
    assert_eq!(config.toc_target, "sidebar-toc");
    assert_eq!(config.copy_feedback_ms, 2000);
}
