//! Site configuration persistence
//!
//! Stores user preferences in `~/.config/docsite/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Site configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the sidebar and page titles
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Theme used when no preference has been stored
    #[serde(default)]
    pub default_theme: ThemeMode,

    /// Class of the element whose headings feed the table of contents
    #[serde(default = "default_toc_container")]
    pub toc_container: String,

    /// Class of the element the table of contents is appended to
    #[serde(default = "default_toc_target")]
    pub toc_target: String,

    /// How long copy buttons show "Copied!"/"Failed"
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Delay before the sidebar filter runs; 0 filters on every keystroke
    #[serde(default)]
    pub search_debounce_ms: u64,
}

fn default_site_title() -> String {
    "Documentation".to_string()
}

fn default_toc_container() -> String {
    "content-wrapper".to_string()
}

fn default_toc_target() -> String {
    "toc".to_string()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            default_theme: ThemeMode::default(),
            toc_container: default_toc_container(),
            toc_target: default_toc_target(),
            copy_feedback_ms: default_copy_feedback_ms(),
            search_debounce_ms: 0,
        }
    }
}

impl SiteConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: SiteConfig = serde_yaml::from_str("copy_feedback_ms: 500\n").unwrap();
        assert_eq!(config.copy_feedback_ms, 500);
        assert_eq!(config.toc_container, "content-wrapper");
        assert_eq!(config.toc_target, "toc");
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.search_debounce_ms, 0);
        assert_eq!(config.site_title, "Documentation");
    }

    #[test]
    fn test_theme_parses_lowercase() {
        let config: SiteConfig = serde_yaml::from_str("default_theme: light\n").unwrap();
        assert_eq!(config.default_theme, ThemeMode::Light);
    }
}
