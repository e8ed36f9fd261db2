//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tedit/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::measure::{
    FontMeasurer, MeasureOptions, MonospaceMeasurer, TextMeasurer, NATIVE_TAB_SIZE,
};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Desired tab width in columns
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Tab width the rendering primitive uses on its own
    #[serde(default = "default_native_tab_size")]
    pub native_tab_size: usize,

    /// Caret width in pixels
    #[serde(default = "default_caret_width")]
    pub caret_width: f32,

    /// Caret blink half-period
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,

    /// TTF/OTF file for glyph measurement; monospace metrics when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

fn default_font_family() -> String {
    "Segoe UI".to_string()
}

fn default_font_size() -> f32 {
    12.0
}

fn default_tab_size() -> usize {
    4
}

fn default_native_tab_size() -> usize {
    NATIVE_TAB_SIZE
}

fn default_caret_width() -> f32 {
    1.0
}

fn default_blink_interval_ms() -> u64 {
    530
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            tab_size: default_tab_size(),
            native_tab_size: default_native_tab_size(),
            caret_width: default_caret_width(),
            blink_interval_ms: default_blink_interval_ms(),
            font_path: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.sanitize();
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow!("No config directory available"))?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Measurement options for this configuration
    pub fn measure_options(&self) -> MeasureOptions {
        MeasureOptions {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            tab_size: self.tab_size,
        }
    }

    /// Period of the caret blink timer
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Build the measurer this configuration asks for: glyph metrics from
    /// `font_path` when set, monospace metrics otherwise
    pub fn measurer(&self) -> Result<Box<dyn TextMeasurer>> {
        let options = self.measure_options();
        match &self.font_path {
            Some(path) => Ok(Box::new(
                FontMeasurer::from_file(path, options)?.with_native_tab_size(self.native_tab_size),
            )),
            None => Ok(Box::new(
                MonospaceMeasurer::new(options).with_native_tab_size(self.native_tab_size),
            )),
        }
    }

    fn sanitize(&mut self) {
        if self.tab_size == 0 {
            tracing::warn!("tab_size 0 in config, using 1");
            self.tab_size = 1;
        }
        if self.native_tab_size == 0 {
            self.native_tab_size = NATIVE_TAB_SIZE;
        }
        if self.blink_interval_ms == 0 {
            tracing::warn!("blink_interval_ms 0 in config, using default");
            self.blink_interval_ms = default_blink_interval_ms();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EditorConfig = serde_yaml::from_str("tab_size: 2\n").unwrap();
        assert_eq!(config.tab_size, 2);
        assert_eq!(config.font_family, "Segoe UI");
        assert_eq!(config.blink_interval_ms, 530);
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_blink_interval() {
        assert_eq!(
            EditorConfig::default().blink_interval(),
            Duration::from_millis(530)
        );
    }

    #[test]
    fn test_measure_options() {
        let config = EditorConfig {
            tab_size: 8,
            ..EditorConfig::default()
        };
        let options = config.measure_options();
        assert_eq!(options.tab_size, 8);
        assert_eq!(options.font_size, 12.0);
    }

    #[test]
    fn test_measurer_without_font_is_monospace() {
        let measurer = EditorConfig::default().measurer().unwrap();
        assert_eq!(measurer.measure("ab", false), 2.0 * measurer.measure("a", false));
    }

    #[test]
    fn test_measurer_missing_font_file_errors() {
        let config = EditorConfig {
            font_path: Some(PathBuf::from("/nonexistent/font.ttf")),
            ..EditorConfig::default()
        };
        assert!(config.measurer().is_err());
    }
}
