//! Configuration module for `grade-stats`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Compiled-in default configuration, written to the user config
/// directory on first run.
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfig.toml");

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Input parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Whether the first row of the input file is a header to discard
    #[serde(default = "default_skip_header")]
    pub skip_header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_header: default_skip_header(),
        }
    }
}

const fn default_skip_header() -> bool {
    true
}

/// Chart rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Output image width in pixels
    #[serde(default)]
    pub width: u32,
    /// Output image height in pixels
    #[serde(default)]
    pub height: u32,
    /// Label for the value axis when no CLI override is given
    #[serde(default)]
    pub x_axis_label: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Input parsing settings
    #[serde(default)]
    pub input: InputConfig,
    /// Chart rendering settings
    #[serde(default)]
    pub chart: ChartConfig,
}

/// CLI-provided overrides applied on top of the loaded configuration,
/// where `None` means no override
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Log level override
    pub level: Option<String>,
    /// Log file override
    pub file: Option<String>,
    /// Verbose flag override
    pub verbose: Option<bool>,
    /// Header-skip override
    pub skip_header: Option<bool>,
    /// Value-axis label override
    pub x_axis_label: Option<String>,
}

impl Config {
    /// Get the `$GRADE_STATS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradestats`
    /// - macOS: `~/Library/Application Support/gradestats`
    /// - Windows: `%APPDATA%\gradestats`
    #[must_use]
    pub fn get_gradestats_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradestats")
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            Self::get_gradestats_dir().join("dconfig.toml")
        }
        #[cfg(not(debug_assertions))]
        {
            Self::get_gradestats_dir().join("config.toml")
        }
    }

    /// Expand `$GRADE_STATS` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GRADE_STATS") {
            let gradestats_dir = Self::get_gradestats_dir();
            value.replace("$GRADE_STATS", gradestats_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }

        if self.chart.width == 0 && defaults.chart.width != 0 {
            self.chart.width = defaults.chart.width;
            changed = true;
        }
        if self.chart.height == 0 && defaults.chart.height != 0 {
            self.chart.height = defaults.chart.height;
            changed = true;
        }
        if self.chart.x_axis_label.is_empty() && !defaults.chart.x_axis_label.is_empty() {
            self.chart
                .x_axis_label
                .clone_from(&defaults.chart.x_axis_label);
            changed = true;
        }

        changed
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides to the loaded configuration
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(skip_header) = overrides.skip_header {
            self.input.skip_header = skip_header;
        }
        if let Some(label) = &overrides.x_axis_label {
            self.chart.x_axis_label.clone_from(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_sensible_values() {
        let config = Config::from_defaults();

        assert_eq!(config.logging.level, "warn");
        assert!(config.input.skip_header);
        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.height, 768);
        assert_eq!(config.chart.x_axis_label, "Percent Grade");
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config = Config::from_toml("[logging]\nlevel = \"debug\"\n").expect("parse");

        assert_eq!(config.logging.level, "debug");
        assert!(config.input.skip_header);
        assert_eq!(config.chart.width, 0);
    }

    #[test]
    fn test_merge_defaults_fills_missing_fields() {
        let mut config = Config::from_toml("[logging]\nlevel = \"\"\n").expect("parse");
        let defaults = Config::from_defaults();

        let changed = config.merge_defaults(&defaults);

        assert!(changed);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.x_axis_label, "Percent Grade");
    }

    #[test]
    fn test_merge_defaults_preserves_existing_values() {
        let toml_str = "[chart]\nwidth = 640\nheight = 480\nx_axis_label = \"Score\"\n";
        let mut config = Config::from_toml(toml_str).expect("parse");

        config.merge_defaults(&Config::from_defaults());

        assert_eq!(config.chart.width, 640);
        assert_eq!(config.chart.height, 480);
        assert_eq!(config.chart.x_axis_label, "Score");
    }

    #[test]
    fn test_variable_expansion_in_log_file() {
        let config =
            Config::from_toml("[logging]\nfile = \"$GRADE_STATS/run.log\"\n").expect("parse");

        assert!(!config.logging.file.contains("$GRADE_STATS"));
        assert!(config.logging.file.ends_with("run.log"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::from_defaults();
        let overrides = ConfigOverrides {
            level: Some("debug".to_string()),
            file: None,
            verbose: Some(true),
            skip_header: Some(false),
            x_axis_label: Some("Raw Score".to_string()),
        };

        config.apply_overrides(&overrides);

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.verbose);
        assert!(!config.input.skip_header);
        assert_eq!(config.chart.x_axis_label, "Raw Score");
    }

    #[test]
    fn test_apply_overrides_none_is_noop() {
        let mut config = Config::from_defaults();
        let before = config.chart.x_axis_label.clone();

        config.apply_overrides(&ConfigOverrides::default());

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.chart.x_axis_label, before);
    }

    #[test]
    fn test_config_file_path_shape() {
        let path = Config::get_config_file_path();
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("gradestats"));
        assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    }
}
