//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, LEGEND_EMBED, LEGEND_THICKNESS};
use crate::models::RgbColor;
use crate::services::layouts::TOP_ROW;
use crate::services::AssemblyOptions;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Where exports go when no output path is given (current directory if unset)
    pub output_dir: Option<PathBuf>,
}

/// Assembly defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Built-in layout name or layout file used when `--layout` is omitted
    pub default_layout: String,
    /// Cut the MX cross into the stem boss
    pub stem_cross: bool,
    /// Build legend parts
    pub legends: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_layout: TOP_ROW.to_string(),
            stem_cross: true,
            legends: true,
        }
    }
}

/// Legend geometry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Extrusion thickness in millimetres
    pub thickness: f64,
    /// Depth below the top face in millimetres
    pub embed: f64,
    /// TrueType font for mesh legends
    pub font_path: Option<PathBuf>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            thickness: LEGEND_THICKNESS,
            embed: LEGEND_EMBED,
            font_path: None,
        }
    }
}

/// Part colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Keycap color
    pub cap: RgbColor,
    /// Legend color
    pub legend: RgbColor,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cap: RgbColor::CAP,
            legend: RgbColor::LEGEND,
        }
    }
}

/// Application configuration.
///
/// # Validation Rules
///
/// - `legend.thickness` must be positive and finite
/// - `legend.embed` must be zero or positive and finite
/// - every color channel must lie in [0, 1]
/// - `build.default_layout` must not be empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Assembly defaults
    pub build: BuildConfig,
    /// Legend settings
    pub legend: LegendConfig,
    /// Part colors
    pub colors: ColorConfig,
}

/// Keys accepted by [`Config::set_value`].
pub const SETTABLE_KEYS: &[&str] = &[
    "paths.output_dir",
    "build.default_layout",
    "build.stem_cross",
    "build.legends",
    "legend.thickness",
    "legend.embed",
    "legend.font_path",
    "colors.cap",
    "colors.legend",
];

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `UHK80_KEYCAPS_CONFIG_DIR` wins when set; otherwise:
    /// - Linux: `~/.config/UHK80Keycaps/`
    /// - macOS: `~/Library/Application Support/UHK80Keycaps/`
    /// - Windows: `%APPDATA%\UHK80Keycaps\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::parse(&content).context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates TOML configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<PathBuf> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(config_path)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.legend.thickness.is_finite() || self.legend.thickness <= 0.0 {
            bail!(
                "legend.thickness must be positive, got {}",
                self.legend.thickness
            );
        }

        if !self.legend.embed.is_finite() || self.legend.embed < 0.0 {
            bail!(
                "legend.embed must be zero or positive, got {}",
                self.legend.embed
            );
        }

        for (name, color) in [("colors.cap", self.colors.cap), ("colors.legend", self.colors.legend)] {
            if !color.is_valid() {
                bail!("{name} channels must be between 0 and 1, got {color}");
            }
        }

        if self.build.default_layout.trim().is_empty() {
            bail!("build.default_layout must not be empty");
        }

        Ok(())
    }

    /// Sets one value by dotted key, then re-validates.
    ///
    /// Colors accept `#RRGGBB`. Path values accept an empty string to unset.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "paths.output_dir" => self.paths.output_dir = optional_path(value),
            "build.default_layout" => self.build.default_layout = value.to_string(),
            "build.stem_cross" => self.build.stem_cross = parse_bool(key, value)?,
            "build.legends" => self.build.legends = parse_bool(key, value)?,
            "legend.thickness" => self.legend.thickness = parse_f64(key, value)?,
            "legend.embed" => self.legend.embed = parse_f64(key, value)?,
            "legend.font_path" => self.legend.font_path = optional_path(value),
            "colors.cap" => self.colors.cap = RgbColor::from_hex(value)?,
            "colors.legend" => self.colors.legend = RgbColor::from_hex(value)?,
            _ => bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                SETTABLE_KEYS.join(", ")
            ),
        }

        self.validate()
    }

    /// Assembly options derived from the build, legend and color sections.
    #[must_use]
    pub const fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            legends: self.build.legends,
            stem_cross: self.build.stem_cross,
            legend_thickness: self.legend.thickness,
            legend_embed: self.legend.embed,
            cap_color: self.colors.cap,
            legend_color: self.colors.legend,
        }
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => bail!("{key} expects true or false, got '{value}'"),
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} expects a number, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.build.default_layout, TOP_ROW);
        assert!(config.build.stem_cross);
        assert!(config.build.legends);
        assert_eq!(config.legend.thickness, LEGEND_THICKNESS);
        assert_eq!(config.colors.cap, RgbColor::CAP);
        assert!(config.paths.output_dir.is_none());
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_bad_legend() {
        let mut config = Config::new();
        config.legend.thickness = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.legend.embed = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_bad_color() {
        let mut config = Config::new();
        config.colors.legend = RgbColor::new(1.5, 0.0, 0.0);
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("colors.legend"));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::new();
        config.paths.output_dir = Some(PathBuf::from("/tmp/caps"));
        config.legend.embed = 0.5;

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded = Config::parse(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded = Config::parse("[legend]\nthickness = 1.2\n").unwrap();

        assert_eq!(loaded.legend.thickness, 1.2);
        assert_eq!(loaded.legend.embed, LEGEND_EMBED);
        assert_eq!(loaded.build, BuildConfig::default());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::new();
        config.set_value("build.stem_cross", "false").unwrap();
        config.set_value("legend.embed", "1.0").unwrap();
        config.set_value("colors.cap", "#FF0000").unwrap();
        config.set_value("paths.output_dir", "out").unwrap();

        assert!(!config.build.stem_cross);
        assert_eq!(config.legend.embed, 1.0);
        assert_eq!(config.colors.cap, RgbColor::new(1.0, 0.0, 0.0));
        assert_eq!(config.paths.output_dir, Some(PathBuf::from("out")));

        config.set_value("paths.output_dir", "").unwrap();
        assert!(config.paths.output_dir.is_none());
    }

    #[test]
    fn test_set_value_errors() {
        let mut config = Config::new();
        assert!(config.set_value("ui.theme", "dark").is_err());
        assert!(config.set_value("build.legends", "maybe").is_err());
        assert!(config.set_value("legend.thickness", "thick").is_err());
        assert!(config.set_value("legend.thickness", "-1").is_err());
    }

    #[test]
    fn test_assembly_options_follow_config() {
        let mut config = Config::new();
        config.build.legends = false;
        config.legend.thickness = 0.9;

        let options = config.assembly_options();
        assert!(!options.legends);
        assert_eq!(options.legend_thickness, 0.9);
        assert_eq!(options.cap_color, RgbColor::CAP);
    }
}
