//! Layout lookup and file I/O service.
//!
//! Layouts come either from the built-in tables of the UHK80 right half or
//! from TOML/JSON files with the shape:
//!
//! ```toml
//! name = "my-layout"
//!
//! [[keys]]
//! row = 1
//! width = 1.5
//! legend = "Print"
//! x = 13.75
//! y = 0
//! font_size = 3
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::Layout;

/// Name of the function-row layout.
pub const TOP_ROW: &str = "top-row";

/// Name of the full right-half layout.
pub const RIGHT_HALF: &str = "right-half";

/// Top row of the right half (F7..Pause).
const TOP_ROW_TABLE: &[(i32, f64, &str, f64, f64, f64)] = &[
    (1, 1.0, "F7", 7.5, 0.0, 3.0),
    (1, 1.0, "F8", 8.5, 0.0, 3.0),
    (1, 1.0, "F9", 9.5, 0.0, 3.0),
    (1, 1.0, "F10", 10.5, 0.0, 3.0),
    (1, 1.0, "F11", 11.5, 0.0, 3.0),
    (1, 1.0, "F12", 12.5, 0.0, 3.0),
    (1, 1.5, "Print", 13.75, 0.0, 3.0),
    (1, 1.0, "ScrlLk", 15.0, 0.0, 3.0),
    (1, 1.0, "Pause", 16.0, 0.0, 3.0),
];

/// Every key of the right half, function row first.
const RIGHT_HALF_TABLE: &[(i32, f64, &str, f64, f64, f64)] = &[
    (1, 1.0, "F7", 7.5, 0.0, 3.0),
    (1, 1.0, "F8", 8.5, 0.0, 3.0),
    (1, 1.0, "F9", 9.5, 0.0, 3.0),
    (1, 1.0, "F10", 10.5, 0.0, 3.0),
    (1, 1.0, "F11", 11.5, 0.0, 3.0),
    (1, 1.0, "F12", 12.5, 0.0, 3.0),
    (1, 1.5, "Print", 13.75, 0.0, 3.0),
    (1, 1.0, "ScrLk", 15.0, 0.0, 3.0),
    (1, 1.0, "Pause", 16.0, 0.0, 3.0),
    (2, 1.0, "7", 7.5, -1.0, 4.0),
    (2, 1.0, "8", 8.5, -1.0, 4.0),
    (2, 1.0, "9", 9.5, -1.0, 4.0),
    (2, 1.0, "0", 10.5, -1.0, 4.0),
    (2, 1.0, "-", 11.5, -1.0, 4.0),
    (2, 1.0, "=", 12.5, -1.0, 4.0),
    (1, 1.5, "Backspace", 13.75, -1.0, 4.0),
    (1, 1.0, "Ins", 15.0, -1.0, 4.0),
    (1, 1.0, "Del", 16.0, -1.0, 4.0),
    (3, 1.0, "Y", 7.0, -2.0, 4.0),
    (3, 1.0, "U", 8.0, -2.0, 4.0),
    (3, 1.0, "I", 9.0, -2.0, 4.0),
    (3, 1.0, "O", 10.0, -2.0, 4.0),
    (3, 1.0, "P", 11.0, -2.0, 4.0),
    (3, 1.0, "[", 12.0, -2.0, 4.0),
    (3, 1.0, "]", 13.0, -2.0, 4.0),
    (3, 1.0, "\\", 14.0, -2.0, 4.0),
    (2, 1.0, "Home", 15.0, -2.0, 4.0),
    (2, 1.0, "PgUp", 16.0, -2.0, 4.0),
    (4, 1.0, "H", 7.25, -3.0, 4.0),
    (4, 1.0, "J", 8.25, -3.0, 4.0),
    (4, 1.0, "K", 9.25, -3.0, 4.0),
    (4, 1.0, "L", 10.25, -3.0, 4.0),
    (4, 1.0, ";", 11.25, -3.0, 4.0),
    (4, 1.0, "'", 12.25, -3.0, 4.0),
    (4, 1.75, "Enter", 13.625, -3.0, 4.0),
    (4, 1.0, "End", 15.0, -3.0, 4.0),
    (4, 1.0, "PgDn", 16.0, -3.0, 4.0),
    (5, 1.0, "N", 7.75, -4.0, 4.0),
    (5, 1.0, "M", 8.75, -4.0, 4.0),
    (5, 1.0, ",", 9.75, -4.0, 4.0),
    (5, 1.0, ".", 10.75, -4.0, 4.0),
    (5, 1.0, "/", 11.75, -4.0, 4.0),
    (5, 1.25, "Shift", 12.85, -4.0, 4.0),
    (5, 1.0, "\u{00AB}", 14.0, -4.0, 4.0),
    (5, 1.0, "\u{2191}", 15.0, -4.0, 4.0),
    (5, 1.0, "\u{00BB}", 16.0, -4.0, 4.0),
    (5, 1.5, "Space", 7.5, -5.0, 4.0),
    (5, 1.5, "Super", 9.0, -5.0, 4.0),
    (5, 1.25, "Alt", 10.35, -5.0, 4.0),
    (5, 1.25, "Fn", 11.6, -5.0, 4.0),
    (5, 1.25, "Ctrl", 12.85, -5.0, 4.0),
    (5, 1.0, "\u{2190}", 14.0, -5.0, 4.0),
    (5, 1.0, "\u{2193}", 15.0, -5.0, 4.0),
    (5, 1.0, "\u{2192}", 16.0, -5.0, 4.0),
];

/// Supported layout file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl LayoutFormat {
    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Service for resolving built-in layouts and reading/writing layout files.
pub struct LayoutService;

impl LayoutService {
    /// Names of the built-in layouts.
    #[must_use]
    pub const fn builtin_names() -> &'static [&'static str] {
        &[TOP_ROW, RIGHT_HALF]
    }

    /// Returns a built-in layout by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Layout> {
        match name {
            TOP_ROW => Some(Layout::from_table(TOP_ROW, TOP_ROW_TABLE)),
            RIGHT_HALF => Some(Layout::from_table(RIGHT_HALF, RIGHT_HALF_TABLE)),
            _ => None,
        }
    }

    /// Resolves a built-in layout name or a path to a layout file.
    ///
    /// Built-in names win over files of the same name in the working directory.
    pub fn resolve(name_or_path: &str) -> Result<Layout> {
        if let Some(layout) = Self::builtin(name_or_path) {
            debug!("Using built-in layout '{}'", name_or_path);
            return Ok(layout);
        }

        let path = Path::new(name_or_path);
        if !path.exists() {
            anyhow::bail!(
                "Unknown layout '{}'. Use one of [{}] or a path to a .toml/.json layout file",
                name_or_path,
                Self::builtin_names().join(", ")
            );
        }

        Self::load(path)
    }

    /// Loads a layout from a TOML or JSON file.
    ///
    /// A file without a `name` gets its file stem as the layout name.
    pub fn load(path: &Path) -> Result<Layout> {
        let format = LayoutFormat::from_path(path).with_context(|| {
            format!(
                "Unsupported layout file extension: {} (expected .toml or .json)",
                path.display()
            )
        })?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

        let mut layout = Self::parse(&content, format)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;

        if layout.name.trim().is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                layout.name = stem.to_string();
            }
        }

        debug!(
            "Loaded layout '{}' with {} keys from {}",
            layout.name,
            layout.key_count(),
            path.display()
        );

        Ok(layout)
    }

    /// Parses layout file content.
    pub fn parse(content: &str, format: LayoutFormat) -> Result<Layout> {
        let layout = match format {
            LayoutFormat::Toml => {
                toml::from_str::<LayoutFile>(content).context("Invalid TOML layout")?
            }
            LayoutFormat::Json => {
                serde_json::from_str::<LayoutFile>(content).context("Invalid JSON layout")?
            }
        };

        Ok(layout.into())
    }

    /// Saves a layout to a TOML or JSON file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(layout: &Layout, path: &Path) -> Result<()> {
        let format = LayoutFormat::from_path(path).with_context(|| {
            format!(
                "Unsupported layout file extension: {} (expected .toml or .json)",
                path.display()
            )
        })?;

        let content = match format {
            LayoutFormat::Toml => {
                toml::to_string_pretty(layout).context("Failed to serialize layout as TOML")?
            }
            LayoutFormat::Json => serde_json::to_string_pretty(layout)
                .context("Failed to serialize layout as JSON")?,
        };

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp layout file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp layout file to: {}", path.display()))?;

        Ok(())
    }
}

/// On-disk shape of a layout file; `name` is optional there.
#[derive(Debug, serde::Deserialize)]
struct LayoutFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    keys: Vec<crate::models::LayoutEntry>,
}

impl From<LayoutFile> for Layout {
    fn from(file: LayoutFile) -> Self {
        Self {
            name: file.name,
            keys: file.keys,
        }
    }
}
