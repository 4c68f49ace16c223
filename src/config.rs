//! Renderer configuration.
//!
//! A [`RenderConfig`] is handed to [`crate::Renderer::new`] once; the font it
//! names is loaded at that point and shared by every render afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Font path used when nothing else is configured, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "font/MicrosoftYaHeiMono-CP950.ttf";

/// How characters are classified as narrow (1 unit) or wide (2 units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthMode {
    /// Wide when the UTF-8 encoding takes more than 2 bytes. Keeps column
    /// widths identical to previously rendered images.
    #[default]
    Utf8Length,
    /// Wide when the Unicode East-Asian-width tables give a display width of 2.
    EastAsian,
}

/// Font size and line metrics, in typographic points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontMetrics {
    pub size: f64,
    pub dpi: f64,
    pub line_spacing: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            size: 20.0,
            dpi: 72.0,
            line_spacing: 2.0,
        }
    }
}

impl FontMetrics {
    /// Em size in pixels.
    pub fn pixel_size(&self) -> f32 {
        (self.size * self.dpi / 72.0) as f32
    }

    /// Vertical advance between two drawn lines.
    pub fn line_height(&self) -> u32 {
        (self.size * self.line_spacing * self.dpi / 72.0).ceil().max(0.0) as u32
    }

    /// Baseline of the first drawn line.
    pub fn top_margin(&self) -> u32 {
        20 + (self.size * self.dpi / 72.0).ceil().max(0.0) as u32
    }
}

/// Everything a [`crate::Renderer`] needs besides the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub font_path: PathBuf,
    pub font: FontMetrics,
    /// Text color as RGB
    pub foreground: [u8; 3],
    /// Canvas fill color as RGB
    pub background: [u8; 3],
    pub width_mode: WidthMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font: FontMetrics::default(),
            foreground: [255, 255, 255],
            background: [0, 0, 0],
            width_mode: WidthMode::default(),
        }
    }
}

impl RenderConfig {
    /// Load a JSON config file. Absent keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    pub fn with_width_mode(mut self, mode: WidthMode) -> Self {
        self.width_mode = mode;
        self
    }
}
