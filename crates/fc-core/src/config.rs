use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::palette::Palette;

/// Largest accepted canvas width, in pixels (= terminal columns).
///
/// Well inside 1-based `u16` coordinates, and keeps the canvas buffers (two
/// glyph grids plus the previous frame) to a few tens of MiB at most.
pub const MAX_WIDTH: u32 = 2048;

/// Largest accepted canvas height, in pixels (= 2 × terminal rows).
pub const MAX_HEIGHT: u32 = 2048;

/// Configuration du canvas.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use fc_core::config::CanvasConfig;
/// let config = CanvasConfig::default();
/// assert_eq!(config.target_fps, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// Width in pixels (= terminal columns).
    pub width: u32,
    /// Height in pixels (= 2 × terminal rows). Must be even.
    pub height: u32,
    /// Glyph palette.
    pub palette: Palette,
    /// FPS cible pour les sources animées.
    pub target_fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 48,
            palette: Palette::WhiteOnBlack,
            target_fps: 30,
        }
    }
}

impl CanvasConfig {
    /// Check that the dimensions can be rendered.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] as described in
    /// [`check_dimensions`].
    pub fn validate(&self) -> Result<(), CoreError> {
        check_dimensions(self.width, self.height)
    }

    /// Clampe les champs numériques dans leurs plages valides.
    pub fn clamp_all(&mut self) {
        self.target_fps = self.target_fps.clamp(1, 120);
    }
}

/// Reject dimensions the renderer cannot address: zero sizes, odd heights
/// (the last pixel row would have no partner), and sizes beyond
/// [`MAX_WIDTH`] × [`MAX_HEIGHT`].
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] when any of the above holds.
///
/// # Example
/// ```
/// use fc_core::config::check_dimensions;
/// assert!(check_dimensions(80, 48).is_ok());
/// assert!(check_dimensions(80, 47).is_err());
/// assert!(check_dimensions(0, 2).is_err());
/// ```
pub fn check_dimensions(width: u32, height: u32) -> Result<(), CoreError> {
    let ok = width > 0
        && height > 0
        && height % 2 == 0
        && width <= MAX_WIDTH
        && height <= MAX_HEIGHT;
    if ok {
        Ok(())
    } else {
        Err(CoreError::InvalidDimensions { width, height })
    }
}

/// Structure TOML intermédiaire avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    canvas: CanvasSection,
}

/// Section canvas, tous les champs optionnels pour override partiel.
#[derive(Deserialize)]
struct CanvasSection {
    width: Option<u32>,
    height: Option<u32>,
    palette: Option<String>,
    target_fps: Option<u32>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// An unrecognized palette name falls back to `white-on-black`.
///
/// # Errors
/// Returns an error if the TOML cannot be parsed or the resulting
/// dimensions are invalid.
///
/// # Example
/// ```
/// use fc_core::config::parse_config;
/// use fc_core::palette::Palette;
/// let config = parse_config("[canvas]\npalette = \"black-on-white\"\n").unwrap();
/// assert_eq!(config.palette, Palette::BlackOnWhite);
/// assert_eq!(config.width, 80);
/// ```
pub fn parse_config(content: &str) -> Result<CanvasConfig> {
    let file: ConfigFile = toml::from_str(content).context("TOML parse error")?;

    let mut config = CanvasConfig::default();

    let c = file.canvas;
    if let Some(v) = c.width {
        config.width = v;
    }
    if let Some(v) = c.height {
        config.height = v;
    }
    if let Some(v) = c.palette {
        config.palette = Palette::from_name(&v);
    }
    if let Some(v) = c.target_fps {
        config.target_fps = v;
    }

    config.clamp_all();
    config.validate()?;
    Ok(config)
}

/// Load a TOML file and merge it over the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use fc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<CanvasConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config in {}", path.display()))
}
