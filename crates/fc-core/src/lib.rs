//! Shared types, palettes, and configuration for fourcolor.
//!
//! Everything the renderer, the frame sources, and the demo binary agree on
//! lives here: the RGBA frame buffer, the brightness quantizer, the two 4×4
//! glyph palettes, and the TOML-backed canvas configuration.

pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod traits;

pub use config::CanvasConfig;
pub use error::CoreError;
pub use frame::{FrameBuffer, brightness_level};
pub use palette::Palette;
