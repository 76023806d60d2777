//! Pixel-pair to glyph conversion for fourcolor.
//!
//! Turns an RGBA buffer into a grid of palette glyphs, one per column and
//! pixel-row pair.

pub mod quantize;

pub use quantize::{GlyphGrid, quantize, quantize_into};
