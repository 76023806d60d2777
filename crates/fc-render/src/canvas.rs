use fc_ascii::quantize::{GlyphGrid, quantize_into};
use fc_core::config::{CanvasConfig, check_dimensions};
use fc_core::error::CoreError;
use fc_core::frame::FrameBuffer;
use fc_core::palette::Palette;

use crate::error::RenderError;
use crate::stats::PaintStats;
use crate::writer::{TerminalWriter, goto_sequence_len};

/// Fixed-size text canvas that repaints only what changed between frames.
///
/// Each terminal cell shows two vertically stacked pixels. The canvas keeps
/// the last painted frame; the next [`paint`](Self::paint) compares glyphs
/// cell by cell and sends the changed ones, letting the terminal's own
/// cursor advance carry it over short unchanged runs and jumping over long
/// ones.
///
/// # Example
/// ```
/// use fc_core::palette::Palette;
/// use fc_render::canvas::FourColorCanvas;
/// use fc_render::writer::AnsiWriter;
///
/// let mut canvas = FourColorCanvas::new(4, 2, Palette::WhiteOnBlack).unwrap();
/// let mut out = AnsiWriter::new(Vec::new());
/// canvas.paint(&[255; 4 * 2 * 4], &mut out).unwrap();
/// assert_eq!(out.into_inner(), b"\x1b[1;1H8888\x1b[1;5H");
/// ```
#[derive(Debug)]
pub struct FourColorCanvas {
    width: u32,
    height: u32,
    palette: Palette,
    /// Dernière frame peinte avec succès, `None` avant le premier paint.
    previous_frame: Option<Vec<u8>>,
    /// Glyphes de `previous_frame`. Sans signification tant qu'il vaut `None`.
    previous_glyphs: GlyphGrid,
    /// Grille de travail pour la frame en cours.
    glyphs: GlyphGrid,
    last_stats: PaintStats,
}

impl FourColorCanvas {
    /// Crée un canvas de `width × height` pixels.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] for zero sizes, odd heights,
    /// or sizes beyond `MAX_WIDTH` × `MAX_HEIGHT`.
    pub fn new(width: u32, height: u32, palette: Palette) -> Result<Self, CoreError> {
        check_dimensions(width, height)?;
        let columns = width as usize;
        let rows = height as usize / 2;
        Ok(Self {
            width,
            height,
            palette,
            previous_frame: None,
            previous_glyphs: GlyphGrid::new(columns, rows),
            glyphs: GlyphGrid::new(columns, rows),
            last_stats: PaintStats::default(),
        })
    }

    /// Create a canvas from a loaded configuration.
    ///
    /// # Errors
    /// Same as [`FourColorCanvas::new`].
    pub fn from_config(config: &CanvasConfig) -> Result<Self, CoreError> {
        Self::new(config.width, config.height, config.palette)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Active palette.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Last successfully painted frame.
    #[must_use]
    pub fn previous_frame(&self) -> Option<&[u8]> {
        self.previous_frame.as_deref()
    }

    /// Counters from the most recent successful paint.
    #[must_use]
    pub const fn last_stats(&self) -> PaintStats {
        self.last_stats
    }

    /// Oublie la frame précédente : le prochain paint redessine tout.
    pub fn reset(&mut self) {
        self.previous_frame = None;
    }

    /// Paint a [`FrameBuffer`].
    ///
    /// # Errors
    /// Same as [`FourColorCanvas::paint`].
    pub fn paint_frame<T>(&mut self, frame: &FrameBuffer, writer: &mut T) -> Result<(), RenderError>
    where
        T: TerminalWriter + ?Sized,
    {
        self.paint(&frame.data, writer)
    }

    /// Paint an RGBA buffer of exactly `width × height × 4` bytes.
    ///
    /// Starts at the canvas origin, writes changed glyphs, skips unchanged
    /// runs with a cursor jump when the jump is strictly shorter than
    /// rewriting them, parks the cursor at (`width + 1`, `height / 2`) and
    /// flushes once.
    ///
    /// # Errors
    /// [`RenderError::InvalidInput`] on a length mismatch, before any output
    /// or state change. [`RenderError::Io`] if the flush fails; the previous
    /// frame is then forgotten since the screen state is unknown.
    pub fn paint<T>(&mut self, pixels: &[u8], writer: &mut T) -> Result<(), RenderError>
    where
        T: TerminalWriter + ?Sized,
    {
        let expected = self.width as usize * self.height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::InvalidInput {
                expected,
                actual: pixels.len(),
            });
        }

        quantize_into(pixels, self.width as usize, self.palette, &mut self.glyphs);
        let has_previous = self.previous_frame.is_some();

        let mut stats = PaintStats::default();
        // Characters queued since the last change that the screen already shows.
        let mut run = 0usize;

        writer.begin();
        writer.goto(1, 1);
        stats.cursor_moves += 1;

        for row in 0..self.glyphs.rows {
            for column in 0..self.glyphs.columns {
                let ch = self.glyphs.get(column, row);

                if has_previous && self.previous_glyphs.get(column, row) == ch {
                    run += 1;
                    stats.cells_unchanged += 1;
                } else {
                    // Bounded by MAX_WIDTH / MAX_HEIGHT.
                    let x = (column + 1) as u16;
                    let y = (row + 1) as u16;
                    if run > goto_sequence_len(x, y) {
                        writer.truncate_pending(run);
                        writer.goto(x, y);
                        stats.chars_trimmed += run;
                        stats.cursor_moves += 1;
                    }
                    run = 0;
                    stats.cells_changed += 1;
                }

                writer.write_char(ch);
            }

            run += 1;
            writer.write_char('\n');
        }

        // The parking jump below makes the trailing unchanged text unnecessary.
        if run > 0 {
            writer.truncate_pending(run);
            stats.chars_trimmed += run;
        }

        writer.goto((self.width + 1) as u16, (self.height / 2) as u16);
        stats.cursor_moves += 1;

        stats.bytes_flushed = match writer.flush() {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Frame flush failed, next paint will redraw everything: {e}");
                self.previous_frame = None;
                return Err(e.into());
            }
        };

        // Replace wholesale; the caller keeps its own buffer.
        self.previous_frame = Some(pixels.to_vec());
        std::mem::swap(&mut self.glyphs, &mut self.previous_glyphs);
        self.last_stats = stats;

        log::debug!(
            "paint: {} changed, {} unchanged, {} cursor moves, {} bytes",
            stats.cells_changed,
            stats.cells_unchanged,
            stats.cursor_moves,
            stats.bytes_flushed
        );
        Ok(())
    }
}
