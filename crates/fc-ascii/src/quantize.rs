use fc_core::frame::brightness_level;
use fc_core::palette::Palette;

/// Grille row-major de glyphes, un par cellule du terminal.
///
/// # Example
/// ```
/// use fc_ascii::quantize::GlyphGrid;
/// let grid = GlyphGrid::new(80, 24);
/// assert_eq!(grid.cells.len(), 80 * 24);
/// assert_eq!(grid.get(0, 0), ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    /// Tableau plat de glyphes, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub columns: usize,
    /// Height in characters.
    pub rows: usize,
}

impl GlyphGrid {
    /// Crée une grille vide aux dimensions données.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![' '; columns * rows],
            columns,
            rows,
        }
    }

    /// Glyph at (column, row).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> char {
        self.cells[row * self.columns + column]
    }

    /// One text row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }
}

/// Glyph for the pixel pair at `top` and `bottom` byte offsets.
#[inline(always)]
fn pair_glyph(pixels: &[u8], top: usize, bottom: usize, palette: Palette) -> char {
    let top_level = brightness_level(pixels[top], pixels[top + 1], pixels[top + 2]);
    let bottom_level = brightness_level(pixels[bottom], pixels[bottom + 1], pixels[bottom + 2]);
    palette.glyph(top_level, bottom_level)
}

/// Quantize an RGBA buffer into `grid`.
///
/// La ligne de texte `r` vient des lignes de pixels `2r` (haut) et `2r + 1` (bas).
/// `grid` must already be sized `pixel_width × pixel_height / 2` and `pixels`
/// must hold exactly `pixel_width × pixel_height × 4` bytes; the caller
/// checks both. Runs on the calling thread.
///
/// # Example
/// ```
/// use fc_ascii::quantize::{GlyphGrid, quantize_into};
/// use fc_core::palette::Palette;
///
/// // 1×2 image: white over black.
/// let pixels = [255, 255, 255, 255, 0, 0, 0, 255];
/// let mut grid = GlyphGrid::new(1, 1);
/// quantize_into(&pixels, 1, Palette::WhiteOnBlack, &mut grid);
/// assert_eq!(grid.get(0, 0), '*');
/// ```
pub fn quantize_into(pixels: &[u8], pixel_width: usize, palette: Palette, grid: &mut GlyphGrid) {
    debug_assert_eq!(grid.columns, pixel_width, "grid width mismatch");
    debug_assert_eq!(pixels.len(), pixel_width * grid.rows * 2 * 4, "buffer size mismatch");

    let stride = pixel_width * 4;
    for (row, out) in grid.cells.chunks_mut(pixel_width.max(1)).enumerate() {
        let top_row = row * 2 * stride;
        let bottom_row = top_row + stride;
        for (column, cell) in out.iter_mut().enumerate() {
            let offset = column * 4;
            *cell = pair_glyph(pixels, top_row + offset, bottom_row + offset, palette);
        }
    }
}

/// Convenience for one-shot usage: allocate and fill a grid.
///
/// # Example
/// ```
/// use fc_ascii::quantize::quantize;
/// use fc_core::palette::Palette;
/// let grid = quantize(&[0; 4 * 4 * 4], 4, 4, Palette::BlackOnWhite);
/// assert_eq!(grid.row(1), &['8'; 4]);
/// ```
#[must_use]
pub fn quantize(pixels: &[u8], pixel_width: usize, pixel_height: usize, palette: Palette) -> GlyphGrid {
    let mut grid = GlyphGrid::new(pixel_width, pixel_height / 2);
    quantize_into(pixels, pixel_width, palette, &mut grid);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(levels: &[u8]) -> Vec<u8> {
        levels.iter().flat_map(|&v| [v, v, v, 255]).collect()
    }

    #[test]
    fn black_pair_is_space() {
        let grid = quantize(&gray(&[0, 0]), 1, 2, Palette::WhiteOnBlack);
        assert_eq!(grid.get(0, 0), ' ');
    }

    #[test]
    fn white_pair_is_densest() {
        let grid = quantize(&gray(&[255, 255]), 1, 2, Palette::WhiteOnBlack);
        assert_eq!(grid.get(0, 0), '8');
    }

    #[test]
    fn rows_pair_up_vertically() {
        // 2×4 image, columns differ, two text rows.
        #[rustfmt::skip]
        let pixels = gray(&[
            0,   255,
            255, 0,
            100, 150,
            150, 100,
        ]);
        let grid = quantize(&pixels, 2, 4, Palette::WhiteOnBlack);
        assert_eq!((grid.columns, grid.rows), (2, 2));
        assert_eq!(grid.row(0), &['u', '*']);
        assert_eq!(grid.row(1), &['L', 'T']);
    }

    #[test]
    fn matches_per_pixel_lookup() {
        use fc_core::frame::FrameBuffer;

        let mut frame = FrameBuffer::new(7, 6);
        for (i, byte) in frame.data.iter_mut().enumerate() {
            *byte = (i * 37 % 256) as u8;
        }
        let grid = quantize(&frame.data, 7, 6, Palette::WhiteOnBlack);
        for row in 0..3u32 {
            for column in 0..7u32 {
                let top = frame.brightness_level(column, row * 2);
                let bottom = frame.brightness_level(column, row * 2 + 1);
                assert_eq!(
                    grid.get(column as usize, row as usize),
                    Palette::WhiteOnBlack.glyph(top, bottom),
                    "cell ({column}, {row})"
                );
            }
        }
    }

    #[test]
    fn inverted_palette_mirrors() {
        let pixels = gray(&[0, 255]);
        let dark = quantize(&pixels, 1, 2, Palette::WhiteOnBlack);
        let light = quantize(&pixels, 1, 2, Palette::BlackOnWhite);
        assert_eq!(dark.get(0, 0), 'u');
        assert_eq!(light.get(0, 0), '*');
    }
}
