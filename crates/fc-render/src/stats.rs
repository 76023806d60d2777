/// Counters for the most recent paint.
///
/// # Example
/// ```
/// use fc_render::stats::PaintStats;
/// let stats = PaintStats::default();
/// assert_eq!(stats.cursor_moves, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Cells whose glyph differs from the previous frame.
    pub cells_changed: usize,
    /// Cells whose glyph is unchanged.
    pub cells_unchanged: usize,
    /// Cursor-position sequences emitted, origin and parking included.
    pub cursor_moves: usize,
    /// Buffered characters dropped in favour of a reposition or at the tail.
    pub chars_trimmed: usize,
    /// Bytes handed to the output in the final flush.
    pub bytes_flushed: usize,
}

impl PaintStats {
    /// True when no cell changed, i.e. the frame only parked the cursor.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.cells_changed == 0
    }
}
