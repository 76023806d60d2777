use std::sync::Arc;

use crate::frame::FrameBuffer;

/// Supplies RGBA frames to a canvas.
///
/// Implemented by: `ImageSource`, `PlasmaSource`.
///
/// # Example
/// ```
/// use fc_core::traits::Source;
/// use fc_core::frame::FrameBuffer;
/// use std::sync::Arc;
///
/// struct DummySource;
/// impl Source for DummySource {
///     fn next_frame(&mut self) -> Option<Arc<FrameBuffer>> { None }
///     fn native_size(&self) -> (u32, u32) { (0, 0) }
///     fn is_live(&self) -> bool { false }
/// }
/// ```
pub trait Source: Send + 'static {
    /// Next available frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Option<Arc<FrameBuffer>>;

    /// Frame dimensions produced by this source.
    fn native_size(&self) -> (u32, u32);

    /// Whether the source keeps producing new frames (animation) or
    /// repeats a single still.
    fn is_live(&self) -> bool;
}
