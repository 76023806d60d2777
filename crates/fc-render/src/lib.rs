//! Differential terminal output for fourcolor.
//!
//! [`canvas::FourColorCanvas`] diffs each frame against the previous one and
//! drives a [`writer::TerminalWriter`] with the cheapest mix of cursor jumps
//! and character rewrites.

pub mod canvas;
pub mod error;
pub mod stats;
pub mod writer;

pub use canvas::FourColorCanvas;
pub use error::RenderError;
pub use stats::PaintStats;
pub use writer::{AnsiWriter, TerminalWriter, goto_sequence_len};
