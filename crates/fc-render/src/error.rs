use thiserror::Error;

/// Errors raised while painting a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Pixel buffer length is not `width × height × 4`. Nothing was written.
    #[error("Pixel array does not match the dimensions of the canvas")]
    InvalidInput {
        /// Expected byte length.
        expected: usize,
        /// Received byte length.
        actual: usize,
    },

    /// The terminal output rejected the flushed frame.
    #[error("Terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}
