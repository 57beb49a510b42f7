/// Errors reported by the checked entry points of the core
use thiserror::Error;

/// Result type for checked constructors
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations caught when building views over caller-owned buffers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("texture stride must be at least 3 channels, got {0}")]
    StrideTooSmall(usize),

    #[error("texture buffer too small: expected {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("texture size overflows: {width}x{height} with stride {stride}")]
    SizeOverflow {
        width: usize,
        height: usize,
        stride: usize,
    },

    #[error("flat buffer has wrong length: expected {expected} floats, got {actual}")]
    FlatLength { expected: usize, actual: usize },
}
