//! Error types for plot setup, frame handling and configuration

use thiserror::Error;

/// Rejected arguments to [`setup_plot`](super::setup_plot)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("unsupported dimensionality {0}: expected 2 or 3")]
    UnsupportedDimensions(u32),
    #[error("box length must be finite and positive, got {0}")]
    InvalidBoxLength(f64),
    #[error("marker size must be finite and non-negative, got {0}")]
    InvalidMarkerSize(f64),
}

/// Problems decoding a frame or applying it to a particle artist
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("particle {index} has {found} coordinates, expected {expected}")]
    CoordinateCount {
        index: usize,
        found: usize,
        expected: usize,
    },
    #[error("particle {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("{expected}D artist cannot take {found}D positions")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("failed to read trajectory: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid viewer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
