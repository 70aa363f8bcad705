use thiserror::Error;

use crate::grid::View;

/// Top-level error type for the Orthovox voxel engine.
#[derive(Debug, Error)]
pub enum OrthovoxError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Voxel(#[from] VoxelError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors related to grid configuration and view grids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimension {dimension} must be non-zero")]
    ZeroDimension { dimension: &'static str },

    #[error("{view:?} grid is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        view: View,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Errors related to voxel identities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoxelError {
    #[error("invalid voxel id: {0:?}")]
    InvalidId(String),
}

/// Errors produced while decoding a shared puzzle.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not an array")]
    NotAnArray,

    #[error("voxel ({x}, {y}, {z}) is outside the grid")]
    OutOfBounds { x: i32, y: i32, z: i32 },
}

/// Convenience type alias for results using [`OrthovoxError`].
pub type Result<T> = std::result::Result<T, OrthovoxError>;
