pub mod editor;
pub mod error;
pub mod grid;
pub mod math;
pub mod operations;
pub mod puzzle;
pub mod voxel;

pub use error::{OrthovoxError, Result};
