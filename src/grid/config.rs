use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::math::{checked_index, Coord};

/// Dimensions of the voxel grid.
///
/// `grid_size` bounds the plan axes (x and z), `max_height` bounds the
/// vertical axis (y). The two are independent. Both are non-zero, including
/// when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    grid_size: usize,
    max_height: usize,
}

/// Unchecked wire form of [`GridConfig`].
#[derive(Deserialize)]
struct RawGridConfig {
    grid_size: usize,
    max_height: usize,
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(raw: RawGridConfig) -> Result<Self, Self::Error> {
        Self::new(raw.grid_size, raw.max_height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            max_height: 5,
        }
    }
}

impl GridConfig {
    /// Creates a configuration with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns `GridError::ZeroDimension` if either dimension is zero.
    pub fn new(grid_size: usize, max_height: usize) -> Result<Self, GridError> {
        if grid_size == 0 {
            return Err(GridError::ZeroDimension {
                dimension: "grid_size",
            });
        }
        if max_height == 0 {
            return Err(GridError::ZeroDimension {
                dimension: "max_height",
            });
        }
        Ok(Self {
            grid_size,
            max_height,
        })
    }

    /// Number of cells along x and along z.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cells along y.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Returns `true` if the coordinate lies inside the grid volume.
    #[must_use]
    pub fn contains(&self, coord: &Coord) -> bool {
        checked_index(coord.x, self.grid_size).is_some()
            && checked_index(coord.y, self.max_height).is_some()
            && checked_index(coord.z, self.grid_size).is_some()
    }

    /// Row index in the front/side views for height `y`; row 0 is the top.
    #[must_use]
    pub fn row_for_height(&self, y: i32) -> Option<usize> {
        checked_index(y, self.max_height).map(|y| self.max_height - 1 - y)
    }

    /// Total number of cells in the grid volume.
    #[must_use]
    pub fn volume(&self) -> usize {
        self.grid_size * self.grid_size * self.max_height
    }

    /// Iterates every coordinate of the grid volume, x fastest, then y, then z.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (size, height) = (dim(self.grid_size), dim(self.max_height));
        (0..size).flat_map(move |z| {
            (0..height).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y, z)))
        })
    }
}

fn dim(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
