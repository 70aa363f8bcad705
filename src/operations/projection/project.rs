use crate::grid::{GridConfig, ProjectionGrids, View};
use crate::math::checked_index;
use crate::voxel::VoxelSet;

/// Flattens a voxel set into its top, front and side silhouettes.
///
/// Each voxel marks one cell per view:
///
/// ```text
///   top[z][x]
///   front[max_height - 1 - y][x]
///   side[max_height - 1 - y][z]
/// ```
///
/// Voxels outside the configured grid are skipped.
pub struct Project {
    config: GridConfig,
}

impl Project {
    /// Creates a new `Project` operation.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Executes the projection. The result is always fully sized, and
    /// all-false for an empty set.
    #[must_use]
    pub fn execute(&self, voxels: &VoxelSet) -> ProjectionGrids {
        let mut grids = ProjectionGrids::empty(&self.config);
        for voxel in voxels {
            let x = checked_index(voxel.x, self.config.grid_size());
            let z = checked_index(voxel.z, self.config.grid_size());
            let row = self.config.row_for_height(voxel.y);

            if let (Some(x), Some(z)) = (x, z) {
                grids.set(View::Top, z, x, true);
            }
            if let (Some(row), Some(x)) = (row, x) {
                grids.set(View::Front, row, x, true);
            }
            if let (Some(row), Some(z)) = (row, z) {
                grids.set(View::Side, row, z, true);
            }
        }
        grids
    }
}
