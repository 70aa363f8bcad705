use crate::grid::{CountGrid, Grid, GridConfig, View};
use crate::math::checked_index;
use crate::voxel::VoxelSet;

/// Numeric overlays for the three views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationGrids {
    /// Stack height (highest `y + 1`) of each column, indexed `[z][x]`.
    pub top: CountGrid,
    /// Number of voxels behind each front cell, indexed `[row][x]`.
    pub front: CountGrid,
    /// Number of voxels behind each side cell, indexed `[row][z]`.
    pub side: CountGrid,
}

impl AnnotationGrids {
    /// Grid for `view`.
    #[must_use]
    pub fn view(&self, view: View) -> &CountGrid {
        match view {
            View::Top => &self.top,
            View::Front => &self.front,
            View::Side => &self.side,
        }
    }
}

/// Computes the height/depth numbers shown on top of each projection.
///
/// The top view accumulates the maximum stack height per column; the front
/// and side views accumulate the voxel count along the viewing axis. Cells
/// that accumulate zero are reported as `None`.
pub struct Annotate {
    config: GridConfig,
}

impl Annotate {
    /// Creates a new `Annotate` operation.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Executes the operation for all three views.
    #[must_use]
    pub fn execute(&self, voxels: &VoxelSet) -> AnnotationGrids {
        AnnotationGrids {
            top: self.execute_view(View::Top, voxels),
            front: self.execute_view(View::Front, voxels),
            side: self.execute_view(View::Side, voxels),
        }
    }

    /// Executes the operation for a single view.
    #[must_use]
    pub fn execute_view(&self, view: View, voxels: &VoxelSet) -> CountGrid {
        let (rows, cols) = view.dims(&self.config);
        let mut acc: Grid<u32> = Grid::filled(rows, cols, 0);

        for voxel in voxels {
            let x = checked_index(voxel.x, self.config.grid_size());
            let z = checked_index(voxel.z, self.config.grid_size());
            let row = self.config.row_for_height(voxel.y);

            match view {
                View::Top => {
                    // Height is only meaningful for an in-range y.
                    let (Some(x), Some(z), Some(_)) = (x, z, row) else {
                        continue;
                    };
                    let height = voxel.y.unsigned_abs() + 1;
                    if let Some(cell) = acc.get_mut(z, x) {
                        *cell = (*cell).max(height);
                    }
                }
                View::Front => {
                    if let (Some(row), Some(x)) = (row, x) {
                        if let Some(cell) = acc.get_mut(row, x) {
                            *cell += 1;
                        }
                    }
                }
                View::Side => {
                    if let (Some(row), Some(z)) = (row, z) {
                        if let Some(cell) = acc.get_mut(row, z) {
                            *cell += 1;
                        }
                    }
                }
            }
        }

        let mut out = CountGrid::filled(rows, cols, None);
        for (r, c, &value) in acc.iter() {
            if value > 0 {
                out.set(r, c, Some(value));
            }
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::voxel::Voxel;

    fn set(coords: &[(i32, i32, i32)]) -> VoxelSet {
        coords.iter().map(|&(x, y, z)| Voxel::new(x, y, z)).collect()
    }

    #[test]
    fn empty_set_has_no_numbers() {
        let grids = Annotate::new(GridConfig::default()).execute(&VoxelSet::new());
        for view in View::ALL {
            assert!(grids.view(view).iter().all(|(_, _, v)| v.is_none()));
        }
    }

    #[test]
    fn top_reports_stack_height_not_count() {
        // A floating voxel at y = 3 with nothing under it still reads 4.
        let voxels = set(&[(1, 0, 1), (1, 3, 1), (2, 1, 0)]);
        let top = Annotate::new(GridConfig::default()).execute_view(View::Top, &voxels);
        assert_eq!(top.get(1, 1), Some(&Some(4)));
        assert_eq!(top.get(0, 2), Some(&Some(2)));
        assert_eq!(top.get(0, 0), Some(&None));
    }

    #[test]
    fn front_counts_along_depth() {
        let voxels = set(&[(0, 0, 0), (0, 0, 1), (0, 0, 4), (0, 1, 0)]);
        let front = Annotate::new(GridConfig::default()).execute_view(View::Front, &voxels);
        assert_eq!(front.get(4, 0), Some(&Some(3)));
        assert_eq!(front.get(3, 0), Some(&Some(1)));
        assert_eq!(front.get(4, 1), Some(&None));
    }

    #[test]
    fn side_counts_along_breadth() {
        let voxels = set(&[(0, 2, 3), (1, 2, 3), (4, 2, 3)]);
        let config = GridConfig::new(5, 3).unwrap();
        let side = Annotate::new(config).execute_view(View::Side, &voxels);
        assert_eq!(side.dims(), (3, 5));
        assert_eq!(side.get(0, 3), Some(&Some(3)));
        assert_eq!(side.iter().filter(|(_, _, v)| v.is_some()).count(), 1);
    }

    #[test]
    fn out_of_range_voxels_are_skipped_per_view() {
        // (0, 9, 0) has no valid height, (-1, 0, 0) only has a valid side cell,
        // (7, 7, 7) lies outside on every axis.
        let voxels = set(&[(2, 0, 0), (0, 9, 0), (-1, 0, 0), (7, 7, 7)]);
        let grids = Annotate::new(GridConfig::default()).execute(&voxels);
        let filled = |grid: &CountGrid| grid.iter().filter(|(_, _, v)| v.is_some()).count();

        assert_eq!(filled(&grids.top), 1);
        assert_eq!(grids.top.get(0, 2), Some(&Some(1)));
        assert_eq!(grids.top.get(0, 0), Some(&None));

        assert_eq!(filled(&grids.front), 1);
        assert_eq!(grids.front.get(4, 2), Some(&Some(1)));

        assert_eq!(filled(&grids.side), 1);
        assert_eq!(grids.side.get(4, 0), Some(&Some(2)));
    }

    #[test]
    fn numbers_align_with_projection() {
        use crate::operations::Project;

        let config = GridConfig::new(4, 6).unwrap();
        let voxels = set(&[(0, 0, 0), (3, 5, 2), (1, 2, 3), (1, 3, 3)]);
        let grids = Project::new(config).execute(&voxels);
        let numbers = Annotate::new(config).execute(&voxels);
        for view in View::ALL {
            for (r, c, n) in numbers.view(view).iter() {
                assert_eq!(n.is_some(), grids.view(view).get(r, c) == Some(&true));
            }
        }
    }
}
