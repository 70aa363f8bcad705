use tracing::debug;

use crate::grid::{BoolGrid, GridConfig, ProjectionGrids};
use crate::math::Coord;
use crate::voxel::{Color, Voxel, VoxelSet};

/// Offsets applied to front/side column lookups so that their occupied
/// region starts where the top view's does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Added to x before reading a front column.
    pub shift_x: i32,
    /// Added to z before reading a side column.
    pub shift_z: i32,
}

impl Alignment {
    /// Derives the shifts from the first occupied column/row of each view.
    ///
    /// ```text
    ///   shift_x = first col of front - first col of top
    ///   shift_z = first col of side  - first row of top
    /// ```
    ///
    /// A shift is zero when either of its two views is blank. Columns are
    /// scanned in ascending order, each column top to bottom, and the first
    /// hit wins.
    #[must_use]
    pub fn of(grids: &ProjectionGrids) -> Self {
        let min_x_top = grids.top().first_occupied_col();
        let min_z_top = grids.top().first_occupied_row();
        let min_x_front = grids.front().first_occupied_col();
        let min_z_side = grids.side().first_occupied_col();

        Self {
            shift_x: shift(min_x_front, min_x_top),
            shift_z: shift(min_z_side, min_z_top),
        }
    }
}

fn shift(from: Option<usize>, to: Option<usize>) -> i32 {
    match (from, to) {
        (Some(from), Some(to)) => signed(from) - signed(to),
        _ => 0,
    }
}

fn signed(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

/// Reads `grid[row][col + shift]`, treating anything out of range as empty.
fn shifted(grid: &BoolGrid, row: usize, col: i32, shift: i32) -> bool {
    usize::try_from(col + shift)
        .ok()
        .and_then(|c| grid.get(row, c))
        .copied()
        .unwrap_or(false)
}

/// Rebuilds a voxel set from three silhouettes ("max fill with smart
/// alignment").
///
/// Front and side are first shifted so their occupied regions line up with
/// the top view; then every cell of the grid volume is filled when all three
/// aligned views are set over it. The result is the largest shape consistent
/// with the views, and is empty for blank input.
pub struct Reconstruct {
    config: GridConfig,
    color: Option<Color>,
}

impl Reconstruct {
    /// Creates a new `Reconstruct` operation producing uncolored voxels.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            color: None,
        }
    }

    /// Sets the color given to every reconstructed voxel.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Executes the reconstruction.
    #[must_use]
    pub fn execute(&self, grids: &ProjectionGrids) -> VoxelSet {
        let alignment = Alignment::of(grids);
        debug!(
            shift_x = alignment.shift_x,
            shift_z = alignment.shift_z,
            "reconstructing from silhouettes"
        );

        let voxels: VoxelSet = self
            .config
            .coords()
            .filter(|p| self.covered(grids, alignment, p))
            .map(|p| Voxel::at(p).with_color(self.color.clone()))
            .collect();

        debug!(count = voxels.len(), "reconstruction done");
        voxels
    }

    fn covered(&self, grids: &ProjectionGrids, alignment: Alignment, p: &Coord) -> bool {
        let (Ok(x), Ok(z)) = (usize::try_from(p.x), usize::try_from(p.z)) else {
            return false;
        };
        let Some(row) = self.config.row_for_height(p.y) else {
            return false;
        };

        grids.top().get(z, x).copied().unwrap_or(false)
            && shifted(grids.front(), row, p.x, alignment.shift_x)
            && shifted(grids.side(), row, p.z, alignment.shift_z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::View;
    use crate::operations::Project;

    fn set(coords: &[(i32, i32, i32)]) -> VoxelSet {
        coords.iter().map(|&(x, y, z)| Voxel::new(x, y, z)).collect()
    }

    fn full_cube(config: &GridConfig) -> VoxelSet {
        config.coords().map(Voxel::at).collect()
    }

    #[test]
    fn blank_grids_reconstruct_to_nothing() {
        let config = GridConfig::default();
        let grids = ProjectionGrids::empty(&config);
        assert_eq!(Alignment::of(&grids), Alignment::default());
        assert!(Reconstruct::new(config).execute(&grids).is_empty());
    }

    #[test]
    fn dense_cube_round_trip() {
        for config in [
            GridConfig::default(),
            GridConfig::new(3, 6).unwrap(),
            GridConfig::new(6, 2).unwrap(),
        ] {
            let cube = full_cube(&config);
            let grids = Project::new(config).execute(&cube);
            let rebuilt = Reconstruct::new(config).execute(&grids);
            assert_eq!(rebuilt.len(), config.volume());
            assert_eq!(rebuilt, cube);
        }
    }

    #[test]
    fn single_voxel_round_trip() {
        let config = GridConfig::default();
        let original = set(&[(2, 0, 2)]);
        let grids = Project::new(config).execute(&original);
        assert_eq!(grids.top().get(2, 2), Some(&true));
        assert_eq!(grids.front().get(4, 2), Some(&true));
        assert_eq!(grids.side().get(4, 2), Some(&true));

        let rebuilt = Reconstruct::new(config).execute(&grids);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn one_blank_view_yields_nothing() {
        let config = GridConfig::default();
        let mut grids = Project::new(config).execute(&set(&[(1, 1, 1), (2, 2, 2)]));
        for row in 0..5 {
            for col in 0..5 {
                grids.set(View::Side, row, col, false);
            }
        }
        assert!(Reconstruct::new(config).execute(&grids).is_empty());
    }

    #[test]
    fn drifted_front_view_is_realigned() {
        let config = GridConfig::default();
        let mut grids = ProjectionGrids::empty(&config);
        // Top: a 2-wide bar at x = 1..=2, z = 2.
        grids.set(View::Top, 2, 1, true);
        grids.set(View::Top, 2, 2, true);
        // Front: the same bar drawn two columns to the right, on the floor.
        grids.set(View::Front, 4, 3, true);
        grids.set(View::Front, 4, 4, true);
        // Side: z = 2 on the floor, matching the top's z-start.
        grids.set(View::Side, 4, 2, true);

        let op = Reconstruct::new(config);
        assert_eq!(
            Alignment::of(&grids),
            Alignment {
                shift_x: 2,
                shift_z: 0
            }
        );

        let rebuilt = op.execute(&grids);
        assert_eq!(rebuilt, set(&[(1, 0, 2), (2, 0, 2)]));
        assert!(rebuilt.iter().all(|v| (1..=2).contains(&v.x)));
    }

    #[test]
    fn drifted_side_view_is_realigned() {
        let config = GridConfig::default();
        let mut grids = ProjectionGrids::empty(&config);
        grids.set(View::Top, 3, 0, true);
        grids.set(View::Front, 3, 0, true);
        grids.set(View::Front, 4, 0, true);
        // Side drawn at z = 0 instead of z = 3.
        grids.set(View::Side, 3, 0, true);
        grids.set(View::Side, 4, 0, true);

        let op = Reconstruct::new(config);
        assert_eq!(Alignment::of(&grids).shift_z, -3);
        assert_eq!(op.execute(&grids), set(&[(0, 0, 3), (0, 1, 3)]));
    }

    #[test]
    fn shifted_lookup_past_edge_is_empty() {
        let config = GridConfig::default();
        let mut grids = ProjectionGrids::empty(&config);
        // Top occupies x = 0 and x = 4; front starts at x = 1 so shift_x = 1
        // and x = 4 would read front column 5, which does not exist.
        grids.set(View::Top, 0, 0, true);
        grids.set(View::Top, 0, 4, true);
        grids.set(View::Front, 4, 1, true);
        grids.set(View::Front, 4, 4, true);
        grids.set(View::Side, 4, 0, true);

        let rebuilt = Reconstruct::new(config).execute(&grids);
        assert_eq!(rebuilt, set(&[(0, 0, 0)]));
    }

    #[test]
    fn column_scan_tie_break_prefers_lowest_column() {
        let config = GridConfig::default();
        let mut grids = ProjectionGrids::empty(&config);
        // Lower rows in higher columns must not win over a higher row in a
        // lower column.
        grids.set(View::Front, 0, 2, true);
        grids.set(View::Front, 4, 3, true);
        grids.set(View::Top, 4, 1, true);
        assert_eq!(Alignment::of(&grids).shift_x, 1);
    }

    #[test]
    fn reconstructed_voxels_take_fill_color() {
        let config = GridConfig::default();
        let grids = Project::new(config).execute(&set(&[(0, 0, 0)]));
        let red = Color::new("#ff0000");
        let rebuilt = Reconstruct::new(config)
            .with_color(Some(red.clone()))
            .execute(&grids);
        assert!(rebuilt.iter().all(|v| v.color.as_ref() == Some(&red)));
    }

    #[test]
    fn intersection_is_the_largest_consistent_shape() {
        let config = GridConfig::default();
        let l_shape = set(&[(0, 0, 0), (1, 0, 0), (0, 0, 1)]);
        let grids = Project::new(config).execute(&l_shape);
        assert_eq!(Reconstruct::new(config).execute(&grids), l_shape);

        // (0, 1, 0) is hidden behind the other three in every view, so the
        // silhouettes cannot rule it out.
        let staircase = set(&[(0, 0, 0), (1, 1, 0), (0, 1, 1)]);
        let grids = Project::new(config).execute(&staircase);
        let rebuilt = Reconstruct::new(config).execute(&grids);
        assert_eq!(rebuilt.len(), 4);
        assert!(rebuilt.contains(&Coord::new(0, 1, 0)));
        assert!(staircase.iter().all(|v| rebuilt.contains(&v.coord())));
    }
}
