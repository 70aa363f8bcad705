use serde::{Deserialize, Serialize};

use super::{BoolGrid, GridConfig};
use crate::error::GridError;

/// One of the three orthographic views.
///
/// ```text
///   Top:   rows = z, cols = x      (looking down -Y)
///   Front: rows = y, cols = x      (looking along -Z, row 0 = highest y)
///   Side:  rows = y, cols = z      (looking along -X, row 0 = highest y)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Top,
    Front,
    Side,
}

impl View {
    /// Every view, in top, front, side order.
    pub const ALL: [View; 3] = [View::Top, View::Front, View::Side];

    /// `(rows, cols)` of this view's grid.
    #[must_use]
    pub fn dims(self, config: &GridConfig) -> (usize, usize) {
        match self {
            View::Top => (config.grid_size(), config.grid_size()),
            View::Front | View::Side => (config.max_height(), config.grid_size()),
        }
    }
}

/// The top, front and side occupancy grids of a voxel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionGrids {
    top: BoolGrid,
    front: BoolGrid,
    side: BoolGrid,
}

impl ProjectionGrids {
    /// All-false grids sized for `config`.
    #[must_use]
    pub fn empty(config: &GridConfig) -> Self {
        let blank = |view: View| {
            let (rows, cols) = view.dims(config);
            BoolGrid::filled(rows, cols, false)
        };
        Self {
            top: blank(View::Top),
            front: blank(View::Front),
            side: blank(View::Side),
        }
    }

    /// Wraps three existing grids after checking their dimensions.
    ///
    /// # Errors
    ///
    /// Returns `GridError::DimensionMismatch` for the first grid whose size
    /// does not match `config`.
    pub fn from_views(
        config: &GridConfig,
        top: BoolGrid,
        front: BoolGrid,
        side: BoolGrid,
    ) -> Result<Self, GridError> {
        for (view, grid) in [(View::Top, &top), (View::Front, &front), (View::Side, &side)] {
            let (expected_rows, expected_cols) = view.dims(config);
            if grid.dims() != (expected_rows, expected_cols) {
                return Err(GridError::DimensionMismatch {
                    view,
                    rows: grid.rows(),
                    cols: grid.cols(),
                    expected_rows,
                    expected_cols,
                });
            }
        }
        Ok(Self { top, front, side })
    }

    /// Builds grids from nested boolean rows, as produced by a 2D grid widget.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is ragged or mis-sized.
    pub fn from_rows(
        config: &GridConfig,
        top: Vec<Vec<bool>>,
        front: Vec<Vec<bool>>,
        side: Vec<Vec<bool>>,
    ) -> Result<Self, GridError> {
        Self::from_views(
            config,
            BoolGrid::from_rows(top)?,
            BoolGrid::from_rows(front)?,
            BoolGrid::from_rows(side)?,
        )
    }

    /// Top view, indexed `[z][x]`.
    #[must_use]
    pub fn top(&self) -> &BoolGrid {
        &self.top
    }

    /// Front view, indexed `[row][x]`.
    #[must_use]
    pub fn front(&self) -> &BoolGrid {
        &self.front
    }

    /// Side view, indexed `[row][z]`.
    #[must_use]
    pub fn side(&self) -> &BoolGrid {
        &self.side
    }

    /// Grid for `view`.
    #[must_use]
    pub fn view(&self, view: View) -> &BoolGrid {
        match view {
            View::Top => &self.top,
            View::Front => &self.front,
            View::Side => &self.side,
        }
    }

    pub(crate) fn view_mut(&mut self, view: View) -> &mut BoolGrid {
        match view {
            View::Top => &mut self.top,
            View::Front => &mut self.front,
            View::Side => &mut self.side,
        }
    }

    /// Sets one cell of one view. Out-of-range positions are ignored.
    pub fn set(&mut self, view: View, row: usize, col: usize, value: bool) -> bool {
        self.view_mut(view).set(row, col, value)
    }

    /// Flips one cell of one view, returning its new value.
    pub fn toggle(&mut self, view: View, row: usize, col: usize) -> Option<bool> {
        self.view_mut(view).toggle(row, col)
    }

    /// Resets every view to all-false.
    pub fn clear(&mut self) {
        for view in View::ALL {
            self.view_mut(view).fill(false);
        }
    }

    /// Returns `true` if no view has a set cell.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        View::ALL.iter().all(|&v| self.view(v).is_blank())
    }
}
