use tracing::{debug, trace};

use crate::error::GridError;
use crate::grid::{GridConfig, ProjectionGrids, View};
use crate::operations::{Annotate, AnnotationGrids, ComputeStats, Project, Reconstruct, Stats};
use crate::voxel::{Color, Voxel, VoxelId, VoxelSet};

/// Which representation is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The voxel set is edited directly; the views are derived from it.
    #[default]
    Build,
    /// The three views are edited; the voxel set is rebuilt from them.
    Blueprint,
}

/// Everything derived from the voxel set at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub projection: ProjectionGrids,
    pub annotations: AnnotationGrids,
    pub stats: Stats,
}

/// Owns the editable state and keeps derived views consistent with it.
#[derive(Debug, Clone)]
pub struct Editor {
    config: GridConfig,
    voxels: VoxelSet,
    color: Option<Color>,
    blueprint: ProjectionGrids,
    mode: Mode,
}

impl Editor {
    /// Creates an empty editor in build mode.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            voxels: VoxelSet::new(),
            color: None,
            blueprint: ProjectionGrids::empty(&config),
            mode: Mode::Build,
        }
    }

    /// Grid dimensions the editor works in.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current 3D structure.
    #[must_use]
    pub fn voxels(&self) -> &VoxelSet {
        &self.voxels
    }

    /// Current editing mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The editable views. Only meaningful in blueprint mode.
    #[must_use]
    pub fn blueprint(&self) -> &ProjectionGrids {
        &self.blueprint
    }

    /// Color applied to new voxels, if any.
    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Sets the color used for voxels added from now on.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Adds a voxel with the selected color.
    ///
    /// Returns `false` without changing anything when the position is outside
    /// the grid, already occupied, or the editor is in blueprint mode.
    pub fn add_voxel(&mut self, x: i32, y: i32, z: i32) -> bool {
        if self.mode == Mode::Blueprint {
            trace!(x, y, z, "add ignored in blueprint mode");
            return false;
        }
        let voxel = Voxel::new(x, y, z).with_color(self.color.clone());
        if !self.config.contains(&voxel.coord()) {
            trace!(x, y, z, "add ignored outside grid");
            return false;
        }
        self.voxels.insert(voxel)
    }

    /// Removes a voxel. Returns `false` if there was none to remove or the
    /// editor is in blueprint mode.
    pub fn remove_voxel(&mut self, id: &VoxelId) -> bool {
        if self.mode == Mode::Blueprint {
            trace!(%id, "remove ignored in blueprint mode");
            return false;
        }
        self.voxels.remove(id).is_some()
    }

    /// Empties the voxel set and resets the blueprint views.
    pub fn clear(&mut self) {
        self.voxels.clear();
        self.blueprint.clear();
    }

    /// Switches mode. Entering blueprint mode seeds the editable views from
    /// the current voxels; leaving it keeps the rebuilt voxels.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        if mode == Mode::Blueprint {
            self.blueprint = Project::new(self.config).execute(&self.voxels);
        }
        debug!(from = ?self.mode, to = ?mode, "mode change");
        self.mode = mode;
    }

    /// Flips one blueprint cell and rebuilds the voxels from the views.
    ///
    /// Returns the new cell value, or `None` outside blueprint mode or for an
    /// out-of-range cell.
    pub fn toggle_cell(&mut self, view: View, row: usize, col: usize) -> Option<bool> {
        if self.mode != Mode::Blueprint {
            return None;
        }
        let value = self.blueprint.toggle(view, row, col)?;
        self.rebuild();
        Some(value)
    }

    /// Replaces all three blueprint views and rebuilds the voxels.
    ///
    /// # Errors
    ///
    /// Returns `GridError::DimensionMismatch` if a view does not fit the
    /// configured grid.
    pub fn load_blueprint(&mut self, grids: ProjectionGrids) -> Result<(), GridError> {
        let [top, front, side] = View::ALL.map(|v| grids.view(v).clone());
        self.blueprint = ProjectionGrids::from_views(&self.config, top, front, side)?;
        self.mode = Mode::Blueprint;
        self.rebuild();
        Ok(())
    }

    /// Replaces the voxel set wholesale, dropping voxels outside the grid.
    pub fn load(&mut self, mut voxels: VoxelSet) {
        let before = voxels.len();
        voxels.retain(|v| self.config.contains(&v.coord()));
        if voxels.len() < before {
            debug!(dropped = before - voxels.len(), "dropped out-of-grid voxels");
        }
        self.voxels = voxels;
        if self.mode == Mode::Blueprint {
            self.blueprint = Project::new(self.config).execute(&self.voxels);
        }
    }

    /// Recomputes every derived view from the current voxels.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            projection: Project::new(self.config).execute(&self.voxels),
            annotations: Annotate::new(self.config).execute(&self.voxels),
            stats: ComputeStats::new().execute(&self.voxels),
        }
    }

    fn rebuild(&mut self) {
        self.voxels = Reconstruct::new(self.config)
            .with_color(self.color.clone())
            .execute(&self.blueprint);
        debug!(count = self.voxels.len(), "blueprint applied");
    }
}
