use std::collections::HashSet;

use serde::Serialize;

use crate::math::{checked_neighbor, face_neighbor_offsets, Coord};
use crate::voxel::VoxelSet;

/// Size measurements of a voxel structure, in unit cubes and unit faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of voxels.
    pub count: usize,
    /// Enclosed volume. Equal to `count` for unit cubes.
    pub volume: usize,
    /// Number of exposed faces, bottom faces included.
    pub surface_area: usize,
}

/// Computes count, volume and surface area of a voxel set.
///
/// A face is exposed when the neighbouring cell across it is empty. There
/// is no implicit ground plane, so faces resting on y = 0 are exposed too.
/// A face whose neighbour would lie outside the `i32` range is exposed.
#[derive(Debug, Default)]
pub struct ComputeStats;

impl ComputeStats {
    /// Creates a new `ComputeStats` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, voxels: &VoxelSet) -> Stats {
        let occupied: HashSet<Coord> = voxels.coords().collect();
        let offsets = face_neighbor_offsets();

        let surface_area: usize = occupied
            .iter()
            .map(|p| {
                offsets
                    .iter()
                    .filter(|o| {
                        !checked_neighbor(p, o).is_some_and(|n| occupied.contains(&n))
                    })
                    .count()
            })
            .sum();

        Stats {
            count: voxels.len(),
            volume: voxels.len(),
            surface_area,
        }
    }
}
