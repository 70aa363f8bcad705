mod set;

pub use set::VoxelSet;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VoxelError;
use crate::math::Coord;

/// Display color of a voxel, e.g. `#ff8800`. Has no geometric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Wraps a color string as given.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The color string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A unit cube at an integer grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: Option<Color>,
}

impl Voxel {
    /// Creates an uncolored voxel.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            color: None,
        }
    }

    /// Replaces the color.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Creates an uncolored voxel at `coord`.
    #[must_use]
    pub fn at(coord: Coord) -> Self {
        Self::new(coord.x, coord.y, coord.z)
    }

    /// Position as a point.
    #[must_use]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y, self.z)
    }

    /// Identity derived from the coordinates.
    #[must_use]
    pub fn id(&self) -> VoxelId {
        VoxelId(self.coord())
    }
}

/// Coordinate-derived voxel identity, written as `"x,y,z"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelId(pub Coord);

impl VoxelId {
    /// Identity of the voxel at `(x, y, z)`.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Coord::new(x, y, z))
    }

    /// Coordinate this identity refers to.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.0
    }
}

impl fmt::Display for VoxelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.x, self.0.y, self.0.z)
    }
}

impl FromStr for VoxelId {
    type Err = VoxelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VoxelError::InvalidId(s.to_owned());
        let mut parts = s.split(',').map(|p| p.trim().parse::<i32>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Self::new(x, y, z)),
            _ => Err(invalid()),
        }
    }
}
