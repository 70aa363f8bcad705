use std::cmp::Ordering;

use super::PuzzleCodec;
use crate::error::Result;
use crate::grid::GridConfig;
use crate::voxel::VoxelSet;

/// Outcome of a block-count guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooLow,
    TooHigh,
}

/// A "guess the block count" round over a shared structure.
#[derive(Debug, Clone)]
pub struct Quiz {
    puzzle: VoxelSet,
}

impl Quiz {
    /// Wraps an already decoded structure.
    #[must_use]
    pub fn new(puzzle: VoxelSet) -> Self {
        Self { puzzle }
    }

    /// Loads the structure from share-link text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not decode to a valid puzzle.
    pub fn from_encoded(config: GridConfig, text: &str) -> Result<Self> {
        PuzzleCodec::new(config).decode(text).map(Self::new)
    }

    /// The structure being guessed.
    #[must_use]
    pub fn puzzle(&self) -> &VoxelSet {
        &self.puzzle
    }

    /// Number of blocks in the structure.
    #[must_use]
    pub fn answer(&self) -> usize {
        self.puzzle.len()
    }

    /// Compares a guess against the block count.
    #[must_use]
    pub fn check(&self, guess: usize) -> Verdict {
        match guess.cmp(&self.answer()) {
            Ordering::Equal => Verdict::Correct,
            Ordering::Less => Verdict::TooLow,
            Ordering::Greater => Verdict::TooHigh,
        }
    }
}
