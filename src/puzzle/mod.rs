mod codec;
mod quiz;

pub use codec::PuzzleCodec;
pub use quiz::{Quiz, Verdict};
