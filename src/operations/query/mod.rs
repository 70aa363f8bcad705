mod stats;

pub use stats::{ComputeStats, Stats};
