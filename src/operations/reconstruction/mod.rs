mod reconstruct;

pub use reconstruct::{Alignment, Reconstruct};
