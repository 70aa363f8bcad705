pub mod projection;
pub mod query;
pub mod reconstruction;

pub use projection::{Annotate, AnnotationGrids, Project};
pub use query::{ComputeStats, Stats};
pub use reconstruction::{Alignment, Reconstruct};
