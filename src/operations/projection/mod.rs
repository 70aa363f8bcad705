mod annotate;
mod project;

pub use annotate::{Annotate, AnnotationGrids};
pub use project::Project;
