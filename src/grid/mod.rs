mod buffer;
mod config;
mod view;

pub use buffer::{BoolGrid, CountGrid, Grid};
pub use config::GridConfig;
pub use view::{ProjectionGrids, View};
