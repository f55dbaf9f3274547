//! Charts module - chart geometry, interactive plotting, and PNG export

mod export;
mod plotter;
mod renderer;

pub use export::ChartExporter;
pub use plotter::{ChartPlotter, SERIES_COLOR};
pub use renderer::{ChartRenderer, DrawCmd, MARKER_RADIUS};
