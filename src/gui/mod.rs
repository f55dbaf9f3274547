//! GUI module - user interface components

mod app;
mod control_panel;
mod graph_window;
mod results_table;

pub use app::OhmLabApp;
pub use control_panel::{ControlPanel, ControlPanelAction, UserSettings};
pub use graph_window::GraphWindow;
pub use results_table::ResultsTable;
