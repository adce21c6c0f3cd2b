pub mod left_panel;
pub mod main_panel;

pub use left_panel::{ControlAction, LeftPanel};
pub use main_panel::MainPanel;
