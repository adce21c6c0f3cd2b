mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::StrevoApp;
pub use panels::ControlAction;
pub use services::ConfigBridge;
pub use state::{AppState, HIGHLIGHT_DURATION};
