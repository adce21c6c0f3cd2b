pub mod config_bridge;

pub use config_bridge::ConfigBridge;
