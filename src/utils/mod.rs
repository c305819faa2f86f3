//! Utility modules for common functionality

pub mod config;
pub mod logging;

pub use config::{load_config, AppConfig, ConfigError, ConfigFormat};
pub use logging::setup_logging;
