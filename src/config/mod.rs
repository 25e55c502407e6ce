//! Configuration loading and shared access.

mod loader;
mod store;
mod types;

pub use loader::{app_dir, ConfigError};
pub use store::ConfigStore;
pub use types::{Config, ServerConfig, UiConfig};
