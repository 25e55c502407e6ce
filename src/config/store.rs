//! Thread-safe configuration storage.
//!
//! Config is loaded once at startup (with CLI overrides applied before
//! the store is built) and read from many places afterwards.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
