//! Persistent session state.
//!
//! A small TOML file next to the config holds the auth token, the bits
//! of the profile the UI shows without a round trip, and the privacy
//! consent flag. Every mutation writes through immediately. Signing out
//! wipes the whole file, consent flag included, so the next launch runs
//! the first-launch flow again.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::app_dir;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session data: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Everything the session file remembers between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub privacy_accepted: bool,
}

/// Shared handle to the session file.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionData>>,
    path: PathBuf,
}

impl SessionStore {
    /// Default location, next to the config file.
    pub fn session_path() -> PathBuf {
        app_dir().join("session.toml")
    }

    /// Loads the store from `path`. A missing file is a fresh session.
    pub fn load_from(path: &Path) -> Result<Self, SessionError> {
        let data = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| SessionError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| SessionError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            SessionData::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(data)),
            path: path.to_path_buf(),
        })
    }

    /// Like [`load_from`](Self::load_from), but an unreadable file only
    /// costs the saved session, never the app start.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("discarding session file: {err}");
                Self {
                    inner: Arc::new(RwLock::new(SessionData::default())),
                    path: path.to_path_buf(),
                }
            }
        }
    }

    pub fn get(&self) -> SessionData {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().token.is_some()
    }

    pub fn privacy_accepted(&self) -> bool {
        self.inner.read().privacy_accepted
    }

    pub fn set_privacy_accepted(&self, accepted: bool) -> Result<(), SessionError> {
        self.mutate(|data| data.privacy_accepted = accepted)
    }

    pub fn set_auth(&self, token: String, username: String) -> Result<(), SessionError> {
        self.mutate(|data| {
            data.token = Some(token);
            data.username = Some(username);
        })
    }

    pub fn set_profile(&self, nick_name: String, email: Option<String>) -> Result<(), SessionError> {
        self.mutate(|data| {
            data.nick_name = Some(nick_name);
            data.email = email;
        })
    }

    /// Resets every persisted field, the consent flag included.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.mutate(|data| *data = SessionData::default())
    }

    fn mutate(&self, apply: impl FnOnce(&mut SessionData)) -> Result<(), SessionError> {
        let snapshot = {
            let mut guard = self.inner.write();
            apply(&mut guard);
            guard.clone()
        };
        self.persist(&snapshot)
    }

    fn persist(&self, data: &SessionData) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.path, content).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_survives_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.toml");

        let store = SessionStore::load_from(&path).expect("fresh store");
        store
            .set_auth("tok-1".to_string(), "user123".to_string())
            .expect("persists");
        store
            .set_profile("Sam".to_string(), Some("a@b.com".to_string()))
            .expect("persists");

        let reloaded = SessionStore::load_from(&path).expect("reloads");
        let data = reloaded.get();
        assert_eq!(data.token.as_deref(), Some("tok-1"));
        assert_eq!(data.username.as_deref(), Some("user123"));
        assert_eq!(data.nick_name.as_deref(), Some("Sam"));
        assert!(reloaded.is_signed_in());
    }

    #[test]
    fn clear_wipes_every_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.toml");

        let store = SessionStore::load_from(&path).expect("fresh store");
        store.set_privacy_accepted(true).expect("persists");
        store
            .set_auth("tok-1".to_string(), "user123".to_string())
            .expect("persists");

        store.clear().expect("clears");
        assert_eq!(store.get(), SessionData::default());

        let reloaded = SessionStore::load_from(&path).expect("reloads");
        assert!(!reloaded.privacy_accepted());
        assert!(!reloaded.is_signed_in());
    }

    #[test]
    fn garbage_file_starts_clean() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.toml");
        fs::write(&path, "not [valid toml").expect("write");

        assert!(SessionStore::load_from(&path).is_err());
        let store = SessionStore::load_or_default(&path);
        assert!(!store.is_signed_in());
    }
}
