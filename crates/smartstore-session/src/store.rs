// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session store implementations.
//!
//! [`FileSessionStore`] persists the session as a small JSON file under
//! the platform data directory; [`MemorySessionStore`] keeps it in
//! process memory for tests and embedding.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use smartstore_core::SmartstoreError;
use tracing::{debug, warn};

use crate::{Session, SessionStore};

/// File-backed session store.
///
/// The on-disk format is a single JSON object holding the access token
/// and user id -- the only persisted client state. Reads fail closed: a
/// missing, unreadable, or corrupted file reads as "no session".
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location
    /// (`<data_dir>/smartstore/session.json`).
    pub fn from_default_path() -> Result<Self, SmartstoreError> {
        let data_dir = dirs::data_dir().ok_or_else(|| SmartstoreError::Session {
            message: "no platform data directory available".to_string(),
            source: None,
        })?;
        Ok(Self::new(data_dir.join("smartstore/session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "session file unreadable, treating as no session");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn set_session(&self, access_token: &str, user_id: &str) -> Result<(), SmartstoreError> {
        let session = Session {
            access_token: access_token.to_string(),
            user_id: user_id.to_string(),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SmartstoreError::Session {
                message: format!("failed to create session directory {}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }
        let body = serde_json::to_string(&session).map_err(|e| SmartstoreError::Session {
            message: "failed to serialize session".to_string(),
            source: Some(Box::new(e)),
        })?;
        fs::write(&self.path, body).map_err(|e| SmartstoreError::Session {
            message: format!("failed to write session file {}", self.path.display()),
            source: Some(Box::new(e)),
        })?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        self.read().map(|s| s.access_token)
    }

    fn user_id(&self) -> Option<String> {
        self.read().map(|s| s.user_id)
    }

    fn clear(&self) -> Result<(), SmartstoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to remove session file");
                Err(SmartstoreError::Session {
                    message: format!("failed to remove session file {}", self.path.display()),
                    source: Some(Box::new(e)),
                })
            }
        }
    }
}

/// In-memory session store for tests and embedded use.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_session(&self, access_token: &str, user_id: &str) -> Result<(), SmartstoreError> {
        let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Session {
            access_token: access_token.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        let guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.access_token.clone())
    }

    fn user_id(&self) -> Option<String> {
        let guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.user_id.clone())
    }

    fn clear(&self) -> Result<(), SmartstoreError> {
        let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
