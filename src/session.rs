//! Auth session state
//!
//! The Rust analog of the SPA's `localStorage.authToken` / `userType`:
//! one process-wide session object with an explicit lifecycle
//! (`restore` → `login` → `clear`), injected into the client instead of
//! read ad hoc. Persisted to `~/.freeport/session.json` so a restart
//! picks the token back up; persistence failures degrade to
//! memory-only operation with a warning.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::types::Role;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionState {
    auth_token: Option<String>,
    user_type: Option<Role>,
}

struct SessionInner {
    state: Mutex<SessionState>,
    /// None for in-memory sessions (tests, ephemeral tools).
    path: Option<PathBuf>,
}

/// Shared handle to the session. Cheap to clone; all clones see the same
/// state. Any 401 from the transport funnels through [`Session::clear`].
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Session that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(SessionState::default()),
                path: None,
            }),
        }
    }

    /// Restore from the default session file, or start empty.
    pub fn restore() -> Self {
        match config::session_path() {
            Ok(path) => Self::restore_from(path),
            Err(e) => {
                tracing::warn!("Session path unavailable ({}); using in-memory session", e);
                Self::in_memory()
            }
        }
    }

    /// Restore from a specific file path, or start empty if the file is
    /// missing or unreadable.
    pub fn restore_from(path: PathBuf) -> Self {
        let state = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(state),
                path: Some(path),
            }),
        }
    }

    /// Store a fresh token + role after a successful login.
    pub fn login(&self, token: String, role: Role) {
        {
            let mut state = self.inner.state.lock();
            state.auth_token = Some(token);
            state.user_type = Some(role);
        }
        self.persist();
    }

    /// Wipe the session (logout or any 401).
    pub fn clear(&self) {
        {
            let mut state = self.inner.state.lock();
            *state = SessionState::default();
        }
        if let Some(path) = &self.inner.path {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    tracing::warn!("Failed to remove session file: {}", e);
                }
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.lock().auth_token.clone()
    }

    pub fn user_type(&self) -> Option<Role> {
        self.inner.state.lock().user_type
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.lock().auth_token.is_some()
    }

    fn persist(&self) {
        let Some(path) = &self.inner.path else {
            return;
        };
        let state = self.inner.state.lock().clone();
        let content = match serde_json::to_string_pretty(&state) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(path, content) {
            tracing::warn!("Failed to write session file ({}); continuing in memory", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_clear() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.login("tok-123".to_string(), Role::Employer);
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        assert_eq!(session.user_type(), Some(Role::Employer));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_type(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::in_memory();
        let other = session.clone();
        session.login("tok".to_string(), Role::Freelancer);
        assert!(other.is_authenticated());
    }

    #[test]
    fn test_restore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::restore_from(path.clone());
        session.login("persisted".to_string(), Role::Freelancer);

        let restored = Session::restore_from(path.clone());
        assert_eq!(restored.token().as_deref(), Some("persisted"));
        assert_eq!(restored.user_type(), Some(Role::Freelancer));

        restored.clear();
        assert!(!path.exists());
        let empty = Session::restore_from(path);
        assert!(!empty.is_authenticated());
    }

    #[test]
    fn test_restore_from_garbage_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let session = Session::restore_from(path);
        assert!(!session.is_authenticated());
    }
}
