//! Session state access for the Fleetdesk console.
//!
//! The console never authenticates anybody itself; it reads the session the
//! surrounding platform established and hands control back to the sign-in
//! flow when that session is missing, unusable, or explicitly ended. This
//! crate defines the provider boundary plus two implementations: a JSON file
//! under the standard configuration directory
//! (`~/.config/fleetdesk/session.json` on most platforms) and an in-memory
//! provider for demo runs and tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use fleetdesk_types::Profile;

/// Environment variable allowing callers to override the session file path.
pub const SESSION_PATH_ENV: &str = "FLEETDESK_SESSION_PATH";

/// Default filename for the session payload.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Error surfaced when touching the persisted session fails.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted session payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayload {
    /// The authenticated profile this session belongs to.
    pub profile: Profile,
}

/// Read access to the ambient session plus the logout action.
///
/// A failed lookup is indistinguishable from "no session": both yield `None`
/// and the console reacts identically (hand off to sign-in). `logout` is
/// best effort; callers log failures and proceed.
pub trait SessionProvider: Send + Sync {
    /// Returns the currently authenticated profile, if any.
    fn current_user(&self) -> Option<Profile>;

    /// Invalidates the session.
    fn logout(&self) -> Result<(), SessionError>;
}

/// Session provider backed by a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default path (environment override honored).
    pub fn new() -> Self {
        Self {
            path: default_session_path(),
        }
    }

    /// Creates a store rooted at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a session for the given profile. The sign-in flow of the
    /// surrounding platform writes through this; the console itself only
    /// reads and removes.
    pub fn save(&self, profile: &Profile) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = SessionPayload {
            profile: profile.clone(),
        };
        let data = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for FileSessionStore {
    fn current_user(&self) -> Option<Profile> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "Failed to read session file; treating as signed out");
                return None;
            }
        };
        match serde_json::from_str::<SessionPayload>(&data) {
            Ok(payload) => Some(payload.profile),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "Failed to parse session file; treating as signed out");
                None
            }
        }
    }

    fn logout(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Io(error)),
        }
    }
}

/// In-memory session provider for demo runs and tests.
///
/// Logout clears the held profile and counts invocations so tests can assert
/// the console calls it exactly once.
#[derive(Debug, Default)]
pub struct StaticSession {
    profile: Mutex<Option<Profile>>,
    logouts: AtomicUsize,
}

impl StaticSession {
    pub fn new(profile: Option<Profile>) -> Self {
        Self {
            profile: Mutex::new(profile),
            logouts: AtomicUsize::new(0),
        }
    }

    /// Number of times `logout` has been invoked.
    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<Profile> {
        self.profile.lock().expect("session lock poisoned").clone()
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        self.profile.lock().expect("session lock poisoned").take();
        Ok(())
    }
}

fn default_session_path() -> PathBuf {
    if let Ok(path) = env::var(SESSION_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fleetdesk")
        .join(SESSION_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_types::Role;

    fn profile() -> Profile {
        Profile {
            first_name: "Avery".into(),
            last_name: "Quinn".into(),
            email: "avery@fleetdesk.example".into(),
            role: Role::SuperAdmin,
        }
    }

    fn temp_store(name: &str) -> FileSessionStore {
        let path = env::temp_dir()
            .join(format!("fleetdesk-session-{}-{}", std::process::id(), name))
            .join(SESSION_FILE_NAME);
        let _ = fs::remove_file(&path);
        FileSessionStore::at(path)
    }

    #[test]
    fn missing_file_reads_as_signed_out() {
        let store = temp_store("missing");
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn save_then_read_round_trips_the_profile() {
        let store = temp_store("round-trip");
        store.save(&profile()).expect("save session");
        assert_eq!(store.current_user(), Some(profile()));
    }

    #[test]
    fn corrupt_file_reads_as_signed_out() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn logout_removes_the_file_and_is_idempotent() {
        let store = temp_store("logout");
        store.save(&profile()).expect("save session");
        store.logout().expect("first logout");
        assert_eq!(store.current_user(), None);
        store.logout().expect("second logout");
    }

    #[test]
    fn static_session_counts_logouts() {
        let session = StaticSession::new(Some(profile()));
        assert_eq!(session.current_user(), Some(profile()));
        session.logout().expect("logout");
        session.logout().expect("logout again");
        assert_eq!(session.logout_count(), 2);
        assert_eq!(session.current_user(), None);
    }
}
