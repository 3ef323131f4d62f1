use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

/// Token record persisted on disk so a session survives restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

#[derive(Debug)]
enum SessionState {
    Loading,
    Ready(Option<StoredToken>),
}

/// Durable client-side session store.
///
/// Starts in a loading state; [`SessionStore::load`] performs the one-shot
/// read of persisted storage, after which `is_loading` is permanently false.
/// There is no automatic refresh: once the stored token expires, protected
/// calls fail and the caller must authenticate again.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    ttl: Duration,
    state: SessionState,
}

impl SessionStore {
    /// Default retention matches the seven-day token lifetime.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_ttl(path, Duration::days(7))
    }

    pub fn with_ttl(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            state: SessionState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Ready(Some(_)))
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Ready(Some(stored)) => Some(&stored.token),
            _ => None,
        }
    }

    /// One-shot read of persisted storage. A missing, unreadable, or expired
    /// record resolves to an anonymous session; calling again is a no-op.
    pub fn load(&mut self) {
        if !self.is_loading() {
            return;
        }
        let stored = fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<StoredToken>(&raw).ok())
            .filter(|stored| {
                let live = stored.expires_at > OffsetDateTime::now_utc();
                if !live {
                    debug!("stored token expired; discarding");
                }
                live
            });
        self.state = SessionState::Ready(stored);
    }

    /// Persist a freshly issued token and mark the session authenticated.
    pub fn store_token(&mut self, token: &str) -> anyhow::Result<()> {
        let stored = StoredToken {
            token: token.to_string(),
            expires_at: OffsetDateTime::now_utc() + self.ttl,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create session dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string(&stored).context("serialize session")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write session file {}", self.path.display()))?;
        self.state = SessionState::Ready(Some(stored));
        Ok(())
    }

    /// Clear the token from memory and durable storage.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.state = SessionState::Ready(None);
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(anyhow::Error::from(e)
                    .context(format!("remove session file {}", self.path.display())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_session_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("gatehouse-test-{}", Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn fresh_load_without_stored_token_is_anonymous() {
        let mut store = SessionStore::new(temp_session_path());
        assert!(store.is_loading());
        assert!(!store.is_authenticated());

        store.load();
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn store_token_persists_across_instances() {
        let path = temp_session_path();

        let mut store = SessionStore::new(&path);
        store.load();
        store.store_token("header.payload.signature").expect("store");
        assert!(store.is_authenticated());

        let mut reopened = SessionStore::new(&path);
        reopened.load();
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.token(), Some("header.payload.signature"));

        let mut cleanup = SessionStore::new(&path);
        cleanup.clear().expect("cleanup");
    }

    #[test]
    fn clear_removes_memory_and_disk_state() {
        let path = temp_session_path();

        let mut store = SessionStore::new(&path);
        store.load();
        store.store_token("tok").expect("store");
        store.clear().expect("clear");
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());

        let mut reopened = SessionStore::new(&path);
        reopened.load();
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn expired_record_is_discarded_on_load() {
        let path = temp_session_path();

        let mut store = SessionStore::with_ttl(&path, Duration::seconds(-60));
        store.load();
        store.store_token("stale").expect("store");

        let mut reopened = SessionStore::new(&path);
        reopened.load();
        assert!(!reopened.is_authenticated());

        store.clear().expect("cleanup");
    }

    #[test]
    fn load_is_one_shot() {
        let path = temp_session_path();

        let mut store = SessionStore::new(&path);
        store.load();
        store.store_token("tok").expect("store");

        // A second load must not re-read the disk or flip back to loading.
        store.load();
        assert!(!store.is_loading());
        assert!(store.is_authenticated());

        store.clear().expect("cleanup");
    }
}
