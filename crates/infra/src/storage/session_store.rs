//! JSON-file implementation of the edit-state store
//!
//! One file per session key under a configured directory. Reads are lenient:
//! a missing, unreadable, or corrupt file is reported as absent so the
//! reconciliation service can fall back to fresh seeding. Writes go through
//! a temp file and rename so a crash mid-write never leaves a truncated
//! state behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use packlist_core::EditStateStore;
use packlist_domain::{PersistedEditState, Result};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Filesystem-backed [`EditStateStore`].
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create the store, ensuring the directory exists.
    ///
    /// # Errors
    /// Returns `PacklistError::Storage` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(InfraError::from)?;
        Ok(Self { dir })
    }

    fn path_for(&self, session_key: &str) -> PathBuf {
        // Session keys contain namespace separators; keep filenames plain.
        let sanitized: String = session_key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

async fn read_state(path: &Path) -> Option<PersistedEditState> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read session state, treating as absent");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "corrupt session state, treating as absent");
            None
        }
    }
}

#[async_trait]
impl EditStateStore for FileSessionStore {
    async fn load(&self, session_key: &str) -> Result<Option<PersistedEditState>> {
        let path = self.path_for(session_key);
        Ok(read_state(&path).await)
    }

    async fn save(&self, session_key: &str, state: &PersistedEditState) -> Result<()> {
        let path = self.path_for(session_key);
        let tmp = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state).map_err(InfraError::from)?;
        tokio::fs::write(&tmp, &bytes).await.map_err(InfraError::from)?;
        tokio::fs::rename(&tmp, &path).await.map_err(InfraError::from)?;

        debug!(path = %path.display(), entries = state.pwnid_state.len(), "session state saved");
        Ok(())
    }

    async fn remove(&self, session_key: &str) -> Result<()> {
        let path = self.path_for(session_key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use packlist_domain::EditStateMap;

    use super::*;

    fn state(session_id: &str) -> PersistedEditState {
        let mut map = EditStateMap::new();
        map.insert("PO-1".into(), Some(42));
        map.insert("PO-2".into(), None);
        PersistedEditState { pwnid_state: map, last_saved: Utc::now(), session_id: session_id.into() }
    }

    #[tokio::test]
    async fn saves_and_loads_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        let saved = state("current");
        store.save("packing-list-reconciliation:current", &saved).await.unwrap();

        let loaded =
            store.load("packing-list-reconciliation:current").await.unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn missing_key_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        assert!(store.load("packing-list-reconciliation:nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        let key = "packing-list-reconciliation:current";
        store.save(key, &state("current")).await.unwrap();

        // Clobber the file with something that is not JSON.
        let path = store.path_for(key);
        tokio::fs::write(&path, b"{not json").await.unwrap();

        assert!(store.load(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        let key = "packing-list-reconciliation:current";
        store.save(key, &state("current")).await.unwrap();
        store.remove(key).await.unwrap();
        store.remove(key).await.unwrap();
        assert!(store.load(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sessions_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        store.save("packing-list-reconciliation:a", &state("a")).await.unwrap();
        store.save("packing-list-reconciliation:b", &state("b")).await.unwrap();

        let a = store.load("packing-list-reconciliation:a").await.unwrap().unwrap();
        let b = store.load("packing-list-reconciliation:b").await.unwrap().unwrap();
        assert_eq!(a.session_id, "a");
        assert_eq!(b.session_id, "b");
    }
}
