//! File-based session store adapter.
//!
//! Persists the current [`Session`] as JSON at a fixed, configured path so
//! a "stay logged in" patient survives process restarts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::{DomainError, Session};
use crate::ports::SessionStore;

/// Stores the session in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store writing to `path`. Parent directories are created
    /// on the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::SessionStorage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| DomainError::SessionStorage(e.to_string()))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::SessionStorage(e.to_string()))
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomainError::SessionStorage(e.to_string())),
        };
        let session = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::SessionStorage(e.to_string()))?;
        Ok(Some(session))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::SessionStorage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Patient;
    use chrono::NaiveDate;

    fn patient() -> Patient {
        Patient::new(
            "a@b.com",
            "abc12345",
            "Jane",
            None,
            "Doe",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "Female",
            "12345",
        )
        .with_id(1)
    }

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let session = Session::logged_in(patient(), true);
        store.save(&session).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.clear().await.unwrap();

        store.save(&Session::logged_out()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/session.json"));
        store.save(&Session::logged_out()).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
    }
}
