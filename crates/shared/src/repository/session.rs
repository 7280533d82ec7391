use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use crate::{abstract_trait::SessionRepositoryTrait, utils::AppError};

type Entries = BTreeMap<String, String>;

/// Key-value entries kept as one JSON object in a file.
///
/// Every call reads the file fresh, so entries written by another process
/// are seen on the next access. Writes go through a sibling temp file and a
/// rename so a crash never leaves half a session behind.
#[derive(Debug)]
pub struct FileSessionRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, AppError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Entries>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "Session file {} is unreadable, treating as empty: {e}",
                    self.path.display()
                );
                Ok(Entries::new())
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), AppError> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!("Session file {} written", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionRepositoryTrait for FileSessionRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;

        for key in keys {
            entries.remove(*key);
        }

        self.write_entries(&entries).await
    }
}

/// Process-local storage, for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    entries: Mutex<Entries>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionRepositoryTrait for MemorySessionRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
