use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{debug, warn};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::broadcast;
use crate::store::enums::store_error::StoreError;
use crate::store::store::{change_channel, object_file_name, object_id_from_path};
use crate::store::structs::file_object_store::FileObjectStore;
use crate::store::structs::object_change::ObjectChange;
use crate::store::traits::object_store::ObjectStore;

impl std::fmt::Debug for FileObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileObjectStore")
            .field("directory", &self.directory)
            .field("subscribers", &self.changes.receiver_count())
            .field("watching", &self.is_watching())
            .finish()
    }
}

fn read_object_file(path: &Path) -> Option<Value> {
    match std::fs::read(path) {
        Ok(data) => match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("[STORE] Skipping unreadable object file {}: {}", path.display(), e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Turns one watcher event into change notifications. Events are hints:
/// subscribers re-read the object, so duplicates are harmless.
fn publish_file_event(changes: &broadcast::Sender<ObjectChange>, event: notify::Result<Event>) {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            warn!("[STORE] Directory watch error: {}", e);
            return;
        }
    };
    if !(event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove()) {
        return;
    }
    for path in &event.paths {
        let Some(id) = object_id_from_path(path) else {
            continue;
        };
        let value = read_object_file(path);
        debug!("[STORE] External change of object {} detected", id);
        let _ = changes.send(ObjectChange { id, value });
    }
}

impl FileObjectStore {
    /// Opens (and creates when missing) the directory backing the store.
    pub async fn open(directory: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let directory = directory.into();
        tokio::fs::create_dir_all(&directory).await?;
        debug!("[STORE] Using object directory {}", directory.display());
        Ok(Self {
            directory,
            changes: change_channel(),
            watcher: Mutex::new(None),
        })
    }

    /// Like `open`, and also publishes changes other processes make to the directory.
    pub async fn open_watched(directory: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::open(directory).await?;
        store.watch()?;
        Ok(store)
    }

    pub fn watch(&self) -> Result<(), StoreError> {
        let mut guard = self.watcher.lock();
        if guard.is_some() {
            return Ok(());
        }
        let changes = self.changes.clone();
        let mut watcher = RecommendedWatcher::new(
            move |event: notify::Result<Event>| publish_file_event(&changes, event),
            Config::default(),
        )?;
        watcher.watch(&self.directory, RecursiveMode::NonRecursive)?;
        debug!("[STORE] Watching {} for external changes", self.directory.display());
        *guard = Some(watcher);
        Ok(())
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.lock().is_some()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn object_path(&self, id: &str) -> PathBuf {
        self.directory.join(object_file_name(id))
    }
}

#[async_trait]
impl ObjectStore for FileObjectStore {
    async fn get_object(&self, id: &str) -> Result<Option<Value>, StoreError> {
        let data = match tokio::fs::read(self.object_path(id)).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        let value = serde_json::from_slice(&data).map_err(|e| StoreError::InvalidObject {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    async fn set_object(&self, id: &str, value: Value) -> Result<(), StoreError> {
        let path = self.object_path(id);
        let directory = self.directory.clone();
        let data = serde_json::to_vec_pretty(&value)?;
        let target = path.clone();
        // Every write goes through its own temp file; the rename makes it visible at once.
        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let mut temp = NamedTempFile::new_in(&directory)?;
            temp.write_all(&data)?;
            temp.as_file().sync_all()?;
            temp.persist(&target).map_err(|e| StoreError::IoError(e.error))?;
            Ok(())
        })
            .await
            .map_err(|e| StoreError::IoError(std::io::Error::other(e)))??;
        debug!("[STORE] Object {} written to {}", id, path.display());
        let _ = self.changes.send(ObjectChange { id: id.to_string(), value: Some(value) });
        Ok(())
    }

    async fn delete_object(&self, id: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.object_path(id)).await {
            Ok(()) => {
                debug!("[STORE] Object {} deleted", id);
                let _ = self.changes.send(ObjectChange { id: id.to_string(), value: None });
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    fn subscribe_objects(&self) -> broadcast::Receiver<ObjectChange> {
        self.changes.subscribe()
    }
}
