use std::path::PathBuf;
use notify::RecommendedWatcher;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use crate::store::structs::object_change::ObjectChange;

pub struct FileObjectStore {
    pub(crate) directory: PathBuf,
    pub(crate) changes: broadcast::Sender<ObjectChange>,
    /// Directory watcher; picks up writes made by other processes.
    pub(crate) watcher: Mutex<Option<RecommendedWatcher>>,
}
