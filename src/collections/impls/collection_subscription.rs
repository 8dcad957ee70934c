use std::time::Duration;
use log::{debug, warn};
use serde_json::Value;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use crate::collections::collections::collections_from_record;
use crate::collections::enums::collection_error::CollectionError;
use crate::collections::structs::collection_subscription::CollectionSubscription;
use crate::collections::types::CollectionMap;

impl std::fmt::Debug for CollectionSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionSubscription")
            .field("record_id", &self.record_id)
            .field("filter", &self.filter)
            .finish()
    }
}

impl CollectionSubscription {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    fn select(&self, record: Option<&Value>) -> Result<CollectionMap, CollectionError> {
        let collections = record
            .and_then(|record| collections_from_record(&self.record_id, record))
            .unwrap_or_default();
        match &self.filter {
            None => Ok(collections),
            Some(id) => match collections.get(id) {
                Some(collection) => Ok(CollectionMap::from([(id.clone(), collection.clone())])),
                None => Err(CollectionError::NotFound(id.clone())),
            }
        }
    }

    async fn reread(&self) -> Result<CollectionMap, CollectionError> {
        let record = self.object_store.get_object(&self.record_id).await?;
        self.select(record.as_ref())
    }

    /// Waits for a notification about the record. `false` once the store is gone.
    async fn changed(&mut self) -> bool {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.id == self.record_id => return true,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        "[COLLECTIONS] Subscription on {} missed {} changes, re-reading the record",
                        self.record_id, skipped
                    );
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }

    /// Next change of the record. Notifications only wake the subscription;
    /// the state returned is always read from the store afterwards, so it is
    /// never older than the last write. `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<Result<CollectionMap, CollectionError>> {
        if !self.changed().await {
            return None;
        }
        Some(self.reread().await)
    }

    /// Like `recv`, but waits `debounce` after the first change and collapses
    /// every change queued meanwhile into one read.
    pub async fn recv_latest(&mut self, debounce: Duration) -> Option<Result<CollectionMap, CollectionError>> {
        if !self.changed().await {
            return None;
        }
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        let mut coalesced = 0usize;
        loop {
            match self.receiver.try_recv() {
                Ok(change) => {
                    if change.id == self.record_id {
                        coalesced += 1;
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => coalesced += skipped as usize,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if coalesced > 0 {
            debug!("[COLLECTIONS] Coalesced {} queued changes of {}", coalesced, self.record_id);
        }
        Some(self.reread().await)
    }
}
