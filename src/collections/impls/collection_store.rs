use std::sync::Arc;
use log::{debug, info};
use serde_json::{Map, Value};
use crate::collections::collections::{collections_from_record, parse_collection, COLLECTIONS_FIELD};
use crate::collections::enums::collection_error::CollectionError;
use crate::collections::structs::certificate_collection::CertificateCollection;
use crate::collections::structs::collection_store::CollectionStore;
use crate::collections::structs::collection_subscription::CollectionSubscription;
use crate::collections::types::CollectionMap;
use crate::store::enums::store_error::StoreError;
use crate::store::store::CERTIFICATES_OBJECT_ID;
use crate::store::traits::object_store::ObjectStore;

impl std::fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("record_id", &self.record_id)
            .finish()
    }
}

impl CollectionStore {
    pub fn new(object_store: Arc<dyn ObjectStore>) -> Self {
        Self::with_record_id(object_store, CERTIFICATES_OBJECT_ID)
    }

    pub fn with_record_id(object_store: Arc<dyn ObjectStore>, record_id: &str) -> Self {
        Self {
            object_store,
            record_id: record_id.to_string(),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn object_store(&self) -> Arc<dyn ObjectStore> {
        Arc::clone(&self.object_store)
    }

    async fn read_record(&self) -> Result<Option<Value>, CollectionError> {
        Ok(self.object_store.get_object(&self.record_id).await?)
    }

    /// `None` when no record (or no `collections` field) exists.
    pub async fn get_all(&self) -> Result<Option<CollectionMap>, CollectionError> {
        Ok(self
            .read_record()
            .await?
            .and_then(|record| collections_from_record(&self.record_id, &record)))
    }

    pub async fn get(&self, id: &str) -> Result<Option<CertificateCollection>, CollectionError> {
        let Some(record) = self.read_record().await? else {
            return Ok(None);
        };
        Ok(record
            .get(COLLECTIONS_FIELD)
            .and_then(|collections| collections.get(id))
            .and_then(|value| parse_collection(&self.record_id, id, value)))
    }

    /// Validates and merges one collection into the record. Other ids are kept as they are.
    pub async fn set(&self, id: &str, collection: CertificateCollection) -> Result<(), CollectionError> {
        if id.trim().is_empty() {
            return Err(CollectionError::ValidationError { field: "id" });
        }
        collection.validate()?;

        let mut record = self.read_record().await?.unwrap_or_else(|| Value::Object(Map::new()));
        let Some(fields) = record.as_object_mut() else {
            return Err(CollectionError::Store(StoreError::InvalidObject {
                id: self.record_id.clone(),
                reason: String::from("record is not a JSON object"),
            }));
        };
        let collections = fields
            .entry(COLLECTIONS_FIELD)
            .or_insert_with(|| Value::Object(Map::new()));
        if !collections.is_object() {
            *collections = Value::Object(Map::new());
        }
        if let Some(entries) = collections.as_object_mut() {
            entries.insert(id.to_string(), serde_json::to_value(&collection).map_err(StoreError::from)?);
        }

        self.object_store.set_object(&self.record_id, record).await?;
        info!(
            "[COLLECTIONS] Stored collection {} ({} domains, expires {})",
            id,
            collection.domains.len(),
            collection.expires_at.to_rfc3339()
        );
        Ok(())
    }

    /// Removes one collection; absent ids leave the record untouched.
    pub async fn delete(&self, id: &str) -> Result<(), CollectionError> {
        let Some(mut record) = self.read_record().await? else {
            return Ok(());
        };
        let removed = record
            .get_mut(COLLECTIONS_FIELD)
            .and_then(Value::as_object_mut)
            .and_then(|entries| entries.remove(id))
            .is_some();
        if !removed {
            debug!("[COLLECTIONS] Collection {} not present, nothing to delete", id);
            return Ok(());
        }
        self.object_store.set_object(&self.record_id, record).await?;
        info!("[COLLECTIONS] Deleted collection {}", id);
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<String>, CollectionError> {
        Ok(self
            .get_all()
            .await?
            .map(|collections| collections.into_keys().collect())
            .unwrap_or_default())
    }

    /// Watches the record. With a filter every event carries only that collection,
    /// or `NotFound` once it disappears.
    pub fn subscribe(&self, filter: Option<&str>) -> CollectionSubscription {
        CollectionSubscription {
            object_store: Arc::clone(&self.object_store),
            receiver: self.object_store.subscribe_objects(),
            record_id: self.record_id.clone(),
            filter: filter.map(str::to_string),
        }
    }
}
