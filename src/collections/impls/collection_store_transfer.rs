use std::fs;
use log::{error, info};
use serde_json::Value;
use crate::collections::enums::collection_error::CollectionError;
use crate::collections::structs::certificate_collection::CertificateCollection;
use crate::collections::structs::collection_store::CollectionStore;
use crate::store::enums::store_error::StoreError;

impl CollectionStore {
    /// Reads one collection as JSON from `path` and stores it under `id`.
    pub async fn import_file(&self, id: &str, path: &str) -> Result<(), CollectionError> {
        info!("[IMPORT] Importing collection {} from {}", id, path);
        let data = fs::read(path).map_err(|e| {
            error!("[IMPORT] The collection file {} could not be read!", path);
            StoreError::from(e)
        })?;
        let collection: CertificateCollection = serde_json::from_slice(&data).map_err(|e| {
            error!("[IMPORT] The collection file {} is not a valid collection!", path);
            StoreError::from(e)
        })?;
        self.set(id, collection).await?;
        info!("[IMPORT] Collection {} imported", id);
        Ok(())
    }

    /// Collection as JSON with the private key blanked out.
    pub async fn show(&self, id: &str) -> Result<Value, CollectionError> {
        let collection = self.get(id).await?.ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
        let mut value = serde_json::to_value(&collection).map_err(StoreError::from)?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert(String::from("privateKey"), Value::String(String::from("<redacted>")));
        }
        Ok(value)
    }
}
