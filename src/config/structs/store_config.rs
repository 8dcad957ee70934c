use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per stored object.
    pub path: String,
    /// Id of the object carrying the `collections` and `certificates` fields.
    pub record_id: String,
}
