use serde_json::Value;

/// `(objectId, newValue)` pair; `value` is `None` when the object was deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectChange {
    pub id: String,
    pub value: Option<Value>,
}
