use std::path::Path;
use tokio::sync::broadcast;
use crate::store::structs::object_change::ObjectChange;

/// Well-known id of the object holding certificate collections.
pub const CERTIFICATES_OBJECT_ID: &str = "system.certificates";

pub const CHANGE_CHANNEL_CAPACITY: usize = 64;

pub fn change_channel() -> broadcast::Sender<ObjectChange> {
    let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
    sender
}

/// File name used for an object id; anything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn object_file_name(id: &str) -> String {
    let sanitized: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("{}.json", sanitized.trim_start_matches('.'))
}

/// Object id stored in `path`, the inverse of `object_file_name` for ids
/// without replaced characters. Temporary and foreign files yield `None`.
pub fn object_id_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let id = name.strip_suffix(".json")?;
    if id.is_empty() || id.starts_with('.') {
        return None;
    }
    Some(id.to_string())
}
