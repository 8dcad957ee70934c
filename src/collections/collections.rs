use std::sync::LazyLock;
use log::warn;
use regex::Regex;
use serde_json::Value;
use crate::collections::structs::certificate_collection::CertificateCollection;
use crate::collections::types::CollectionMap;

pub const COLLECTIONS_FIELD: &str = "collections";
pub const CERTIFICATES_FIELD: &str = "certificates";

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*\.)?([a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?)(\.[a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?)*$")
        .expect("domain pattern regex is valid")
});

/// Hostname or one-level wildcard (`*.example.com`); checked case-insensitively.
pub fn is_valid_domain_pattern(pattern: &str) -> bool {
    let lower = normalize_hostname(pattern);
    !lower.is_empty() && lower.len() <= 253 && DOMAIN_PATTERN.is_match(&lower)
}

/// Lowercases and strips a trailing root dot.
pub fn normalize_hostname(hostname: &str) -> String {
    hostname.trim().trim_end_matches('.').to_lowercase()
}

pub fn parse_collection(record_id: &str, id: &str, value: &Value) -> Option<CertificateCollection> {
    match serde_json::from_value::<CertificateCollection>(value.clone()) {
        Ok(collection) => Some(collection),
        Err(e) => {
            warn!("[COLLECTIONS] Skipping malformed collection {} in {}: {}", id, record_id, e);
            None
        }
    }
}

/// The `collections` field of a record; `None` when the field is absent.
pub fn collections_from_record(record_id: &str, record: &Value) -> Option<CollectionMap> {
    let raw = record.get(COLLECTIONS_FIELD)?;
    let Some(entries) = raw.as_object() else {
        warn!("[COLLECTIONS] Field '{}' of {} is not an object, ignoring it", COLLECTIONS_FIELD, record_id);
        return None;
    };
    Some(
        entries
            .iter()
            .filter_map(|(id, value)| parse_collection(record_id, id, value).map(|c| (id.clone(), c)))
            .collect()
    )
}
