use std::collections::BTreeMap;
use crate::collections::structs::certificate_collection::CertificateCollection;

/// Collections keyed by id; iteration order is lexicographic by id.
pub type CollectionMap = BTreeMap<String, CertificateCollection>;
