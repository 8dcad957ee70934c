/// CertificateCollection: validation, normalisation, redacted Debug.
pub mod certificate_collection;

/// CollectionStore: get_all, get, set, delete, list, subscribe.
pub mod collection_store;

/// CollectionSubscription: recv, recv_latest.
pub mod collection_subscription;

/// CollectionStore: import and export for the command line.
pub mod collection_store_transfer;
