use chrono::{DateTime, Utc};
use crate::collections::collections::{is_valid_domain_pattern, normalize_hostname};
use crate::collections::enums::collection_error::CollectionError;
use crate::collections::structs::certificate_collection::CertificateCollection;

impl std::fmt::Debug for CertificateCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateCollection")
            .field("owner_id", &self.owner_id)
            .field("expires_at", &self.expires_at)
            .field("private_key", &"<redacted>")
            .field("certificate_len", &self.certificate.len())
            .field("domains", &self.domains)
            .field("has_chain", &self.chain.is_some())
            .finish()
    }
}

impl CertificateCollection {
    pub fn new(
        owner_id: &str,
        expires_at: DateTime<Utc>,
        private_key: &str,
        certificate: &str,
        domains: Vec<String>,
    ) -> Self {
        Self {
            owner_id: owner_id.to_string(),
            expires_at,
            private_key: private_key.to_string(),
            certificate: certificate.to_string(),
            domains,
            chain: None,
        }
    }

    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }

    /// Rejects collections lacking any of the fields every persisted collection carries.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.owner_id.trim().is_empty() {
            return Err(CollectionError::ValidationError { field: "ownerId" });
        }
        if self.expires_at.timestamp_millis() <= 0 {
            return Err(CollectionError::ValidationError { field: "expiresAt" });
        }
        if self.private_key.trim().is_empty() {
            return Err(CollectionError::ValidationError { field: "privateKey" });
        }
        if self.certificate.trim().is_empty() {
            return Err(CollectionError::ValidationError { field: "certificate" });
        }
        if let Some(domain) = self.domains.iter().find(|d| !is_valid_domain_pattern(d)) {
            return Err(CollectionError::InvalidDomain(domain.clone()));
        }
        Ok(())
    }

    /// Lowercased domains without duplicates, first occurrence kept.
    pub fn normalized_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = Vec::with_capacity(self.domains.len());
        for domain in self.domains.iter().map(|d| normalize_hostname(d)) {
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        domains
    }

    pub fn is_usable(&self) -> bool {
        !self.domains.is_empty()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
