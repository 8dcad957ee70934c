use std::collections::BTreeMap;
use std::io::BufReader;
use std::sync::Arc;
use chrono::Utc;
use log::{debug, error, info, warn};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use crate::collections::collections::normalize_hostname;
use crate::collections::structs::certificate_collection::CertificateCollection;
use crate::collections::types::CollectionMap;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::resolution::Resolution;
use crate::ssl::structs::collection_certificate_resolver::CollectionCertificateResolver;
use crate::ssl::structs::secure_context::SecureContext;
use crate::ssl::structs::secure_context_table::SecureContextTable;

fn parse_certificates(pem: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let mut reader = BufReader::new(pem.as_bytes());
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::CertParseError(e.to_string()))
}

fn parse_private_key(pem: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let mut reader = BufReader::new(pem.as_bytes());
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
        .ok_or(CertificateError::NoKeyFound)
}

/// Builds a rustls `CertifiedKey` from PEM text. The leaf certificate comes
/// first; chain certificates already present in `certificate` are not repeated.
pub fn compile_certified_key(
    private_key: &str,
    certificate: &str,
    chain: Option<&str>,
) -> Result<CertifiedKey, CertificateError> {
    let mut certs = parse_certificates(certificate)?;
    if certs.is_empty() {
        return Err(CertificateError::CertParseError(
            "No certificates found in PEM data".to_string(),
        ));
    }
    if let Some(chain) = chain.filter(|c| !c.trim().is_empty()) {
        for cert in parse_certificates(chain)? {
            if !certs.contains(&cert) {
                certs.push(cert);
            }
        }
    }
    let key = parse_private_key(private_key)?;
    let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
        .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
    Ok(CertifiedKey::new(certs, signing_key))
}

pub fn compile_secure_context(id: &str, collection: &CertificateCollection) -> Result<SecureContext, CertificateError> {
    let certified_key = compile_certified_key(
        &collection.private_key,
        &collection.certificate,
        collection.chain.as_deref(),
    )?;
    Ok(SecureContext {
        collection_id: id.to_string(),
        certified_key: Arc::new(certified_key),
        domains: collection.normalized_domains(),
        expires_at: collection.expires_at,
        compiled_at: Utc::now(),
    })
}

/// Compiles every collection and registers it under each of its domains.
///
/// Collections are visited in ascending id order, so when two collections
/// claim the same domain the greater id wins. A collection that fails to
/// compile is skipped; the rest of the table is still built. The compiled
/// collection with the smallest id becomes the last-resort entry.
pub fn build_secure_context_table(collections: &CollectionMap) -> SecureContextTable {
    let now = Utc::now();
    let mut contexts: BTreeMap<String, Arc<SecureContext>> = BTreeMap::new();
    let mut last_resort: Option<Arc<SecureContext>> = None;
    let mut skipped = 0usize;

    for (id, collection) in collections {
        if !collection.is_usable() {
            warn!("[CERTIFICATE] Collection {} lists no domains, skipping it", id);
            skipped += 1;
            continue;
        }
        let context = match compile_secure_context(id, collection) {
            Ok(context) => Arc::new(context),
            Err(e) => {
                warn!("[CERTIFICATE] Collection {} could not be compiled, skipping it: {}", id, e);
                skipped += 1;
                continue;
            }
        };
        if collection.is_expired_at(now) {
            warn!(
                "[CERTIFICATE] Collection {} expired at {}, serving it until it is renewed",
                id,
                collection.expires_at.to_rfc3339()
            );
        }
        for domain in &context.domains {
            if let Some(previous) = contexts.insert(domain.clone(), Arc::clone(&context)) {
                debug!(
                    "[CERTIFICATE] Domain {} claimed by {} and {}, using {}",
                    domain, previous.collection_id, id, id
                );
            }
        }
        if last_resort.is_none() {
            last_resort = Some(Arc::clone(&context));
        }
    }

    info!(
        "[CERTIFICATE] Built secure context table: {} domains from {} collections ({} skipped)",
        contexts.len(),
        collections.len() - skipped,
        skipped
    );
    SecureContextTable { contexts, last_resort }
}

/// `sub.example.com` -> `*.example.com`. Only the left-most label is replaced.
pub fn wildcard_of(hostname: &str) -> Option<String> {
    let (_, parent) = hostname.split_once('.')?;
    if parent.is_empty() {
        return None;
    }
    Some(format!("*.{}", parent))
}

/// Selects the certificate for one handshake. Never blocks and performs no I/O.
pub fn resolve_certificate(
    server_name: Option<&str>,
    table: &SecureContextTable,
    fallback: Option<&Arc<FallbackContext>>,
) -> Result<Resolution, CertificateError> {
    let hostname = server_name.map(normalize_hostname).filter(|name| !name.is_empty());

    if let Some(name) = &hostname {
        if let Some(context) = table.get(name) {
            return Ok(Resolution::Exact(context));
        }
        if let Some(wildcard) = wildcard_of(name)
            && let Some(context) = table.get(&wildcard)
        {
            return Ok(Resolution::Wildcard(context));
        }
    }

    if let Some(fallback) = fallback {
        return Ok(Resolution::Fallback(Arc::clone(fallback)));
    }

    let requested = hostname.unwrap_or_else(|| String::from("<no sni>"));
    if let Some(context) = table.last_resort() {
        warn!(
            "[CERTIFICATE] No certificate matches {}, answering with collection {} as last resort",
            requested, context.collection_id
        );
        return Ok(Resolution::LastResort(context));
    }

    error!("[CERTIFICATE] No certificate available for {}, failing the handshake", requested);
    Err(CertificateError::NoCertificateAvailable(requested))
}

/// Pins the ring provider so the config does not depend on a process-wide default.
pub fn create_server_config_with_resolver(
    resolver: Arc<CollectionCertificateResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    Ok(rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}
