use std::fs;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use crate::fallback::enums::fallback_error::FallbackError;
use crate::fallback::structs::pem_material::PemMaterial;

pub const DEFAULT_PUBLIC_NAME: &str = "defaultPublic";
pub const DEFAULT_PRIVATE_NAME: &str = "defaultPrivate";

pub fn generate_self_signed(domains: &[String]) -> Result<PemMaterial, FallbackError> {
    let mut subject_alt_names = domains.to_vec();
    if subject_alt_names.is_empty() {
        subject_alt_names.push(String::from("localhost"));
    }
    let key_pair = KeyPair::generate().map_err(|e| FallbackError::SelfSignedError(e.to_string()))?;
    let params = CertificateParams::new(subject_alt_names)
        .map_err(|e| FallbackError::SelfSignedError(e.to_string()))?;
    let cert = params
        .self_signed(&key_pair)
        .map_err(|e| FallbackError::SelfSignedError(e.to_string()))?;
    Ok(PemMaterial {
        key: key_pair.serialize_pem(),
        cert: cert.pem(),
        ca: None,
    })
}

/// Writes a self-signed key and certificate pair, for development setups.
pub fn write_self_signed_files(domains: &[String], key_file: &str, cert_file: &str) -> Result<(), FallbackError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");
    let material = generate_self_signed(domains)?;
    fs::write(key_file, &material.key)
        .map_err(|e| FallbackError::SelfSignedError(format!("{}: {}", key_file, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_file);
    fs::write(cert_file, &material.cert)
        .map_err(|e| FallbackError::SelfSignedError(format!("{}: {}", cert_file, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);
    info!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", key_file, cert_file);
    Ok(())
}
