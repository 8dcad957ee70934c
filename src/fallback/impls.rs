/// PemMaterial: redacted Debug.
pub mod pem_material;

/// FallbackContext: constructor and Debug.
pub mod fallback_context;

/// RecordCertificateSource: CertificateSource implementation.
pub mod record_certificate_source;

/// FallbackCertificateProvider: load.
pub mod fallback_certificate_provider;
