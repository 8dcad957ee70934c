use thiserror::Error;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::store::enums::store_error::StoreError;

#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("Certificate '{0}' is configured as a file path; PEM text is required")]
    PathNotAllowed(String),

    #[error("Certificate '{0}' does not contain PEM data")]
    NotPem(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to generate self-signed certificate: {0}")]
    SelfSignedError(String),

    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),
}
