use crate::ssl::structs::secure_context::SecureContext;

impl std::fmt::Debug for SecureContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureContext")
            .field("collection_id", &self.collection_id)
            .field("certs_count", &self.certified_key.cert.len())
            .field("domains", &self.domains)
            .field("expires_at", &self.expires_at)
            .field("compiled_at", &self.compiled_at)
            .finish()
    }
}
