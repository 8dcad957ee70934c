use crate::fallback::structs::pem_material::PemMaterial;

impl std::fmt::Debug for PemMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemMaterial")
            .field("key", &"<redacted>")
            .field("cert_len", &self.cert.len())
            .field("has_ca", &self.ca.is_some())
            .finish()
    }
}
