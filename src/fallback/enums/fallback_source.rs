#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackSource {
    UserSupplied { public_name: String, private_name: String },
    SelfSigned { domains: Vec<String> },
}
