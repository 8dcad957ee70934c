/// Literal PEM text as returned by the host; never a file path.
#[derive(Clone, PartialEq, Eq)]
pub struct PemMaterial {
    pub key: String,
    pub cert: String,
    pub ca: Option<String>,
}
