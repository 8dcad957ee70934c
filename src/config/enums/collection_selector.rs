/// Selects the certificate collections served by the HTTPS listener.
///
/// In the configuration file this is either a boolean or a collection id:
/// `false` disables collections, `true` (or leaving the key out) uses every
/// collection, any other string names exactly one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CollectionSelector {
    Disabled,
    #[default]
    All,
    Specific(String),
}
