use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),

    #[error("Listener could not be constructed: {0}")]
    ListenerConstruction(#[from] std::io::Error),
}
