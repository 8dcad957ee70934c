use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a development self-signed key and certificate file in PEM format.
    #[arg(long)]
    pub create_selfsigned: bool,
    /// Add an extra domain/subdomain into the SAN list of the self-signed certificate.
    #[arg(long, requires("create_selfsigned"), default_value = "localhost")]
    pub selfsigned_domain: String,
    /// Give the filename of the key file of the certificate, default key.pem.
    #[arg(long, requires("create_selfsigned"), default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    /// Give the filename of the certificate file, default cert.pem.
    #[arg(long, requires("create_selfsigned"), default_value = "cert.pem")]
    pub selfsigned_certfile: String,

    /// List the ids of all stored certificate collections.
    #[arg(long)]
    pub list_collections: bool,
    /// Print one certificate collection (private key redacted).
    #[arg(long, value_name = "ID")]
    pub show_collection: Option<String>,
    /// Delete a certificate collection.
    #[arg(long, value_name = "ID")]
    pub delete_collection: Option<String>,
    /// Store a certificate collection read from `--collection-file`.
    #[arg(long, value_name = "ID", requires("collection_file"))]
    pub import_collection: Option<String>,
    /// JSON file holding the collection to import.
    #[arg(long, value_name = "FILE")]
    pub collection_file: Option<String>,
}
