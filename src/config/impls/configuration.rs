use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::collections::collections::is_valid_domain_pattern;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::web_server_config::WebServerConfig;
use crate::store::store::CERTIFICATES_OBJECT_ID;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            web_server: WebServerConfig::default(),
            store: StoreConfig {
                path: String::from("data"),
                record_id: String::from(CERTIFICATES_OBJECT_ID),
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;

        if self.web_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[web_server] bind_address '{}' is not a socket address",
                self.web_server.bind_address
            )));
        }
        if self.web_server.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[web_server] threads must be at least 1")));
        }

        Self::validate_value("[store] record_id", &self.store.record_id, r"^[A-Za-z0-9_][A-Za-z0-9_.\-]{0,127}$")?;
        if self.store.path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[store] path must not be empty")));
        }

        let certificates = &self.web_server.certificates;
        for (name, value) in [
            ("custom_cert_public_name", &certificates.custom_cert_public_name),
            ("custom_cert_private_name", &certificates.custom_cert_private_name),
            ("custom_cert_chain_name", &certificates.custom_cert_chain_name),
        ] {
            if let Some(value) = value
                && !value.is_empty()
            {
                Self::validate_value(&format!("[web_server.certificates] {}", name), value, r"^[^\s/\\]{1,128}$")?;
            }
        }
        for domain in &certificates.self_signed_domains {
            if !is_valid_domain_pattern(domain) {
                return Err(ConfigurationError::ValidationError(format!(
                    "[web_server.certificates] self_signed_domains entry '{}' is not a hostname",
                    domain
                )));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{} - value '{}' does not match {}",
                name, value, regex
            )));
        }
        Ok(())
    }
}
