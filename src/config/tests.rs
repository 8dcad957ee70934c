#[cfg(test)]
mod config_tests {
    use crate::config::enums::collection_selector::CollectionSelector;
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_init_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert!(config.web_server.secure);
        assert_eq!(config.web_server.certificates.collection_selector, CollectionSelector::All);
        assert_eq!(config.store.record_id, "system.certificates");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Configuration::init();
        let text = toml::to_string(&config).unwrap();
        let parsed = Configuration::load(text.as_bytes()).unwrap();
        assert_eq!(parsed.web_server, config.web_server);
    }

    #[test]
    fn test_collection_selector_values() {
        let base = toml::to_string(&Configuration::init()).unwrap();
        let with_selector = |value: &str| {
            let text = base.replace("collection_selector = true", &format!("collection_selector = {}", value));
            Configuration::load(text.as_bytes()).unwrap().web_server.certificates.collection_selector
        };
        assert_eq!(with_selector("false"), CollectionSelector::Disabled);
        assert_eq!(with_selector("true"), CollectionSelector::All);
        assert_eq!(with_selector("\"false\""), CollectionSelector::Disabled);
        assert_eq!(with_selector("\"\""), CollectionSelector::All);
        assert_eq!(with_selector("\"acme-1\""), CollectionSelector::Specific(String::from("acme-1")));
    }

    #[test]
    fn test_selector_defaults_when_missing() {
        let text = toml::to_string(&Configuration::init())
            .unwrap()
            .replace("collection_selector = true\n", "");
        let parsed = Configuration::load(text.as_bytes()).unwrap();
        assert_eq!(parsed.web_server.certificates.collection_selector, CollectionSelector::All);
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.web_server.bind_address = String::from("not-an-address");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_path_like_certificate_name() {
        let mut config = Configuration::init();
        config.web_server.certificates.custom_cert_public_name = Some(String::from("/etc/ssl/cert.pem"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(config.validate().is_err());
    }
}
