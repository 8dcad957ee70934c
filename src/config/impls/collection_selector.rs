use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::config::enums::collection_selector::CollectionSelector;

impl CollectionSelector {
    pub fn from_setting(value: &str) -> CollectionSelector {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "true" => CollectionSelector::All,
            "false" => CollectionSelector::Disabled,
            _ => CollectionSelector::Specific(trimmed.to_string())
        }
    }

    pub fn specific_id(&self) -> Option<&str> {
        match self {
            CollectionSelector::Specific(id) => Some(id.as_str()),
            _ => None
        }
    }
}

impl std::fmt::Display for CollectionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionSelector::Disabled => write!(f, "disabled"),
            CollectionSelector::All => write!(f, "all"),
            CollectionSelector::Specific(id) => write!(f, "{}", id)
        }
    }
}

impl Serialize for CollectionSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CollectionSelector::Disabled => serializer.serialize_bool(false),
            CollectionSelector::All => serializer.serialize_bool(true),
            CollectionSelector::Specific(id) => serializer.serialize_str(id)
        }
    }
}

impl<'de> Deserialize<'de> for CollectionSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSelector {
            Flag(bool),
            Name(String),
        }

        Ok(match RawSelector::deserialize(deserializer)? {
            RawSelector::Flag(true) => CollectionSelector::All,
            RawSelector::Flag(false) => CollectionSelector::Disabled,
            RawSelector::Name(name) => CollectionSelector::from_setting(&name)
        })
    }
}
