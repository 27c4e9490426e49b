use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;

pub mod translator;

fn default_data_dir() -> PathBuf {
    PathBuf::from("lexis-data")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `global.json` and the `users/` stores
    pub data_dir: PathBuf,
    /// User selected at startup instead of prompting
    pub default_user: Option<String>,
    pub translator: TranslatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_user: None,
            translator: TranslatorConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("LEXIS_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let default_user = lookup("LEXIS_DEFAULT_USER")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Config {
            data_dir,
            default_user,
            translator: TranslatorConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.data_dir, PathBuf::from("lexis-data"));
        assert!(config.default_user.is_none());
        assert!(!config.translator.enabled);
    }

    #[test]
    fn reads_data_dir_and_user() {
        let config = Config::from_lookup(lookup_from(&[
            ("LEXIS_DATA_DIR", "/tmp/words"),
            ("LEXIS_DEFAULT_USER", "  ana "),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/words"));
        assert_eq!(config.default_user.as_deref(), Some("ana"));
    }

    #[test]
    fn blank_user_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("LEXIS_DEFAULT_USER", "   ")]));
        assert!(config.default_user.is_none());
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "default_user": "ben" }"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("lexis-data"));
        assert_eq!(config.default_user.as_deref(), Some("ben"));
        assert_eq!(config.translator.provider, "mymemory");
    }
}
