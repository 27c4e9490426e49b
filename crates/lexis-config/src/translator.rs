use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_provider() -> String {
    "mymemory".to_string()
}

fn default_from_lang() -> String {
    "es".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `mymemory` or `deepl`
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub api_key: String,
    /// Empty means the provider's public endpoint
    #[serde(default)]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_key: String::new(),
            api_url: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TranslatorConfig {
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup("TRANSLATOR_ENABLED")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or_else(default_enabled);

        let timeout_seconds = lookup("TRANSLATOR_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or_else(default_timeout_seconds);

        Self {
            enabled,
            provider: lookup("TRANSLATOR_PROVIDER").unwrap_or_else(default_provider),
            from_lang: lookup("TRANSLATOR_FROM").unwrap_or_else(default_from_lang),
            to_lang: lookup("TRANSLATOR_TO").unwrap_or_else(default_to_lang),
            api_key: lookup("TRANSLATOR_API_KEY").unwrap_or_default(),
            api_url: lookup("TRANSLATOR_API_URL").unwrap_or_default(),
            timeout_seconds,
        }
    }

    /// A zero timeout would fail every request, so it means the default
    pub fn timeout(&self) -> Duration {
        let secs = match self.timeout_seconds {
            0 => default_timeout_seconds(),
            secs => secs,
        };
        Duration::from_secs(secs)
    }

    /// Configured endpoint, or `fallback` when none was given
    pub fn api_url_or(&self, fallback: &str) -> String {
        if self.api_url.trim().is_empty() {
            fallback.to_string()
        } else {
            self.api_url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_flag_accepts_common_spellings() {
        for value in ["1", "true", "YES", " on "] {
            let config = TranslatorConfig::from_lookup(&|key: &str| {
                (key == "TRANSLATOR_ENABLED").then(|| value.to_string())
            });
            assert!(config.enabled, "{value:?} should enable translation");
        }

        let config = TranslatorConfig::from_lookup(&|key: &str| {
            (key == "TRANSLATOR_ENABLED").then(|| "nope".to_string())
        });
        assert!(!config.enabled);
    }

    #[test]
    fn bad_timeout_uses_default() {
        let config = TranslatorConfig::from_lookup(&|key: &str| {
            (key == "TRANSLATOR_TIMEOUT_SECONDS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let config = TranslatorConfig::from_lookup(&|key: &str| {
            (key == "TRANSLATOR_TIMEOUT_SECONDS").then(|| "0".to_string())
        });
        assert_eq!(config.timeout_seconds, 10);

        let from_json: TranslatorConfig =
            serde_json::from_str(r#"{ "timeout_seconds": 0 }"#).unwrap();
        assert_eq!(from_json.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn api_url_falls_back_when_blank() {
        let mut config = TranslatorConfig::default();
        assert_eq!(config.api_url_or("https://example.test"), "https://example.test");

        config.api_url = "http://localhost:5000/translate".to_string();
        assert_eq!(
            config.api_url_or("https://example.test"),
            "http://localhost:5000/translate"
        );
    }
}
