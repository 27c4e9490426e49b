mod deepl;
mod mymemory;
mod response;

use std::sync::Arc;

use lexis_config::translator::TranslatorConfig;

pub use deepl::DeepLTranslator;
pub use mymemory::MyMemoryTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// Build the provider named in the config, `None` when translation is disabled
pub fn provider_from_config(
    config: &TranslatorConfig,
) -> Result<Option<Arc<dyn Translator>>, TranslateError> {
    if !config.enabled {
        return Ok(None);
    }

    let timeout = config.timeout();
    let provider: Arc<dyn Translator> = match config.provider.to_lowercase().as_str() {
        "deepl" => Arc::new(DeepLTranslator::new(
            config.api_key.clone(),
            config.api_url_or(deepl::DEFAULT_API_URL),
            timeout,
        )?),
        "mymemory" => Arc::new(MyMemoryTranslator::new(
            config.api_url_or(mymemory::DEFAULT_API_URL),
            timeout,
        )?),
        other => return Err(TranslateError::UnsupportedProvider(other.to_string())),
    };

    tracing::info!("Using translation provider {}", provider.metadata().name);
    Ok(Some(provider))
}
