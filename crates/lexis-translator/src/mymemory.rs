use std::time::Duration;

use async_trait::async_trait;

use crate::response::read_json;
use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

pub(crate) const DEFAULT_API_URL: &str = "https://api.mymemory.translated.net/get";

/// Keyless provider backed by the MyMemory public API
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{}|{}", from.to_lowercase(), to.to_lowercase());
        let params = [("q", text), ("langpair", langpair.as_str())];

        let request = self.client.get(&self.api_url).query(&params);
        let json = read_json(request.send().await?).await?;

        Ok(Translation {
            text: parse_response(&json)?,
            from,
            to,
            provider: "mymemory".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
        }
    }
}

/// The API reports failures in the body with a non-200 `responseStatus`,
/// sometimes as a string
fn parse_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let status = match &json["responseStatus"] {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };

    if status != Some(200) {
        let details = json["responseDetails"].as_str().unwrap_or("unknown error");
        return Err(TranslateError::ApiError(details.to_string()));
    }

    json["responseData"]["translatedText"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))
}
