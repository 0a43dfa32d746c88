use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;

/// Capability to translate an Arabic text fragment into English.
///
/// The analysis passes depend on this trait rather than a concrete client so
/// per-segment failure handling can be exercised without the network.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Configuration for the translation endpoint
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    /// Endpoint URL
    pub endpoint: String,
    /// Source language code
    pub source: String,
    /// Target language code
    pub target: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            source: "ar".to_string(),
            target: "en".to_string(),
        }
    }
}

/// HTTP client for the public Google translate endpoint
pub struct GoogleTranslator {
    client: Client,
    config: TranslateConfig,
}

impl GoogleTranslator {
    pub fn new(config: TranslateConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.config.source.as_str()),
                ("tl", self.config.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to send translation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Translation API error: {} - {}", status, body);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        // The payload is a nested array; element 0 holds
        // [translated, original, ...] chunks that concatenate to the result
        let chunks = body
            .get(0)
            .and_then(|v| v.as_array())
            .context("Unexpected translation payload shape")?;

        let mut translated = String::new();
        for chunk in chunks {
            if let Some(part) = chunk.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            bail!("Translation response contained no text");
        }
        Ok(translated)
    }
}

/// Translator that rejects every call.
///
/// Used by the offline CLI path; the analysis passes then take their
/// documented fallbacks (neutral sentiment, placeholder translations).
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(&self, _text: &str) -> Result<String> {
        bail!("translation is disabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_translator_always_fails() {
        let translator = DisabledTranslator;
        assert!(translator.translate("نص").await.is_err());
    }

    #[test]
    fn test_default_config_targets_arabic_to_english() {
        let config = TranslateConfig::default();
        assert_eq!(config.source, "ar");
        assert_eq!(config.target, "en");
    }
}
