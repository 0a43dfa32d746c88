use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, multipart};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Transcript, WhisperResponse};

/// Groq transcription endpoint
const TRANSCRIPTION_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Provider-imposed ceiling on uploaded audio size
pub const MAX_AUDIO_BYTES: u64 = 25 * 1024 * 1024;

/// Failure modes of the transcription provider, reported upward unretried
/// once the client's own attempts are exhausted
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("transcription request timed out: {0}")]
    Timeout(String),
    #[error("transcription rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("transcription authentication failed: {0}")]
    Auth(String),
    #[error("transcription failed: {0}")]
    Provider(String),
}

/// Configuration for the Groq Whisper client
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key (from GROQ_API_KEY env var)
    pub api_key: String,
    /// Model to use
    pub model: String,
    /// Source language code passed to Whisper
    pub language: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total attempts before giving up
    pub max_attempts: u32,
}

impl GroqConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("GROQ_API_KEY").context("GROQ_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            model: "whisper-large-v3".to_string(),
            language: "ar".to_string(),
            temperature: 0.09,
            timeout: Duration::from_secs(300),
            max_attempts: 3,
        })
    }
}

/// Groq Whisper transcription client
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Transcribe a WAV payload into a timestamped transcript.
    ///
    /// Transient failures are retried with exponential backoff up to the
    /// configured attempt count; the final error is classified into the
    /// provider failure taxonomy.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<Transcript, TranscribeError> {
        let mut last_error = TranscribeError::Provider("no attempts made".to_string());

        for attempt in 0..self.config.max_attempts {
            if attempt > 0 {
                let wait = Duration::from_secs(2u64.pow(attempt));
                info!(attempt, ?wait, "retrying transcription after backoff");
                tokio::time::sleep(wait).await;
            }

            match self.request(audio.clone(), file_name).await {
                Ok(transcript) => return Ok(transcript),
                Err(error) => {
                    warn!(attempt, %error, "transcription attempt failed");
                    // auth failures never succeed on retry
                    let fatal = matches!(error, TranscribeError::Auth(_));
                    last_error = error;
                    if fatal {
                        break;
                    }
                }
            }
        }

        Err(last_error)
    }

    async fn request(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<Transcript, TranscribeError> {
        let part = multipart::Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str("audio/wav")
            .map_err(|e| TranscribeError::Provider(e.to_string()))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("model", self.config.model.clone())
            .text("temperature", self.config.temperature.to_string())
            .text("language", self.config.language.clone())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "segment");

        let response = self
            .client
            .post(TRANSCRIPTION_URL)
            .bearer_auth(&self.config.api_key)
            .timeout(self.config.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }

        let parsed: WhisperResponse = response
            .json()
            .await
            .map_err(|e| TranscribeError::Provider(format!("invalid response body: {e}")))?;

        parsed
            .into_transcript()
            .map_err(|e| TranscribeError::Provider(format!("invalid segments: {e}")))
    }
}

fn classify_transport_error(error: reqwest::Error) -> TranscribeError {
    if error.is_timeout() || error.is_connect() {
        TranscribeError::Timeout(error.to_string())
    } else {
        TranscribeError::Provider(error.to_string())
    }
}

fn classify_status(status: StatusCode, body: String) -> TranscribeError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TranscribeError::Auth(format!("{status}: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => TranscribeError::RateLimited(format!("{status}: {body}")),
        StatusCode::GATEWAY_TIMEOUT | StatusCode::REQUEST_TIMEOUT => {
            TranscribeError::Timeout(format!("{status}: {body}"))
        }
        _ => TranscribeError::Provider(format!("{status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, String::new()),
            TranscribeError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            TranscribeError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::GATEWAY_TIMEOUT, String::new()),
            TranscribeError::Timeout(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            TranscribeError::Provider(_)
        ));
    }

    #[test]
    fn test_config_defaults() {
        // SAFETY: test-only env mutation, no parallel reader of this var
        unsafe { std::env::set_var("GROQ_API_KEY", "test-key") };
        let config = GroqConfig::from_env().unwrap();
        assert_eq!(config.model, "whisper-large-v3");
        assert_eq!(config.language, "ar");
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_max_audio_limit_is_25mb() {
        assert_eq!(MAX_AUDIO_BYTES, 25 * 1024 * 1024);
    }
}
