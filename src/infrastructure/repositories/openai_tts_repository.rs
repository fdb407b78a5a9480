use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Audio container requested from the provider
const RESPONSE_FORMAT: &str = "mp3";

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct SpeechRequestBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    instructions: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl OpenAiTtsRepository {
    pub fn new(http_client: reqwest::Client, api_base: String, api_key: String, model: String) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.api_base)
    }

    /// Prefer the provider's own error message when the body carries one
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(parsed) if !parsed.error.message.trim().is_empty() => parsed.error.message,
            Ok(_) => format!("OpenAI TTS error: HTTP {}", status),
            Err(_) if body.trim().is_empty() => format!("OpenAI TTS error: HTTP {}", status),
            Err(_) => format!("OpenAI TTS error: HTTP {}: {}", status, body.trim()),
        }
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        instructions: &str,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            voice = voice,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling OpenAI TTS API"
        );

        let body = SpeechRequestBody {
            model: &self.model,
            input: text,
            voice,
            instructions,
            response_format: RESPONSE_FORMAT,
        };

        let response = self
            .http_client
            .post(self.speech_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    voice = voice,
                    "OpenAI TTS API call failed"
                );
                format!("OpenAI TTS error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = Self::error_message(status, &error_text);

            tracing::error!(
                status = status.as_u16(),
                error = %message,
                model = %self.model,
                voice = voice,
                "OpenAI TTS API returned an error"
            );

            return Err(message);
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read OpenAI TTS audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
