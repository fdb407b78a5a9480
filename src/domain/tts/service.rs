use super::error::TtsServiceError;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub const NARRATION_INSTRUCTIONS: &str = "Speak in an engaging, storytelling tone.";

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice: String,
    pub char_count: usize,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    default_voice: String,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, default_voice: String) -> Self {
        Self {
            tts_repo,
            default_voice,
        }
    }

    /// Requested voice, or the configured default when absent or empty
    fn resolve_voice(&self, voice: Option<String>) -> String {
        voice
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.default_voice.clone())
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize narration audio for `text`
    ///
    /// Returns raw MP3 bytes along with the voice actually used
    async fn synthesize(
        &self,
        text: Option<String>,
        voice: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: Option<String>,
        voice: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        let text = text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TtsServiceError::Invalid("Text is required".to_string()))?;
        let voice = self.resolve_voice(voice);

        tracing::info!(
            voice = %voice,
            text_length = text.len(),
            "TTS synthesis request"
        );

        let audio_data = self
            .tts_repo
            .synthesize(&text, &voice, NARRATION_INSTRUCTIONS)
            .await
            .map_err(TtsServiceError::Dependency)?;

        Ok(TtsSynthesisResult {
            audio_data,
            voice,
            char_count: text.len(),
        })
    }
}
