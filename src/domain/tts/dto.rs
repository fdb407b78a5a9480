use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

pub const AUDIO_FORMAT: &str = "mp3";

/// Request for POST /api/text-to-speech
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// Synthesized audio, base64-encoded for transport inside JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub audio: String,
    pub format: String,
    pub message: String,
}

impl SpeechResponse {
    pub fn from_audio(audio_data: &[u8]) -> Self {
        Self {
            audio: STANDARD.encode(audio_data),
            format: AUDIO_FORMAT.to_string(),
            message: "Audio generated successfully".to_string(),
        }
    }
}
