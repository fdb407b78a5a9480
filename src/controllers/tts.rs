use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{SpeechRequest, SpeechResponse, TtsService, TtsServiceApi},
    error::AppResult,
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/text-to-speech - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<SpeechResponse>> {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::debug!(rejection = %rejection, "Unreadable speech request body");
                SpeechRequest::default()
            }
        };

        let result = controller
            .tts_service
            .synthesize(request.text, request.voice)
            .await?;

        tracing::debug!(
            voice = %result.voice,
            char_count = result.char_count,
            audio_size = result.audio_data.len(),
            "Speech synthesized"
        );

        Ok(Json(SpeechResponse::from_audio(&result.audio_data)))
    }
}
