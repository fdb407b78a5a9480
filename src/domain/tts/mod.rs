pub mod dto;
pub mod error;
pub mod service;

pub use dto::{SpeechRequest, SpeechResponse, AUDIO_FORMAT};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult, NARRATION_INSTRUCTIONS};
