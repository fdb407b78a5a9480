pub mod health;
pub mod story;
pub mod tts;
