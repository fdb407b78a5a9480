use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech with the given voice
    ///
    /// Returns the raw audio bytes (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The text to speak
    /// * `voice` - Provider voice identifier, passed through unchanged
    /// * `instructions` - Delivery guidance for the voice (tone, pacing)
    ///
    /// # Errors
    /// Returns the provider's error message if synthesis fails
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        instructions: &str,
    ) -> Result<Vec<u8>, String>;
}
