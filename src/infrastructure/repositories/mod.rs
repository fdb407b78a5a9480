pub mod openai_story_repository;
pub mod openai_tts_repository;
pub mod story_repository;
pub mod tts_repository;

pub use openai_story_repository::OpenAiStoryRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use story_repository::StoryRepository;
pub use tts_repository::TtsRepository;
