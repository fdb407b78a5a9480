use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use async_openai::{config::OpenAIConfig, Client};
use storyteller_backend::controllers::{story::StoryController, tts::TtsController};
use storyteller_backend::domain::{story::StoryService, tts::TtsService};
use storyteller_backend::infrastructure::config::{Config, LogFormat};
use storyteller_backend::infrastructure::http::start_http_server;
use storyteller_backend::infrastructure::repositories::{OpenAiStoryRepository, OpenAiTtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Storyteller Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        api_base = %config.openai_api_base,
        story_model = %config.story_model,
        tts_model = %config.tts_model,
        default_voice = %config.tts_default_voice,
        "Initializing OpenAI clients"
    );

    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new()
            .with_api_key(config.openai_api_key.clone())
            .with_api_base(config.openai_api_base.clone()),
    ));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject provider clients)
    let story_repo = Arc::new(OpenAiStoryRepository::new(
        openai_client,
        config.story_model.clone(),
    ));
    let tts_repo = Arc::new(OpenAiTtsRepository::new(
        reqwest::Client::new(),
        config.openai_api_base.clone(),
        config.openai_api_key.clone(),
        config.tts_model.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    let story_service = Arc::new(StoryService::new(story_repo));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        config.tts_default_voice.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    let story_controller = Arc::new(StoryController::new(story_service));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, story_controller, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storyteller_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
