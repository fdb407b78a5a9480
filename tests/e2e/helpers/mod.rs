use anyhow::Result;
use std::sync::Arc;
use storyteller_backend::controllers::{story::StoryController, tts::TtsController};
use storyteller_backend::domain::{story::StoryService, tts::TtsService};
use storyteller_backend::infrastructure::config::{Config, CorsConfig, LogFormat};
use storyteller_backend::infrastructure::http::build_router;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;


use api_client::TestClient;
use provider_stubs::{mock_audio_bytes, StubStoryRepository, StubTtsRepository};

pub const DEFAULT_STORY: &str = "A cat sat by the window, dreaming of distant rooftops.";

/// Test context for each test, serving the app on its own port
pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub story_repo: Arc<StubStoryRepository>,
    pub tts_repo: Arc<StubTtsRepository>,
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        log_format: LogFormat::Pretty,
        openai_api_key: "test-openai-key".to_string(),
        openai_api_base: "http://127.0.0.1:1".to_string(), // Never reached; providers are stubbed
        story_model: "gpt-4o-mini".to_string(),
        tts_model: "gpt-4o-mini-tts".to_string(),
        tts_default_voice: "coral".to_string(),
        cors: CorsConfig::default(),
    }
}

impl TestContext {
    /// Context whose providers succeed with canned content
    pub async fn new() -> Result<Self> {
        Self::with_providers(
            test_config(),
            StubStoryRepository::returning(DEFAULT_STORY),
            StubTtsRepository::returning(mock_audio_bytes()),
        )
        .await
    }

    pub async fn with_providers(
        config: Config,
        story_repo: Arc<StubStoryRepository>,
        tts_repo: Arc<StubTtsRepository>,
    ) -> Result<Self> {
        let story_service = Arc::new(StoryService::new(story_repo.clone()));
        let tts_service = Arc::new(TtsService::new(
            tts_repo.clone(),
            config.tts_default_voice.clone(),
        ));

        let app = build_router(
            &config,
            Arc::new(StoryController::new(story_service)),
            Arc::new(TtsController::new(tts_service)),
        );

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            config,
            story_repo,
            tts_repo,
        })
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::new()
                .await
                .expect("Failed to start test server")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}
