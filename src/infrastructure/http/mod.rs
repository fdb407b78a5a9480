pub mod request_id;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, story::StoryController, tts::TtsController};
use crate::error::AppError;
use crate::infrastructure::config::{Config, CorsConfig};

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Assemble the application router with its middleware stack
pub fn build_router(
    config: &Config,
    story_controller: Arc<StoryController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let story_routes = Router::new()
        .route("/api/generate-story", post(StoryController::generate_story))
        .with_state(story_controller);

    let tts_routes = Router::new()
        .route("/api/text-to-speech", post(TtsController::synthesize))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/api/health", get(health::health))
        .merge(story_routes)
        .merge(tts_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        // Inside the request-id layer so per-request trace spans carry the id
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware));

    // Outermost, so preflight requests are answered before routing
    if config.cors.enabled {
        app.layer(cors_layer(&config.cors))
    } else {
        app
    }
}

/// Build the cross-origin policy; `*` in the origin list allows any origin
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(details).into_response()
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    story_controller: Arc<StoryController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, story_controller, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!(
        cors_enabled = config.cors.enabled,
        "Server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
