use serde::Deserialize;
use std::env;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // OpenAI
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub story_model: String,
    pub tts_model: String,
    pub tts_default_voice: String,
    // Cross-origin access
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CorsConfig {
    pub enabled: bool,
    /// `["*"]` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|e| format!("PORT must be a valid port number: {}", e))?,
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            openai_api_key: lookup("OPENAI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .ok_or("OPENAI_API_KEY must be set")?,
            openai_api_base: lookup("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            story_model: lookup("STORY_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            tts_model: lookup("TTS_MODEL").unwrap_or_else(|| "gpt-4o-mini-tts".to_string()),
            tts_default_voice: lookup("TTS_DEFAULT_VOICE").unwrap_or_else(|| "coral".to_string()),
            cors: CorsConfig {
                enabled: match lookup("CORS_ENABLED") {
                    Some(value) => parse_flag(&value)
                        .ok_or_else(|| format!("CORS_ENABLED must be true or false, got '{}'", value))?,
                    None => true,
                },
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| parse_origins(&s))
                    .unwrap_or_else(|| vec!["*".to_string()]),
            },
        };

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
