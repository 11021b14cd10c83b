use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub google_api_key: SecretString,
    pub youtube_api_key: SecretString,
    pub gemini_model: String,
    pub whisper_model_path: PathBuf,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_recommendations: u8,
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// `GOOGLE_API_KEY` is mandatory: without it neither notes generation nor
    /// topic distillation can run, so startup fails immediately instead of
    /// deferring the error to the first request. `YOUTUBE_API_KEY` falls back
    /// to the Google key, which is valid for the Data API as well.
    pub fn from_env() -> AppResult<Self> {
        let google_api_key = env::var("GOOGLE_API_KEY").map_err(|_| {
            AppError::InternalError(
                "GOOGLE_API_KEY not found. Make sure it's set in the environment or .env file."
                    .to_string(),
            )
        })?;

        let youtube_api_key =
            env::var("YOUTUBE_API_KEY").unwrap_or_else(|_| google_api_key.clone());

        Ok(Self {
            google_api_key: SecretString::from(google_api_key),
            youtube_api_key: SecretString::from(youtube_api_key),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string()),
            whisper_model_path: env::var("WHISPER_MODEL_PATH")
                .unwrap_or_else(|_| "models/ggml-base.bin".to_string())
                .into(),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_recommendations: env::var("MAX_RECOMMENDATIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            google_api_key: SecretString::from("test_google_api_key".to_string()),
            youtube_api_key: SecretString::from("test_youtube_api_key".to_string()),
            gemini_model: "gemini-1.5-flash-latest".to_string(),
            whisper_model_path: PathBuf::from("models/ggml-base.bin"),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_recommendations: 3,
        }
    }
}
