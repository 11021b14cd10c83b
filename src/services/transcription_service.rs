use std::path::{Path, PathBuf};

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::errors::{AppError, AppResult};

/// Boundary for turning an audio file into a plain-text transcript.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> AppResult<String>;
}

/// Runs a local Whisper model over a 16 kHz mono WAV file.
pub struct WhisperTranscriber {
    model_path: PathBuf,
}

impl WhisperTranscriber {
    pub fn new(model_path: PathBuf) -> Self {
        Self { model_path }
    }

    fn run_model(model_path: &Path, samples: Vec<f32>) -> AppResult<String> {
        let model_path_str = model_path
            .to_str()
            .ok_or_else(|| AppError::Transcription("model path is not valid UTF-8".to_string()))?;

        let ctx =
            WhisperContext::new_with_params(model_path_str, WhisperContextParameters::default())
                .map_err(|e| {
                    AppError::Transcription(format!("failed to load Whisper model: {}", e))
                })?;

        let mut state = ctx
            .create_state()
            .map_err(|e| AppError::Transcription(format!("failed to create state: {}", e)))?;

        let params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });
        state
            .full(params, &samples)
            .map_err(|e| AppError::Transcription(format!("failed to run model: {}", e)))?;

        let mut text = String::new();
        for segment in state.as_iter() {
            if let Ok(seg_text) = segment.to_str() {
                text.push_str(seg_text);
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> AppResult<String> {
        log::info!("Transcribing audio file {}", audio_path.display());

        let mut reader = hound::WavReader::open(audio_path)
            .map_err(|e| AppError::Transcription(format!("failed to open audio file: {}", e)))?;
        let samples: Vec<f32> = reader
            .samples::<i16>()
            .collect::<Result<Vec<i16>, _>>()
            .map_err(|e| AppError::Transcription(format!("failed to read samples: {}", e)))?
            .into_iter()
            .map(|s| s as f32 / i16::MAX as f32)
            .collect();

        // Whisper inference is CPU-bound and can run for minutes on long
        // videos; keep it off the actix worker threads.
        let model_path = self.model_path.clone();
        let transcript =
            tokio::task::spawn_blocking(move || Self::run_model(&model_path, samples))
                .await
                .map_err(|e| AppError::InternalError(format!("transcription task failed: {}", e)))??;

        log::info!(
            "Transcription complete. Transcript length: {} characters.",
            transcript.len()
        );
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn transcribe_missing_file_is_an_error() {
        let transcriber = WhisperTranscriber::new(PathBuf::from("models/ggml-base.bin"));

        let result = transcriber
            .transcribe(Path::new("/nonexistent/audio.wav"))
            .await;

        assert!(matches!(result, Err(AppError::Transcription(_))));
    }
}
