use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::StudyNotes,
    notes::extract_summary_span,
    services::{MediaDownloader, NotesGenerator, Transcriber},
};

/// How many leading words of the summary stand in for a topic when the
/// distillation call fails.
const TOPIC_FALLBACK_WORDS: usize = 10;

/// Runs the whole notes pipeline for one video URL: download audio,
/// transcribe, generate the notes document, parse it into structured parts.
pub struct StudyService {
    downloader: Arc<dyn MediaDownloader>,
    transcriber: Arc<dyn Transcriber>,
    generator: Arc<dyn NotesGenerator>,
}

impl StudyService {
    pub fn new(
        downloader: Arc<dyn MediaDownloader>,
        transcriber: Arc<dyn Transcriber>,
        generator: Arc<dyn NotesGenerator>,
    ) -> Self {
        Self {
            downloader,
            transcriber,
            generator,
        }
    }

    pub async fn generate_study_notes(&self, video_url: &str) -> AppResult<StudyNotes> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return Err(AppError::ValidationError(
                "video_url cannot be empty".to_string(),
            ));
        }

        let audio_path = std::env::temp_dir().join(format!("eduease-{}.wav", Uuid::new_v4()));
        let result = self.run_pipeline(video_url, &audio_path).await;

        // The audio file is per-request scratch; drop it whether the pipeline
        // succeeded or not.
        if let Err(e) = tokio::fs::remove_file(&audio_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to clean up audio file {}: {}",
                    audio_path.display(),
                    e
                );
            }
        }

        result
    }

    async fn run_pipeline(&self, video_url: &str, audio_path: &Path) -> AppResult<StudyNotes> {
        self.downloader.download_audio(video_url, audio_path).await?;
        let transcript = self.transcriber.transcribe(audio_path).await?;
        let document = self.generator.generate_notes(&transcript).await?;

        let mut notes = StudyNotes::from_document(&document);
        notes.topic = self.resolve_topic(&document).await;
        Ok(notes)
    }

    /// Distills a search topic from the summary section, falling back to a
    /// truncation of the summary itself when the model call fails. No summary
    /// means no topic.
    async fn resolve_topic(&self, document: &str) -> Option<String> {
        let summary = extract_summary_span(document)?;

        match self.generator.distill_topic(&summary).await {
            Ok(topic) if !topic.trim().is_empty() => Some(topic),
            Ok(_) => Some(truncate_topic(&summary)),
            Err(e) => {
                log::warn!("Topic distillation failed, using truncated summary: {}", e);
                Some(truncate_topic(&summary))
            }
        }
    }
}

fn truncate_topic(summary: &str) -> String {
    summary
        .split_whitespace()
        .take(TOPIC_FALLBACK_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
