use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::errors::{AppError, AppResult};

/// Boundary for turning a video URL into a local audio file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaDownloader: Send + Sync {
    async fn download_audio(&self, video_url: &str, output_path: &Path) -> AppResult<()>;
}

/// Shells out to `yt-dlp`, which handles the platform negotiation and hands
/// the audio stream to ffmpeg for extraction.
pub struct YtDlpMediaService;

impl YtDlpMediaService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YtDlpMediaService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaDownloader for YtDlpMediaService {
    async fn download_audio(&self, video_url: &str, output_path: &Path) -> AppResult<()> {
        log::info!("Starting audio extraction for URL: {}", video_url);

        // yt-dlp picks the container extension itself, so hand it a template
        // next to the requested output path and let the post-processor write
        // the final wav. 16 kHz mono is what the transcriber expects.
        let output_template = output_path.with_extension("%(ext)s");

        let output = Command::new("yt-dlp")
            .arg(video_url)
            .arg("-f")
            .arg("bestaudio[ext=m4a]/bestaudio/best")
            .arg("-x")
            .arg("--audio-format")
            .arg("wav")
            .arg("--postprocessor-args")
            .arg("ffmpeg:-ar 16000 -ac 1")
            .arg("--no-playlist")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("-o")
            .arg(&output_template)
            .output()
            .await
            .map_err(|e| AppError::AudioExtraction(format!("failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("yt-dlp failed for URL {}: {}", video_url, stderr.trim());
            return Err(AppError::AudioExtraction(format!(
                "yt-dlp exited with {}",
                output.status
            )));
        }

        let metadata = tokio::fs::metadata(output_path).await.map_err(|_| {
            AppError::AudioExtraction("audio file was not created".to_string())
        })?;
        if metadata.len() == 0 {
            return Err(AppError::AudioExtraction(
                "audio file was created but is empty".to_string(),
            ));
        }

        log::info!("Audio extracted successfully to {}", output_path.display());
        Ok(())
    }
}
