use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    constants::prompts::NOTES_GENERATOR_PROMPT,
    errors::{AppError, AppResult},
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Boundary to the generative model. Everything behind it is one
/// prompt-in/text-out call; parsing the text is the extractor's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesGenerator: Send + Sync {
    /// Produces the raw structured-notes document for a transcript.
    async fn generate_notes(&self, transcript: &str) -> AppResult<String>;

    /// Compresses a summary span into a short search-topic phrase.
    async fn distill_topic(&self, summary: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// First candidate's concatenated text, if the model returned any.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini client over the `generateContent` REST endpoint.
pub struct GeminiModelService {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GeminiModelService {
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    async fn generate(&self, prompt: String) -> AppResult<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE,
            self.model,
            self.api_key.expose_secret()
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                AppError::ExternalService(format!("Gemini API call failed: {}", e))
            })?;

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or_else(|| {
            AppError::ExternalService(
                "Gemini API returned an empty or malformed response".to_string(),
            )
        })
    }
}

#[async_trait]
impl NotesGenerator for GeminiModelService {
    async fn generate_notes(&self, transcript: &str) -> AppResult<String> {
        if transcript.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Cannot generate notes from an empty transcript".to_string(),
            ));
        }

        log::info!("Calling Gemini API to generate notes.");
        let prompt = format!(
            "{}\n\nHere is the transcript:\n{}",
            NOTES_GENERATOR_PROMPT, transcript
        );
        let notes = self.generate(prompt).await?;
        log::info!("Successfully generated notes from Gemini API.");
        Ok(notes)
    }

    async fn distill_topic(&self, summary: &str) -> AppResult<String> {
        log::info!("Distilling topic from summary.");
        let prompt = format!(
            "Based on the following summary, identify the core topic in 3-5 words. \
Your response must ONLY be the topic phrase, with no extra text or punctuation. \
For example: 'Quantum Physics Basics'.\n\nSummary: {}",
            summary
        );

        let topic = self.generate(prompt).await?;
        let topic = topic.trim().replace('"', "");
        log::info!("Successfully distilled topic: '{}'", topic);
        Ok(topic)
    }
}
