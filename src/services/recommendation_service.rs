use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::VideoRecommendation,
};

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Boundary to the video search API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearcher: Send + Sync {
    async fn search(
        &self,
        topic: &str,
        level: &str,
        max_results: u8,
    ) -> AppResult<Vec<VideoRecommendation>>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// YouTube Data API v3 search client.
pub struct YoutubeSearchService {
    client: reqwest::Client,
    api_key: SecretString,
}

impl YoutubeSearchService {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    fn build_query(topic: &str, level: &str) -> String {
        format!("{} for {}s tutorial", topic, level)
    }
}

#[async_trait]
impl VideoSearcher for YoutubeSearchService {
    async fn search(
        &self,
        topic: &str,
        level: &str,
        max_results: u8,
    ) -> AppResult<Vec<VideoRecommendation>> {
        if topic.trim().is_empty() {
            log::warn!("No topic provided. Skipping recommendations.");
            return Ok(Vec::new());
        }

        log::info!(
            "Fetching YouTube recommendations for topic: '{}', level: '{}'.",
            topic,
            level
        );

        let response = self
            .client
            .get(YOUTUBE_SEARCH_URL)
            .query(&[
                ("q", Self::build_query(topic, level).as_str()),
                ("part", "snippet"),
                ("maxResults", &max_results.to_string()),
                ("type", "video"),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AppError::ExternalService(format!("YouTube API search failed: {}", e)))?;

        let body: SearchResponse = response.json().await?;

        let recommendations: Vec<VideoRecommendation> = body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoRecommendation {
                    title: item.snippet.title,
                    url: format!("https://www.youtube.com/watch?v={}", video_id),
                    thumbnail: item.snippet.thumbnails.high.url,
                })
            })
            .collect();

        log::info!("Found {} YouTube recommendations.", recommendations.len());
        Ok(recommendations)
    }
}
