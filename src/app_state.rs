use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        GeminiModelService, StudyService, VideoSearcher, WhisperTranscriber, YoutubeSearchService,
        YtDlpMediaService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub video_searcher: Arc<dyn VideoSearcher>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(GeminiModelService::new(
            config.google_api_key.clone(),
            config.gemini_model.clone(),
        ));
        let study_service = Arc::new(StudyService::new(
            Arc::new(YtDlpMediaService::new()),
            Arc::new(WhisperTranscriber::new(config.whisper_model_path.clone())),
            generator,
        ));
        let video_searcher = Arc::new(YoutubeSearchService::new(config.youtube_api_key.clone()));

        Self {
            study_service,
            video_searcher,
            config: Arc::new(config),
        }
    }

    /// Builds a state around externally constructed services; handler tests
    /// use this to swap in mocks.
    pub fn with_services(
        study_service: Arc<StudyService>,
        video_searcher: Arc<dyn VideoSearcher>,
        config: Config,
    ) -> Self {
        Self {
            study_service,
            video_searcher,
            config: Arc::new(config),
        }
    }
}
