pub mod media_service;
pub mod model_service;
pub mod recommendation_service;
pub mod study_service;
pub mod transcription_service;

pub use media_service::{MediaDownloader, YtDlpMediaService};
pub use model_service::{GeminiModelService, NotesGenerator};
pub use recommendation_service::{VideoSearcher, YoutubeSearchService};
pub use study_service::StudyService;
pub use transcription_service::{Transcriber, WhisperTranscriber};
