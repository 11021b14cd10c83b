pub mod recommendation;
pub mod study_notes;

pub use recommendation::VideoRecommendation;
pub use study_notes::StudyNotes;
