use serde::Serialize;
use serde_json::Value;

use crate::models::domain::{StudyNotes, VideoRecommendation};

#[derive(Clone, Debug, Serialize)]
pub struct GenerateNotesResponseDto {
    pub notes: String,
    pub mcq_questions: Vec<Value>,
    pub flashcard_questions: Vec<Value>,
    pub graphviz_data: Option<String>,
    pub topic: Option<String>,
}

impl From<StudyNotes> for GenerateNotesResponseDto {
    fn from(notes: StudyNotes) -> Self {
        Self {
            notes: notes.notes,
            mcq_questions: notes.mcq_questions,
            flashcard_questions: notes.flashcard_questions,
            graphviz_data: notes.graphviz_data,
            topic: notes.topic,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RoadmapResponseDto {
    pub recommendations: Vec<VideoRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_notes_response_carries_parsed_fields() {
        let notes = StudyNotes {
            notes: "## Summary\nGraphs.".to_string(),
            mcq_questions: vec![serde_json::json!({"question": "q1"})],
            flashcard_questions: vec![],
            graphviz_data: Some("digraph G { A -> B }".to_string()),
            topic: Some("Graph Theory".to_string()),
        };

        let response = GenerateNotesResponseDto::from(notes);
        let json = serde_json::to_value(&response).expect("should serialize");

        assert_eq!(json["mcq_questions"].as_array().map(|a| a.len()), Some(1));
        assert_eq!(json["flashcard_questions"].as_array().map(|a| a.len()), Some(0));
        assert_eq!(json["topic"], serde_json::json!("Graph Theory"));
    }
}
