use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notes::{extract_diagram, json_section_items};

/// Everything parsed out of one generated notes document. Lives for a single
/// request: built once from the model's raw output, serialized into the
/// response, then dropped.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StudyNotes {
    /// The raw notes document, forwarded verbatim for rendering.
    pub notes: String,
    /// Quiz items are caller-defined JSON; the extractor never validates the
    /// item schema, only pulls the list out.
    pub mcq_questions: Vec<Value>,
    pub flashcard_questions: Vec<Value>,
    pub graphviz_data: Option<String>,
    pub topic: Option<String>,
}

impl StudyNotes {
    /// Parses a notes document into its structured parts. Sections the model
    /// omitted or mangled come back empty rather than failing; the topic is
    /// filled in separately by the pipeline.
    pub fn from_document(document: &str) -> Self {
        Self {
            mcq_questions: json_section_items(document, "MCQ Quiz"),
            flashcard_questions: json_section_items(document, "Flashcard Review"),
            graphviz_data: extract_diagram(document),
            notes: document.to_string(),
            topic: None,
        }
    }
}
