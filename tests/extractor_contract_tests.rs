//! Contract tests for the note-content extractor, exercised through the
//! crate's public API the way the orchestration layer uses it.

use eduease_server::notes::{
    extract_diagram, extract_json_section, extract_summary_span, json_section_items, Extraction,
    DEFAULT_DIAGRAM_STYLE,
};
use serde_json::json;

const FULL_DOCUMENT: &str = r#"Here are your study notes.

## Detailed Summary
Neural networks learn by adjusting weights through backpropagation.
They are composed of layers of interconnected nodes.

## Key Concepts
- Weight: a learned parameter
- Gradient: direction of steepest change

## MCQ Quiz
Test yourself:
```json
[
  {"question": "What adjusts during training?", "options": ["Weights", "Inputs", "Labels", "Epochs"], "answer": "Weights"},
  {"question": "What computes gradients?", "options": ["Backprop", "Dropout", "Pooling", "Padding"], "answer": "Backprop"}
]
```

## Flashcard Review
```json
[
  {"front": "Epoch", "back": "One pass over the training data"}
]
```

## Concept Map
```dot
Network -> Layer; Layer -> Neuron; Neuron -> Weight
```
"#;

#[test]
fn json_sections_decode_independently() {
    let quiz = json_section_items(FULL_DOCUMENT, "MCQ Quiz");
    let cards = json_section_items(FULL_DOCUMENT, "Flashcard Review");

    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz[1]["answer"], json!("Backprop"));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["front"], json!("Epoch"));
}

#[test]
fn missing_label_yields_empty_sequence() {
    assert!(json_section_items(FULL_DOCUMENT, "Essay Questions").is_empty());
    assert_eq!(
        extract_json_section(FULL_DOCUMENT, "Essay Questions"),
        Extraction::NotFound
    );
}

#[test]
fn malformed_json_yields_empty_sequence_not_panic() {
    let document = "## MCQ Quiz\n```json\nnot json at all {{{\n```\n";

    assert!(json_section_items(document, "MCQ Quiz").is_empty());
    assert!(extract_json_section(document, "MCQ Quiz").is_malformed());
}

#[test]
fn label_matching_is_case_insensitive() {
    let document = "## mcq quiz\n```json\n[1, 2, 3]\n```\n";

    assert_eq!(json_section_items(document, "MCQ Quiz").len(), 3);
}

#[test]
fn diagram_extraction_styles_and_wraps() {
    let styled = extract_diagram(FULL_DOCUMENT).expect("dot fence present");
    assert!(styled.starts_with(&format!("digraph G {{ {}", DEFAULT_DIAGRAM_STYLE)));
    assert!(styled.contains("Network -> Layer"));

    assert_eq!(extract_diagram("no fences here"), None);

    let already_declared = extract_diagram("```dot\ndigraph Flow { A -> B }\n```").unwrap();
    assert!(already_declared.starts_with(&format!("digraph Flow {{ {}", DEFAULT_DIAGRAM_STYLE)));
}

#[test]
fn summary_span_is_captured_between_headers() {
    let span = extract_summary_span(FULL_DOCUMENT).expect("summary present");
    assert!(span.starts_with("Neural networks learn"));
    assert!(span.ends_with("interconnected nodes."));
    assert!(!span.contains("Key Concepts"));
}

#[test]
fn extraction_is_pure_and_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            json_section_items(FULL_DOCUMENT, "MCQ Quiz"),
            json_section_items(FULL_DOCUMENT, "MCQ Quiz")
        );
        assert_eq!(extract_diagram(FULL_DOCUMENT), extract_diagram(FULL_DOCUMENT));
        assert_eq!(
            extract_summary_span(FULL_DOCUMENT),
            extract_summary_span(FULL_DOCUMENT)
        );
    }
}
