#[cfg(test)]
pub mod fixtures {
    /// A well-formed notes document with every section the generator is asked
    /// to produce.
    pub fn complete_notes_document() -> String {
        "## Detailed Summary\n\
Ohm's law relates voltage, current and resistance in a circuit.\n\n\
## Key Concepts\n\
- Voltage: electrical potential difference\n\
- Resistance: opposition to current flow\n\n\
## MCQ Quiz\n\
```json\n\
[{\"question\": \"V = ?\", \"options\": [\"IR\", \"I/R\", \"R/I\", \"I+R\"], \"answer\": \"IR\"}]\n\
```\n\n\
## Flashcard Review\n\
```json\n\
[{\"front\": \"Ohm\", \"back\": \"Unit of resistance\"}]\n\
```\n\n\
## Concept Map\n\
```dot\nVoltage -> Current; Resistance -> Current\n```\n"
            .to_string()
    }

    /// A document where the model drifted from the template: quiz JSON is
    /// broken and the diagram section is missing.
    pub fn drifted_notes_document() -> String {
        "## Summary\nA short summary.\n\n\
## MCQ Quiz\n\
```json\n\
[{\"question\": \"missing closing brace\"\n\
```\n"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::notes::{extract_diagram, json_section_items};

    #[test]
    fn test_complete_fixture_has_all_sections() {
        let document = complete_notes_document();

        assert_eq!(json_section_items(&document, "MCQ Quiz").len(), 1);
        assert_eq!(json_section_items(&document, "Flashcard Review").len(), 1);
        assert!(extract_diagram(&document).is_some());
    }

    #[test]
    fn test_drifted_fixture_degrades_cleanly() {
        let document = drifted_notes_document();

        assert!(json_section_items(&document, "MCQ Quiz").is_empty());
        assert_eq!(extract_diagram(&document), None);
    }
}
