pub mod extractor;

pub use extractor::{
    extract_diagram, extract_json_section, extract_summary_span, json_section_items, Extraction,
    DEFAULT_DIAGRAM_STYLE,
};
