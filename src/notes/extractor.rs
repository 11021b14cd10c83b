use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Default visual style injected into every extracted diagram, right after the
/// opening brace. Matches the presentation theme the frontend renders with.
pub const DEFAULT_DIAGRAM_STYLE: &str = "bgcolor=\"transparent\"; node [style=\"filled\", shape=\"box\", fillcolor=\"#AEC6CF\", fontcolor=\"#121212\", color=\"#FFFFFF\", penwidth=2, fontname=\"Inter\"]; edge [color=\"#FFFFFF\", fontname=\"Inter\"];";

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##([^\n]*)").expect("header pattern is valid"));
static JSON_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]+?)\s*```").expect("json fence pattern is valid"));
static DOT_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```dot\s*([\s\S]+?)\s*```").expect("dot fence pattern is valid"));

/// Outcome of extracting one section from a notes document.
///
/// Generated notes drift from the requested template often enough that the
/// caller needs to tell "the model omitted this section" apart from "the model
/// produced it but broke the encoding". Both degrade to an empty result at the
/// response boundary; only the malformed case is worth a log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    Found(T),
    NotFound,
    Malformed(String),
}

impl<T> Extraction<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Extraction::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Extraction::Malformed(_))
    }
}

fn header_matches(heading: &str, label: &str) -> bool {
    heading
        .trim_start()
        .to_lowercase()
        .starts_with(&label.to_lowercase())
}

/// Returns the text between the first header accepted by `is_match` and the
/// next `##` header (or the end of the document). Slicing the section first
/// keeps every later search bounded, so a fence belonging to a later section
/// is never attributed to an earlier label.
fn section_span<'a>(document: &'a str, is_match: impl Fn(&str) -> bool) -> Option<&'a str> {
    let headers: Vec<regex::Match> = HEADER_RE.find_iter(document).collect();

    for (i, header) in headers.iter().enumerate() {
        let heading = &document[header.start() + 2..header.end()];
        if !is_match(heading) {
            continue;
        }

        let end = headers
            .get(i + 1)
            .map_or(document.len(), |next| next.start());
        return Some(&document[header.end()..end]);
    }

    None
}

/// Extracts the JSON-encoded item list filed under a `## <label>` header.
///
/// The label is matched case-insensitively against the start of the heading
/// text, so `"MCQ Quiz"` matches `## mcq quiz` and `## MCQ Quiz (5 questions)`
/// alike. The first ```` ```json ```` fence inside the matched section is
/// decoded; a valid array comes back as its items, any other valid value as a
/// single-item list. Item schemas are never inspected.
pub fn extract_json_section(document: &str, label: &str) -> Extraction<Vec<Value>> {
    let section = match section_span(document, |heading| header_matches(heading, label)) {
        Some(section) => section,
        None => return Extraction::NotFound,
    };

    let raw = match JSON_FENCE_RE.captures(section).and_then(|cap| cap.get(1)) {
        Some(m) => m.as_str(),
        None => return Extraction::NotFound,
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Extraction::Found(items),
        Ok(value) => Extraction::Found(vec![value]),
        Err(err) => {
            log::warn!("Failed to parse JSON for section '{}': {}", label, err);
            Extraction::Malformed(raw.to_string())
        }
    }
}

/// Degrading wrapper over [`extract_json_section`]: absent and malformed
/// sections both collapse to an empty list, which is what the response
/// payload carries.
pub fn json_section_items(document: &str, label: &str) -> Vec<Value> {
    match extract_json_section(document, label) {
        Extraction::Found(items) => items,
        Extraction::NotFound | Extraction::Malformed(_) => Vec::new(),
    }
}

/// Extracts the first ```` ```dot ```` fence in the document as a complete,
/// styled Graphviz source.
///
/// Content lacking a `digraph` declaration is wrapped in one, and
/// [`DEFAULT_DIAGRAM_STYLE`] is inserted once after the first opening brace.
/// Not idempotent: running this over its own output would inject the style a
/// second time, so it is called exactly once per raw document.
pub fn extract_diagram(document: &str) -> Option<String> {
    let content = DOT_FENCE_RE
        .captures(document)
        .and_then(|cap| cap.get(1))?
        .as_str()
        .trim();

    let graph = if content.starts_with("digraph") {
        content.to_string()
    } else {
        format!("digraph G {{ {} }}", content)
    };

    Some(graph.replacen('{', &format!("{{ {}", DEFAULT_DIAGRAM_STYLE), 1))
}

/// Captures the prose under the `## Summary` header (optionally qualified as
/// `## Detailed Summary`), up to the next `##` header. Whitespace-only spans
/// count as absent.
pub fn extract_summary_span(document: &str) -> Option<String> {
    let span = section_span(document, |heading| {
        header_matches(heading, "Summary") || header_matches(heading, "Detailed Summary")
    })?;

    let trimmed = span.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
