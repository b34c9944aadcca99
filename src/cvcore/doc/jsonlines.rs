use super::Posting;
use serde_json::Value;

/// Parses job postings from line-delimited JSON with `title` and
/// `description` fields. Malformed lines and lines without a description are
/// dropped with a warning.
pub fn parse_jsonlines(content: &str) -> Vec<Posting> {
    let mut postings = vec![];
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                let title = match &value["title"] {
                    Value::String(s) => s.trim().to_string(),
                    _ => String::new(),
                };
                let description = match &value["description"] {
                    Value::String(s) => s.trim().to_string(),
                    _ => String::new(),
                };
                if description.is_empty() {
                    log::warn!("line {}: no description, dropped", n + 1);
                    continue;
                }
                postings.push(Posting::new(title, description));
            }
            Err(e) => log::warn!("line {}: {}", n + 1, e),
        }
    }
    postings
}
