pub mod csv;
pub mod jsonlines;
pub mod text;

use crate::cvcore::error::{MatchError, Result};
use std::fs;
use std::path::Path;

/// A job posting as supplied by the corpus loader: already validated to
/// carry a description.
#[derive(PartialEq, Debug, Clone)]
pub struct Posting {
    title: String,
    description: String,
}

impl Posting {
    pub fn new(title: String, description: String) -> Self {
        Posting { title, description }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Loads an ordered posting corpus, dispatching on the file extension.
pub fn load_postings(path: &Path) -> Result<Vec<Posting>> {
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => csv::parse_csv(&content),
        "jsonl" | "jsonlines" => Ok(jsonlines::parse_jsonlines(&content)),
        other => Err(MatchError::Corpus(format!(
            "unsupported corpus format: {:?}",
            other
        ))),
    }
}
