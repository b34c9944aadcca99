use crate::cvcore::error::{MatchError, Result};
use std::fs;
use std::path::Path;

/// Loads the candidate's raw text. A blank file is an explicit failure, not
/// an empty run.
pub fn load_candidate(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(MatchError::InputEmpty("candidate text"));
    }
    Ok(trimmed.to_string())
}
