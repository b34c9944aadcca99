use crate::cvcore::error::{MatchError, Result};
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Run configuration, fixed at pipeline-assembly time.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct MatchConfig {
    pub max_vocabulary_size: usize,
    pub top_n_keywords: usize,
    pub top_n_postings: usize,
    pub relevance_threshold: f32,
    // recruiting boilerplate filtered on top of the general stopword list
    pub domain_stopwords: HashSet<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            max_vocabulary_size: 500,
            top_n_keywords: 10,
            top_n_postings: 5,
            relevance_threshold: 0.5,
            domain_stopwords: [
                "experience", "required", "preferred", "responsibilities",
                "strong", "ability", "work", "skills",
                "team", "analytics", "requirements", "systems",
                "knowledge", "job", "years", "information",
                "quality", "company", "opportunity", "technical",
            ].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MatchConfig {
    pub fn from_str(cfg_str: &str) -> Result<Self> {
        serde_yaml::from_str(cfg_str)
            .map_err(|e| MatchError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Self::from_str(&cfg_str)
    }
}
