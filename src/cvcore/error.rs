use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Nothing reached the core: zero postings or a blank candidate text.
    #[error("empty input: {0}")]
    InputEmpty(&'static str),

    /// Corpus yields no retained terms after stopword filtering.
    #[error("vocabulary is empty after filtering")]
    VocabularyEmpty,

    /// A vector does not match the active vocabulary size; caller defect.
    #[error("vector dimension {actual} does not match vocabulary size {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("corpus: {0}")]
    Corpus(String),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::DimensionMismatch { expected: 500, actual: 3 };
        assert_eq!(
            err.to_string(),
            "vector dimension 3 does not match vocabulary size 500"
        );
        let err = MatchError::InputEmpty("corpus");
        assert_eq!(err.to_string(), "empty input: corpus");
    }
}
