use crate::cvcore::vector::TermVector;
use crate::cvcore::vectorize::Vocabulary;

/// A term with its aggregate importance across the posting corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    pub term: String,
    pub score: f32,
}

/// Same shape as KeywordScore, restricted to terms the candidate never uses.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingKeywordScore {
    pub term: String,
    pub score: f32,
}

// corpus-wide demand signal: sum of each term's weight over all postings
fn aggregate_importance(vocab: &Vocabulary, posting_vectors: &[TermVector]) -> Vec<f32> {
    let mut totals = vec![0.0f32; vocab.len()];
    for vector in posting_vectors {
        for (i, w) in vector.iter() {
            totals[i] += w;
        }
    }
    totals
}

/// The n most important terms across the corpus, descending, ties broken by
/// vocabulary index.
pub fn top_keywords(
    vocab: &Vocabulary,
    posting_vectors: &[TermVector],
    n: usize,
) -> Vec<KeywordScore> {
    let totals = aggregate_importance(vocab, posting_vectors);
    let mut indices: Vec<usize> = (0..vocab.len()).collect();
    indices.sort_by(|a, b| totals[*b].total_cmp(&totals[*a]));
    indices
        .into_iter()
        .take(n)
        .map(|i| KeywordScore {
            term: vocab.term(i).to_string(),
            score: totals[i],
        })
        .collect()
}

/// Every term the market uses that the candidate does not: aggregate
/// importance > 0 and candidate weight exactly 0, descending.
pub fn missing_keywords(
    vocab: &Vocabulary,
    posting_vectors: &[TermVector],
    candidate_vector: &TermVector,
) -> Vec<MissingKeywordScore> {
    let totals = aggregate_importance(vocab, posting_vectors);
    let mut missing: Vec<usize> = (0..vocab.len())
        .filter(|&i| totals[i] > 0.0 && candidate_vector.get(i) == 0.0)
        .collect();
    missing.sort_by(|a, b| totals[*b].total_cmp(&totals[*a]));
    missing
        .into_iter()
        .map(|i| MissingKeywordScore {
            term: vocab.term(i).to_string(),
            score: totals[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvcore::vectorize::Vectorizer;

    fn fixture() -> (Vocabulary, Vec<TermVector>) {
        let corpus = vec![
            "rust kafka rust".to_string(),
            "rust python".to_string(),
            "python grpc".to_string(),
        ];
        let vectorizer = Vectorizer::new(500);
        let vocab = vectorizer.fit(&corpus).unwrap();
        let vectors = corpus
            .iter()
            .map(|text| vectorizer.transform(text, &vocab))
            .collect();
        (vocab, vectors)
    }

    #[test]
    fn test_top_keywords_descending() {
        let (vocab, vectors) = fixture();
        let top = top_keywords(&vocab, &vectors, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].term, "rust");
        assert!(top[0].score >= top[1].score);
    }

    #[test]
    fn test_top_keywords_n_larger_than_vocab() {
        let (vocab, vectors) = fixture();
        let top = top_keywords(&vocab, &vectors, 100);
        assert_eq!(top.len(), vocab.len());
    }

    #[test]
    fn test_top_keywords_ties_by_vocabulary_index() {
        let corpus = vec!["alpha beta".to_string(), "alpha beta".to_string()];
        let vectorizer = Vectorizer::new(500);
        let vocab = vectorizer.fit(&corpus).unwrap();
        let vectors: Vec<TermVector> = corpus
            .iter()
            .map(|t| vectorizer.transform(t, &vocab))
            .collect();
        let top = top_keywords(&vocab, &vectors, 2);
        // identical scores: vocabulary order wins
        assert_eq!(top[0].term, "alpha");
        assert_eq!(top[1].term, "beta");
    }

    #[test]
    fn test_missing_keywords_gap() {
        let (vocab, vectors) = fixture();
        let vectorizer = Vectorizer::new(500);
        let cv = vectorizer.transform("rust servicemesh", &vocab);
        let missing = missing_keywords(&vocab, &vectors, &cv);
        let terms: Vec<&str> = missing.iter().map(|m| m.term.as_str()).collect();
        assert!(terms.contains(&"python"));
        assert!(terms.contains(&"kafka"));
        assert!(terms.contains(&"grpc"));
        assert!(!terms.contains(&"rust"));
        // exactly the zero-candidate, positive-corpus terms
        assert_eq!(missing.len(), vocab.len() - 1);
        for m in &missing {
            assert!(m.score > 0.0);
            let i = vocab.index_of(&m.term).unwrap();
            assert_eq!(cv.get(i), 0.0);
        }
        for pair in missing.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_missing_keywords_empty_candidate() {
        let (vocab, vectors) = fixture();
        let cv = TermVector::new(vocab.len());
        // everything the corpus weights is missing
        let missing = missing_keywords(&vocab, &vectors, &cv);
        assert_eq!(missing.len(), vocab.len());
    }
}
