use crate::cvcore::error::{MatchError, Result};
use crate::cvcore::vector::TermVector;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ordered, immutable term -> column index mapping learned from the posting
/// corpus. Indices are contiguous [0, len) and never change after fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, index: usize) -> &str {
        &self.terms[index]
    }

    pub fn idf(&self, index: usize) -> f32 {
        self.idf[index]
    }
}

/// Learns a bounded vocabulary with smoothed IDF weights from the cleaned
/// corpus and projects any text into that vector space.
pub struct Vectorizer {
    max_terms: usize,
}

impl Vectorizer {
    pub fn new(max_terms: usize) -> Self {
        Vectorizer { max_terms }
    }

    /// Builds the vocabulary from the cleaned posting corpus. Only the top
    /// `max_terms` terms by total corpus frequency are retained; ties keep
    /// first-seen corpus order.
    pub fn fit(&self, corpus: &[String]) -> Result<Vocabulary> {
        let mut corpus_frequency: HashMap<&str, u32> = HashMap::new();
        let mut document_frequency: HashMap<&str, u32> = HashMap::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut order = 0usize;
        for text in corpus {
            let mut seen_here: std::collections::HashSet<&str> = Default::default();
            for token in text.split_whitespace() {
                *corpus_frequency.entry(token).or_insert(0) += 1;
                first_seen.entry(token).or_insert_with(|| {
                    order += 1;
                    order
                });
                if seen_here.insert(token) {
                    *document_frequency.entry(token).or_insert(0) += 1;
                }
            }
        }
        if corpus_frequency.is_empty() {
            return Err(MatchError::VocabularyEmpty);
        }

        let mut ranked: Vec<&str> = corpus_frequency.keys().copied().collect();
        ranked.sort_by_key(|t| (Reverse(corpus_frequency[t]), first_seen[t]));
        ranked.truncate(self.max_terms);

        let doc_count = corpus.len() as f32;
        let mut terms = Vec::with_capacity(ranked.len());
        let mut index = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (i, term) in ranked.iter().enumerate() {
            terms.push(term.to_string());
            index.insert(term.to_string(), i);
            // smoothed IDF, safe for terms present in every document
            let df = document_frequency[term] as f32;
            idf.push(((1.0 + doc_count) / (1.0 + df)).ln() + 1.0);
        }
        Ok(Vocabulary { terms, index, idf })
    }

    /// Projects cleaned text into the fitted space. Terms outside the
    /// vocabulary contribute nothing; zero retained terms yield an all-zero
    /// vector.
    pub fn transform(&self, text: &str, vocab: &Vocabulary) -> TermVector {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut vector = TermVector::new(vocab.len());
        if tokens.is_empty() {
            return vector;
        }
        let total = tokens.len() as f32;
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in &tokens {
            if let Some(i) = vocab.index_of(token) {
                *counts.entry(i).or_insert(0) += 1;
            }
        }
        for (i, count) in counts {
            let tf = count as f32 / total;
            vector.set(i, tf * vocab.idf(i));
        }
        vector
    }
}
