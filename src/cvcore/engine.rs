use crate::cvcore::config::MatchConfig;
use crate::cvcore::doc::Posting;
use crate::cvcore::error::{MatchError, Result};
use crate::cvcore::eval::{self, MetricsReport};
use crate::cvcore::keywords::{self, KeywordScore, MissingKeywordScore};
use crate::cvcore::observe::{NoopObserver, StageObserver};
use crate::cvcore::preprocess::TextCleaner;
use crate::cvcore::rank::{self, RankedPosting};
use crate::cvcore::vector::TermVector;
use crate::cvcore::vectorize::Vectorizer;
use std::time::Instant;

/// Everything one run derives: the full ranking, the corpus demand signal,
/// the candidate's vocabulary gap, and the summary metrics.
#[derive(Debug)]
pub struct MatchReport {
    pub ranked: Vec<RankedPosting>,
    pub top_keywords: Vec<KeywordScore>,
    pub missing_keywords: Vec<MissingKeywordScore>,
    pub metrics: MetricsReport,
}

impl MatchReport {
    /// Top-N view of the ranking; truncation is presentation, the full
    /// ranking stays available.
    pub fn top_postings(&self, n: usize) -> &[RankedPosting] {
        &self.ranked[..self.ranked.len().min(n)]
    }
}

/// Assembles the pipeline: clean -> fit/transform -> rank -> keywords ->
/// evaluate. Stage boundaries report to the injected observer.
pub struct Engine {
    cfg: MatchConfig,
    cleaner: TextCleaner,
    vectorizer: Vectorizer,
    observer: Box<dyn StageObserver>,
}

impl Engine {
    pub fn new(cfg: MatchConfig) -> Self {
        Self::with_observer(cfg, Box::new(NoopObserver))
    }

    pub fn with_observer(cfg: MatchConfig, observer: Box<dyn StageObserver>) -> Self {
        let cleaner = TextCleaner::new(&cfg.domain_stopwords);
        let vectorizer = Vectorizer::new(cfg.max_vocabulary_size);
        Engine {
            cfg,
            cleaner,
            vectorizer,
            observer,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn run(&self, postings: &[Posting], candidate_text: &str) -> Result<MatchReport> {
        if postings.is_empty() {
            return Err(MatchError::InputEmpty("corpus"));
        }
        if candidate_text.trim().is_empty() {
            return Err(MatchError::InputEmpty("candidate text"));
        }

        let started = Instant::now();
        let cleaned: Vec<String> = postings
            .iter()
            .map(|p| self.cleaner.clean(p.description()))
            .collect();
        let candidate_cleaned = self.cleaner.clean(candidate_text);
        self.observer
            .stage("preprocess", started.elapsed(), postings.len() + 1);

        let started = Instant::now();
        let vocab = self.vectorizer.fit(&cleaned)?;
        let posting_vectors: Vec<TermVector> = cleaned
            .iter()
            .map(|text| self.vectorizer.transform(text, &vocab))
            .collect();
        let candidate_vector = self.vectorizer.transform(&candidate_cleaned, &vocab);
        self.observer
            .stage("vectorize", started.elapsed(), posting_vectors.len());

        let started = Instant::now();
        let ranked = rank::rank(postings, &posting_vectors, &candidate_vector)?;
        self.observer.stage("rank", started.elapsed(), ranked.len());

        let started = Instant::now();
        let top_keywords =
            keywords::top_keywords(&vocab, &posting_vectors, self.cfg.top_n_keywords);
        let missing_keywords =
            keywords::missing_keywords(&vocab, &posting_vectors, &candidate_vector);
        self.observer
            .stage("keywords", started.elapsed(), missing_keywords.len());

        let started = Instant::now();
        let mut metrics = eval::evaluate_ranking(&ranked, self.cfg.relevance_threshold);
        metrics.extend(eval::evaluate_recommendations(
            &missing_keywords,
            self.cfg.top_n_keywords,
        ));
        self.observer.stage("evaluate", started.elapsed(), metrics.len());

        Ok(MatchReport {
            ranked,
            top_keywords,
            missing_keywords,
            metrics,
        })
    }
}
