use crate::cvcore::keywords::MissingKeywordScore;
use crate::cvcore::rank::RankedPosting;
use std::collections::BTreeMap;

/// Flat metric name -> value map; derived per run, never persisted.
pub type MetricsReport = BTreeMap<String, f32>;

/// Summary quality metrics over a ranking: how much of the corpus clears the
/// relevance threshold.
pub fn evaluate_ranking(ranked: &[RankedPosting], threshold: f32) -> MetricsReport {
    let total = ranked.len();
    let relevant = ranked.iter().filter(|r| r.score >= threshold).count();
    let precision = if total == 0 {
        0.0
    } else {
        relevant as f32 / total as f32
    };
    let mut report = MetricsReport::new();
    report.insert("total_postings".to_string(), total as f32);
    report.insert("relevant_postings".to_string(), relevant as f32);
    report.insert("precision".to_string(), precision);
    report
}

/// Summary metrics over the missing-keyword recommendations: how many were
/// returned and how important they are on average.
pub fn evaluate_recommendations(missing: &[MissingKeywordScore], n: usize) -> MetricsReport {
    let head = &missing[..missing.len().min(n)];
    let mean = if head.is_empty() {
        0.0
    } else {
        head.iter().map(|m| m.score).sum::<f32>() / head.len() as f32
    };
    let mut report = MetricsReport::new();
    report.insert("recommendation_count".to_string(), head.len() as f32);
    report.insert("mean_importance".to_string(), mean);
    report
}
