use crate::cvcore::doc::Posting;
use crate::cvcore::error::{MatchError, Result};
use crate::cvcore::vector::TermVector;

/// A posting with its similarity to the candidate and its 1-based rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPosting {
    pub doc_id: usize,
    pub title: String,
    pub score: f32,
    pub rank: usize,
}

/// Cosine similarity clamped to [0, 1]. Zero-norm vectors score 0 rather
/// than dividing by zero.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(0.0, 1.0)
}

/// Ranks every posting against the candidate vector, descending similarity,
/// ties keeping original corpus order.
pub fn rank(
    postings: &[Posting],
    posting_vectors: &[TermVector],
    candidate_vector: &TermVector,
) -> Result<Vec<RankedPosting>> {
    let expected = candidate_vector.dim();
    for vector in posting_vectors {
        if vector.dim() != expected {
            return Err(MatchError::DimensionMismatch {
                expected,
                actual: vector.dim(),
            });
        }
    }
    let mut ranked: Vec<RankedPosting> = postings
        .iter()
        .zip(posting_vectors)
        .enumerate()
        .map(|(doc_id, (posting, vector))| RankedPosting {
            doc_id,
            title: posting.title().to_string(),
            score: cosine_similarity(vector, candidate_vector),
            rank: 0,
        })
        .collect();
    // stable sort preserves corpus order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(dim: usize, weights: &[(usize, f32)]) -> TermVector {
        let mut v = TermVector::new(dim);
        for &(i, w) in weights {
            v.set(i, w);
        }
        v
    }

    fn postings(n: usize) -> Vec<Posting> {
        (0..n)
            .map(|i| Posting::new(format!("Job {}", i), format!("description {}", i)))
            .collect()
    }

    #[test]
    fn test_cosine_bounds() {
        let a = vector(4, &[(0, 1.0), (1, 2.0)]);
        let b = vector(4, &[(0, 3.0), (1, 6.0)]);
        let c = vector(4, &[(2, 1.0)]);
        // parallel vectors: clamped to at most 1 despite floating point
        let sim = cosine_similarity(&a, &b);
        assert!(sim <= 1.0 && (sim - 1.0).abs() <= 1e-6);
        assert_eq!(cosine_similarity(&a, &c), 0.0);
        let d = vector(4, &[(0, 1.0), (2, 1.0)]);
        let sim = cosine_similarity(&a, &d);
        assert!(sim > 0.0 && sim < 1.0);
    }

    #[test]
    fn test_cosine_zero_norm() {
        let zero = TermVector::new(4);
        let a = vector(4, &[(0, 1.0)]);
        assert_eq!(cosine_similarity(&zero, &a), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_rank_descending() {
        let cv = vector(3, &[(0, 1.0)]);
        let vectors = vec![
            vector(3, &[(1, 1.0)]),                  // 0.0
            vector(3, &[(0, 1.0)]),                  // 1.0
            vector(3, &[(0, 1.0), (1, 1.0)]),        // ~0.707
        ];
        let ranked = rank(&postings(3), &vectors, &cv).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].doc_id, 1);
        assert_eq!(ranked[1].doc_id, 2);
        assert_eq!(ranked[2].doc_id, 0);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_rank_ties_keep_corpus_order() {
        let cv = vector(2, &[(0, 1.0)]);
        // all postings identical: every score ties
        let vectors = vec![
            vector(2, &[(0, 2.0)]),
            vector(2, &[(0, 2.0)]),
            vector(2, &[(0, 2.0)]),
        ];
        let ranked = rank(&postings(3), &vectors, &cv).unwrap();
        let order: Vec<usize> = ranked.iter().map(|r| r.doc_id).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_dimension_mismatch() {
        let cv = vector(3, &[(0, 1.0)]);
        let vectors = vec![vector(5, &[(0, 1.0)])];
        let res = rank(&postings(1), &vectors, &cv);
        assert!(matches!(
            res,
            Err(MatchError::DimensionMismatch { expected: 3, actual: 5 })
        ));
    }
}
