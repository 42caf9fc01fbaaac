use crate::core::{distance::distance_km, scoring::score};
use crate::models::{CandidateRecord, RankedCandidate, RequesterRecord, WeightProfile};

/// Result of a batch ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Scores one requester against a list of candidates and returns them
/// ranked best-first
///
/// Each candidate is scored independently from immutable inputs, so the
/// pass is trivially parallelizable by callers that need it.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: WeightProfile,
    min_score: u8,
}

impl Ranker {
    pub fn new(weights: WeightProfile) -> Self {
        Self {
            weights,
            min_score: 0,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(WeightProfile::default())
    }

    /// Drop candidates scoring below the given floor
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    /// Score every candidate against the requester, using the caller's
    /// weights when supplied and the ranker's configured profile otherwise
    ///
    /// Candidates are sorted by overall score descending, with candidate id
    /// as a deterministic tiebreak, then truncated to `limit`.
    pub fn rank(
        &self,
        requester: &RequesterRecord,
        candidates: Vec<CandidateRecord>,
        weights: Option<WeightProfile>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let weights = weights.unwrap_or(self.weights);

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let result = score(requester, &candidate, &weights);
                if result.overall_score < self.min_score {
                    return None;
                }

                let distance = match (&requester.location, &candidate.location) {
                    (Some(a), Some(b)) => Some(distance_km(a, b)),
                    _ => None,
                };

                Some(RankedCandidate {
                    candidate_id: candidate.id,
                    distance_km: distance,
                    score: result,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .overall_score
                .cmp(&a.score.overall_score)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });

        ranked.truncate(limit);

        RankResult {
            ranked,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
