//! JobMate Match - compatibility scoring service for the JobMate marketplace
//!
//! This library provides the core job-specialist compatibility scorer: a
//! deterministic, weighted, multi-dimension engine that produces an overall
//! score, a per-dimension breakdown, and human-readable explanations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{distance_km, score, skill_match, RankResult, Ranker};
pub use models::{
    CandidateRecord, DimensionScores, GeoPoint, RankedCandidate, RequesterRecord, ScoreResult,
    UrgencyLevel, WeightProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let a = GeoPoint { lat: 40.7128, lng: -74.0060 };
        let b = GeoPoint { lat: 40.72, lng: -74.01 };
        assert!(distance_km(&a, &b) > 0.0);
    }
}
