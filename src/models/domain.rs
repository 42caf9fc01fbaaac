use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// How quickly a requester needs the job done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    /// Urgency factor used by the urgency dimension
    pub fn factor(&self) -> f64 {
        match self {
            UrgencyLevel::High => 0.9,
            UrgencyLevel::Medium => 0.6,
            UrgencyLevel::Low => 0.3,
        }
    }
}

/// A specialist's advertised rate band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

/// Job-side record seeking a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequesterRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(rename = "budgetMin", default)]
    pub budget_min: Option<f64>,
    #[serde(rename = "budgetMax", default)]
    pub budget_max: Option<f64>,
    #[serde(rename = "urgencyLevel", default)]
    pub urgency_level: UrgencyLevel,
    #[serde(rename = "isVerifiedPayment", default)]
    pub is_verified_payment: bool,
}

/// Specialist-side record being evaluated for fit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "completedJobs", default)]
    pub completed_jobs: Option<u32>,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "rateRange", default)]
    pub rate_range: Option<RateRange>,
    #[serde(rename = "responseTimeMinutes", default)]
    pub response_time_minutes: Option<f64>,
}

impl CandidateRecord {
    /// Effective rate used by the price dimension: hourly rate first,
    /// falling back to the bottom of the advertised range
    pub fn effective_rate(&self) -> f64 {
        self.hourly_rate
            .or(self.rate_range.map(|r| r.min))
            .unwrap_or(0.0)
    }

    /// Whether the record carries any rate information at all
    pub fn has_rate_info(&self) -> bool {
        self.hourly_rate.is_some() || self.rate_range.is_some()
    }
}

/// Relative importance of each compatibility dimension
///
/// Weights do not need to sum to 1.0; the aggregate is clamped after
/// weighting. A weight of 0 removes that dimension's influence entirely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightProfile {
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "locationProximity")]
    pub location_proximity: f64,
    pub reputation: f64,
    #[serde(rename = "priceMatch")]
    pub price_match: f64,
    pub availability: f64,
    pub urgency: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            skill_match: 0.30,
            location_proximity: 0.20,
            reputation: 0.15,
            price_match: 0.15,
            availability: 0.10,
            urgency: 0.10,
        }
    }
}

/// Per-dimension compatibility scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "locationProximity")]
    pub location_proximity: f64,
    pub reputation: f64,
    #[serde(rename = "priceMatch")]
    pub price_match: f64,
    pub availability: f64,
    pub urgency: f64,
}

/// Result of scoring one requester against one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted aggregate, clamped to [0, 100]
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    #[serde(rename = "dimensionScores")]
    pub dimension_scores: DimensionScores,
    pub explanations: Vec<String>,
}

/// One entry in a ranked candidate list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    pub score: ScoreResult,
}
