use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateRecord, RequesterRecord, WeightProfile};

/// Request to score a single requester-candidate pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub requester: RequesterRecord,
    #[validate(nested)]
    pub candidate: CandidateRecord,
    #[serde(default)]
    pub weights: Option<WeightProfile>,
}

/// Request to rank a list of candidates for one requester
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub requester: RequesterRecord,
    #[validate(nested)]
    pub candidates: Vec<CandidateRecord>,
    #[serde(default)]
    pub weights: Option<WeightProfile>,
    /// Falls back to the configured matching.default_limit when omitted
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}
