use crate::core::{distance::distance_km, skills::skill_match};
use crate::models::{
    CandidateRecord, DimensionScores, RequesterRecord, ScoreResult, UrgencyLevel, WeightProfile,
};

/// Distance at which the location score reaches zero
const MAX_DISTANCE_KM: f64 = 50.0;

/// Maximum rating a specialist can hold
const MAX_RATING: f64 = 5.0;

/// Completed-job count at which the experience factor saturates
const EXPERIENCE_SATURATION_JOBS: f64 = 20.0;

/// Response window (hours) over which the response score decays to zero
const RESPONSE_WINDOW_HOURS: f64 = 24.0;

/// Placeholder availability score - no calendar data exists yet
const AVAILABILITY_PLACEHOLDER: f64 = 0.7;

/// Neutral score returned when a dimension has no data to work with
const NEUTRAL_SCORE: f64 = 0.5;

/// Score a requester against a candidate with the given weight profile
///
/// Every dimension lands in [0, 1] before weighting and the weighted sum is
/// scaled to [0, 100] and clamped. Missing optional fields collapse to the
/// documented per-dimension defaults rather than failing, so a batch ranking
/// pass never aborts on sparse records.
pub fn score(
    requester: &RequesterRecord,
    candidate: &CandidateRecord,
    weights: &WeightProfile,
) -> ScoreResult {
    let distance = match (&requester.location, &candidate.location) {
        (Some(a), Some(b)) => Some(distance_km(a, b)),
        _ => None,
    };

    let dimensions = DimensionScores {
        skill_match: clamp01(skill_match(&requester.required_skills, &candidate.skills)),
        location_proximity: clamp01(location_proximity_score(distance)),
        reputation: clamp01(reputation_score(candidate)),
        price_match: clamp01(price_match_score(requester, candidate)),
        availability: clamp01(availability_score()),
        urgency: clamp01(urgency_score(requester, candidate)),
    };

    let weighted = dimensions.skill_match * weights.skill_match
        + dimensions.location_proximity * weights.location_proximity
        + dimensions.reputation * weights.reputation
        + dimensions.price_match * weights.price_match
        + dimensions.availability * weights.availability
        + dimensions.urgency * weights.urgency;

    let overall_score = (weighted * 100.0).round().clamp(0.0, 100.0) as u8;

    let explanations = build_explanations(requester, candidate, &dimensions, distance);

    ScoreResult {
        overall_score,
        dimension_scores: dimensions,
        explanations,
    }
}

/// Location score (0-1), linear decay to zero at MAX_DISTANCE_KM
///
/// Missing location on either side scores neutral.
#[inline]
fn location_proximity_score(distance: Option<f64>) -> f64 {
    match distance {
        Some(d) => (1.0 - d / MAX_DISTANCE_KM).max(0.0),
        None => NEUTRAL_SCORE,
    }
}

/// Reputation score (0-1) from rating and completed-job experience
///
/// Absent rating and job count both default to 0, not to the neutral
/// midpoint - a specialist with no track record scores 0 here.
#[inline]
fn reputation_score(candidate: &CandidateRecord) -> f64 {
    let rating_norm = candidate.rating.unwrap_or(0.0) / MAX_RATING;
    let experience_factor =
        (candidate.completed_jobs.unwrap_or(0) as f64 / EXPERIENCE_SATURATION_JOBS).min(1.0);

    0.7 * rating_norm + 0.3 * experience_factor
}

/// Importance factor for the reputation dimension
///
/// Verified-payment requesters weigh reputation more heavily. Currently
/// surfaced for explanation text only and not folded into the reputation
/// score itself, matching the shipped scoring behavior.
/// TODO: fold this into the reputation weighting once product decides
/// whether the omission was intentional.
#[inline]
pub fn reputation_importance(requester: &RequesterRecord) -> f64 {
    if requester.is_verified_payment {
        0.8
    } else {
        0.5
    }
}

/// Price fit score (0-1) between the requester's budget and the
/// candidate's rate
#[inline]
fn price_match_score(requester: &RequesterRecord, candidate: &CandidateRecord) -> f64 {
    let has_budget_info = requester.budget_min.is_some() || requester.budget_max.is_some();
    if !has_budget_info && !candidate.has_rate_info() {
        return NEUTRAL_SCORE;
    }

    let budget_min = requester.budget_min.unwrap_or(0.0);
    let budget_max = requester.budget_max.unwrap_or(budget_min * 2.0);
    let rate = candidate.effective_rate();

    if rate == 0.0 {
        return NEUTRAL_SCORE;
    }

    if rate >= budget_min && rate <= budget_max {
        1.0
    } else if rate < budget_min {
        // Suspiciously cheap: partial credit, capped below 0.8
        0.5 + (rate / budget_min) * 0.3
    } else {
        let over_budget_ratio = (rate - budget_max) / budget_max;
        (1.0 - over_budget_ratio).max(0.0)
    }
}

/// Availability score - fixed placeholder until calendar data lands
#[inline]
fn availability_score() -> f64 {
    AVAILABILITY_PLACEHOLDER
}

/// Urgency fit score (0-1): how well the candidate's response time
/// serves the requester's urgency level
#[inline]
fn urgency_score(requester: &RequesterRecord, candidate: &CandidateRecord) -> f64 {
    let urgency_factor = requester.urgency_level.factor();

    match candidate.response_time_minutes {
        Some(minutes) => {
            let hours = minutes / 60.0;
            let response_score = (1.0 - hours / RESPONSE_WINDOW_HOURS).max(0.0);
            urgency_factor * response_score
        }
        None => NEUTRAL_SCORE,
    }
}

/// Build human-readable explanation lines in fixed order:
/// skill, location, reputation, price, urgency
///
/// Dimensions outside their thresholds stay silent rather than emitting
/// a placeholder line.
fn build_explanations(
    requester: &RequesterRecord,
    candidate: &CandidateRecord,
    dimensions: &DimensionScores,
    distance: Option<f64>,
) -> Vec<String> {
    let mut explanations = Vec::new();

    let category = requester.category.as_deref().unwrap_or("this job");
    if dimensions.skill_match > 0.8 {
        explanations.push(format!("Strong skills match for {}", category));
    } else if dimensions.skill_match > 0.5 {
        explanations.push(format!("Good skills match for {}", category));
    } else if dimensions.skill_match > 0.0 {
        explanations.push(format!("Some relevant skills for {}", category));
    }

    match distance {
        Some(d) if d < 2.0 => explanations.push("Very close to the job location".to_string()),
        Some(d) if d < 10.0 => explanations.push("Near the job location".to_string()),
        Some(d) => explanations.push(format!("{:.1} km from job location", d)),
        None => explanations.push("Location information not available".to_string()),
    }

    if dimensions.reputation > 0.8 {
        if let Some(rating) = candidate.rating {
            explanations.push(format!("Highly rated specialist ({}/5)", rating));
        }
    } else if dimensions.reputation > 0.6 {
        explanations.push("Well-rated specialist".to_string());
    }

    if dimensions.price_match > 0.9 {
        explanations.push("Perfect price match".to_string());
    } else if dimensions.price_match > 0.7 {
        explanations.push("Good price match".to_string());
    } else if dimensions.price_match < 0.3 {
        explanations.push("Price may be outside your budget".to_string());
    }

    if requester.urgency_level == UrgencyLevel::High && dimensions.urgency > 0.7 {
        explanations.push("Quick response time for your urgent job".to_string());
    }

    explanations
}

#[inline]
fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn empty_requester() -> RequesterRecord {
        RequesterRecord {
            id: "req_1".to_string(),
            required_skills: vec![],
            category: None,
            location: None,
            budget_min: None,
            budget_max: None,
            urgency_level: UrgencyLevel::Low,
            is_verified_payment: false,
        }
    }

    fn empty_candidate() -> CandidateRecord {
        CandidateRecord {
            id: "cand_1".to_string(),
            skills: vec![],
            location: None,
            rating: None,
            completed_jobs: None,
            hourly_rate: None,
            rate_range: None,
            response_time_minutes: None,
        }
    }

    #[test]
    fn test_neutral_defaults() {
        let result = score(&empty_requester(), &empty_candidate(), &WeightProfile::default());
        let d = result.dimension_scores;

        assert_eq!(d.skill_match, 0.5);
        assert_eq!(d.location_proximity, 0.5);
        // Reputation's absent case is 0, not the neutral midpoint
        assert_eq!(d.reputation, 0.0);
        assert_eq!(d.price_match, 0.5);
        assert_eq!(d.availability, 0.7);
        assert_eq!(d.urgency, 0.5);
    }

    #[test]
    fn test_location_score_linear_decay() {
        assert_eq!(location_proximity_score(Some(0.0)), 1.0);
        assert!((location_proximity_score(Some(25.0)) - 0.5).abs() < 1e-9);
        assert_eq!(location_proximity_score(Some(50.0)), 0.0);
        assert_eq!(location_proximity_score(Some(120.0)), 0.0);
        assert_eq!(location_proximity_score(None), 0.5);
    }

    #[test]
    fn test_reputation_score() {
        let mut candidate = empty_candidate();
        candidate.rating = Some(4.8);
        candidate.completed_jobs = Some(25);

        // 0.7 * 0.96 + 0.3 * min(1, 25/20)
        let expected = 0.7 * 0.96 + 0.3;
        assert!((reputation_score(&candidate) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reputation_importance_unused_in_score() {
        let mut requester = empty_requester();
        let candidate = empty_candidate();

        requester.is_verified_payment = true;
        let verified = score(&requester, &candidate, &WeightProfile::default());
        requester.is_verified_payment = false;
        let unverified = score(&requester, &candidate, &WeightProfile::default());

        assert_eq!(reputation_importance(&RequesterRecord {
            is_verified_payment: true,
            ..empty_requester()
        }), 0.8);
        assert_eq!(reputation_importance(&empty_requester()), 0.5);
        // Importance does not feed back into the number
        assert_eq!(verified.overall_score, unverified.overall_score);
    }

    #[test]
    fn test_price_in_budget_is_exact_one() {
        let mut requester = empty_requester();
        requester.budget_min = Some(50.0);
        requester.budget_max = Some(100.0);

        let mut candidate = empty_candidate();
        for rate in [50.0, 75.0, 100.0] {
            candidate.hourly_rate = Some(rate);
            assert_eq!(price_match_score(&requester, &candidate), 1.0);
        }
    }

    #[test]
    fn test_price_below_budget() {
        let mut requester = empty_requester();
        requester.budget_min = Some(50.0);
        requester.budget_max = Some(100.0);

        let mut candidate = empty_candidate();
        candidate.hourly_rate = Some(25.0);

        // 0.5 + (25/50)*0.3
        assert!((price_match_score(&requester, &candidate) - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_price_over_budget() {
        let mut requester = empty_requester();
        requester.budget_min = Some(50.0);
        requester.budget_max = Some(100.0);

        let mut candidate = empty_candidate();
        candidate.hourly_rate = Some(150.0);
        // over by 50%: 1 - 0.5
        assert!((price_match_score(&requester, &candidate) - 0.5).abs() < 1e-9);

        candidate.hourly_rate = Some(300.0);
        // over by 200%, floored at 0
        assert_eq!(price_match_score(&requester, &candidate), 0.0);
    }

    #[test]
    fn test_price_budget_max_derived_from_min() {
        let mut requester = empty_requester();
        requester.budget_min = Some(40.0);

        let mut candidate = empty_candidate();
        candidate.hourly_rate = Some(80.0);

        // Derived max = 40 * 2 = 80, rate sits at the top of the band
        assert_eq!(price_match_score(&requester, &candidate), 1.0);
    }

    #[test]
    fn test_price_rate_range_fallback() {
        let mut requester = empty_requester();
        requester.budget_min = Some(50.0);
        requester.budget_max = Some(100.0);

        let mut candidate = empty_candidate();
        candidate.rate_range = Some(crate::models::RateRange { min: 60.0, max: 90.0 });

        assert_eq!(price_match_score(&requester, &candidate), 1.0);
    }

    #[test]
    fn test_urgency_scales_with_response_time() {
        let mut requester = empty_requester();
        requester.urgency_level = UrgencyLevel::High;

        let mut candidate = empty_candidate();
        candidate.response_time_minutes = Some(30.0);

        let expected = 0.9 * (1.0 - 0.5 / 24.0);
        assert!((urgency_score(&requester, &candidate) - expected).abs() < 1e-9);

        // Glacial responders bottom out at 0
        candidate.response_time_minutes = Some(48.0 * 60.0);
        assert_eq!(urgency_score(&requester, &candidate), 0.0);

        // No response data falls back to neutral regardless of urgency
        candidate.response_time_minutes = None;
        assert_eq!(urgency_score(&requester, &candidate), 0.5);
    }

    #[test]
    fn test_urgency_factor_per_level() {
        assert_eq!(UrgencyLevel::High.factor(), 0.9);
        assert_eq!(UrgencyLevel::Medium.factor(), 0.6);
        assert_eq!(UrgencyLevel::Low.factor(), 0.3);
    }

    #[test]
    fn test_explanation_order_and_thresholds() {
        let requester = RequesterRecord {
            id: "req_1".to_string(),
            required_skills: vec!["plumbing".to_string()],
            category: Some("plumbing".to_string()),
            location: Some(GeoPoint { lat: 40.0, lng: -74.0 }),
            budget_min: Some(50.0),
            budget_max: Some(100.0),
            urgency_level: UrgencyLevel::High,
            is_verified_payment: true,
        };
        let candidate = CandidateRecord {
            id: "cand_1".to_string(),
            skills: vec!["plumbing".to_string(), "electrical".to_string()],
            location: Some(GeoPoint { lat: 40.01, lng: -74.01 }),
            rating: Some(4.8),
            completed_jobs: Some(25),
            hourly_rate: Some(75.0),
            rate_range: None,
            response_time_minutes: Some(30.0),
        };

        let result = score(&requester, &candidate, &WeightProfile::default());

        assert_eq!(
            result.explanations,
            vec![
                "Good skills match for plumbing".to_string(),
                "Very close to the job location".to_string(),
                "Highly rated specialist (4.8/5)".to_string(),
                "Perfect price match".to_string(),
                "Quick response time for your urgent job".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_location_explained() {
        let result = score(&empty_requester(), &empty_candidate(), &WeightProfile::default());
        assert!(result
            .explanations
            .contains(&"Location information not available".to_string()));
    }

    #[test]
    fn test_overall_score_in_range() {
        let result = score(&empty_requester(), &empty_candidate(), &WeightProfile::default());
        assert!(result.overall_score <= 100);
    }
}
