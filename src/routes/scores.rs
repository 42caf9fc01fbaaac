use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{scoring, Ranker};
use crate::models::{
    ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/score", web::post().to(score_pair))
        .route("/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single requester-candidate pair
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "requester": { "id": "...", "requiredSkills": ["plumbing"], ... },
///   "candidate": { "id": "...", "skills": ["plumbing"], ... },
///   "weights": { "skillMatch": 0.3, ... }
/// }
/// ```
async fn score_pair(req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let weights = req.weights.unwrap_or_default();
    let result = scoring::score(&req.requester, &req.candidate, &weights);

    tracing::debug!(
        "Scored candidate {} for requester {}: {}",
        req.candidate.id,
        req.requester.id,
        result.overall_score
    );

    HttpResponse::Ok().json(ScoreResponse {
        candidate_id: req.candidate.id.clone(),
        score: result,
    })
}

/// Rank a batch of candidates for one requester
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "requester": { "id": "...", ... },
///   "candidates": [ { "id": "...", ... } ],
///   "weights": { ... },
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to prevent oversized responses
    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);
    let req = req.into_inner();

    // Correlation id for log lines belonging to this ranking pass
    let request_id = uuid::Uuid::new_v4();

    tracing::info!(
        "[{}] Ranking {} candidates for requester {}, limit {}",
        request_id,
        req.candidates.len(),
        req.requester.id,
        limit
    );

    let result = state
        .ranker
        .rank(&req.requester, req.candidates, req.weights, limit);

    tracing::info!(
        "[{}] Returning {} ranked candidates for requester {} (from {} candidates)",
        request_id,
        result.ranked.len(),
        req.requester.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RankResponse {
        ranked: result.ranked,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
