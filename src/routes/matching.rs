use crate::core::Ranker;
use crate::models::{
    CampaignListResponse, ErrorResponse, HealthResponse, RankCreatorsRequest, RankCreatorsResponse,
};
use crate::services::{BriefService, SupabaseClient, SupabaseError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub briefs: Arc<BriefService>,
    pub ranker: Ranker,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Resolve the effective rank limit: fall back to the configured default
/// when the request leaves it out, and cap at the configured maximum
fn resolve_limit(requested: Option<u16>, default_limit: u16, max_limit: u16) -> usize {
    requested.unwrap_or(default_limit).min(max_limit) as usize
}

/// Configure campaign and ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/campaigns", web::get().to(list_campaigns))
        .route("/campaigns/{campaign_id}", web::get().to(get_campaign))
        .route("/matches/rank", web::post().to(rank_creators));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List campaigns endpoint
///
/// GET /api/v1/campaigns
async fn list_campaigns(state: web::Data<AppState>) -> impl Responder {
    match state.supabase.list_campaigns().await {
        Ok(campaigns) => HttpResponse::Ok().json(CampaignListResponse { campaigns }),
        Err(e) => {
            tracing::error!("Failed to list campaigns: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list campaigns".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get a single campaign endpoint
///
/// GET /api/v1/campaigns/{campaign_id}
async fn get_campaign(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let campaign_id = path.into_inner();

    match state.supabase.get_campaign(&campaign_id).await {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(SupabaseError::NotFound(msg)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Campaign not found".to_string(),
            message: msg,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch campaign {}: {}", campaign_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch campaign".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Rank creators endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "campaignId": "string",
///   "limit": 20
/// }
/// ```
async fn rank_creators(
    state: web::Data<AppState>,
    req: web::Json<RankCreatorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_creators request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let campaign_id = &req.campaign_id;
    let limit = resolve_limit(req.limit, state.default_limit, state.max_limit);

    tracing::info!("Ranking creators for campaign: {}, limit: {}", campaign_id, limit);

    let campaign = match state.supabase.get_campaign(campaign_id).await {
        Ok(campaign) => campaign,
        Err(SupabaseError::NotFound(msg)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Campaign not found".to_string(),
                message: msg,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch campaign {}: {}", campaign_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch campaign".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let creators = match state.supabase.get_all_creators().await {
        Ok(creators) => creators,
        Err(e) => {
            tracing::error!("Failed to fetch creators: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch creators".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Scoring {} creators for campaign {}", creators.len(), campaign_id);

    let result = state.ranker.rank(&campaign, creators, limit);

    tracing::info!(
        "Returning {} ranked creators for campaign {} (from {} candidates)",
        result.ranked.len(),
        campaign_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RankCreatorsResponse {
        ranked: result.ranked,
        total_candidates: result.total_candidates,
    })
}
