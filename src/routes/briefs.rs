use crate::models::{ErrorResponse, GenerateBriefRequest, GenerateBriefResponse};
use crate::routes::matching::AppState;
use crate::services::BriefError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure brief routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/briefs/generate", web::post().to(generate_brief));
}

/// Generate brief endpoint
///
/// POST /api/v1/briefs/generate
///
/// Request body:
/// ```json
/// {
///   "campaignId": "string",
///   "creatorId": "string"
/// }
/// ```
async fn generate_brief(
    state: web::Data<AppState>,
    req: web::Json<GenerateBriefRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Generating brief for campaign {} and creator {}",
        req.campaign_id,
        req.creator_id
    );

    match state.briefs.generate(&req.campaign_id, &req.creator_id).await {
        Ok(outcome) => HttpResponse::Ok().json(GenerateBriefResponse {
            brief: outcome.brief,
            cached: outcome.cached,
        }),
        Err(e @ (BriefError::CampaignNotFound(_) | BriefError::CreatorNotFound(_))) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
        Err(e) => {
            tracing::error!(
                "Brief generation failed for ({}, {}): {}",
                req.campaign_id,
                req.creator_id,
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate brief".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
