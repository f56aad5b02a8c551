use crate::models::domain::{BriefResponse, CampaignListItem, RankedCreatorScore};
use serde::{Deserialize, Serialize};

/// Response for the rank creators endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCreatorsResponse {
    pub ranked: Vec<RankedCreatorScore>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the campaign list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<CampaignListItem>,
}

/// Response for the brief generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBriefResponse {
    pub brief: BriefResponse,
    /// True when the brief was served from the store or cache
    pub cached: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
