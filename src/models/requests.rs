use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank creators for a campaign
///
/// A missing `limit` falls back to the configured default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCreatorsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "campaign_id", rename = "campaignId")]
    pub campaign_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to generate an outreach brief for a (campaign, creator) pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateBriefRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "campaign_id", rename = "campaignId")]
    pub campaign_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "creator_id", rename = "creatorId")]
    pub creator_id: String,
}
