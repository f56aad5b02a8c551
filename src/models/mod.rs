// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BriefRecord, BriefResponse, BudgetRange, Campaign, CampaignListItem, Creator, CreatorAudience,
    CreatorPost, GenderSplit, MatchingWeights, RankedCreatorScore, ScoreBreakdown,
};
pub use requests::{GenerateBriefRequest, RankCreatorsRequest};
pub use responses::{
    CampaignListResponse, ErrorResponse, GenerateBriefResponse, HealthResponse,
    RankCreatorsResponse,
};
