use serde::{Deserialize, Serialize};

/// Inclusive follower band derived from the campaign budget
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(rename = "minFollowers")]
    pub min_followers: i64,
    #[serde(rename = "maxFollowers")]
    pub max_followers: i64,
}

/// Campaign brief a brand wants creators matched against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub brand: String,
    pub objective: String,
    #[serde(rename = "targetCountry")]
    pub target_country: String,
    #[serde(rename = "targetGender")]
    pub target_gender: String,
    #[serde(rename = "targetAgeRange")]
    pub target_age_range: String,
    #[serde(default)]
    pub niches: Vec<String>,
    #[serde(rename = "preferredHookTypes", default)]
    pub preferred_hook_types: Vec<String>,
    #[serde(rename = "minAvgWatchTime")]
    pub min_avg_watch_time: f64,
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    pub tone: String,
    #[serde(rename = "doNotUseWords", default)]
    pub do_not_use_words: Vec<String>,
}

/// Slim campaign row for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignListItem {
    pub id: String,
    pub brand: String,
    pub objective: String,
    #[serde(rename = "targetCountry")]
    pub target_country: String,
}

/// Audience demographics reported for a creator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorAudience {
    /// Country codes ordered by audience share, most dominant first
    #[serde(rename = "topCountries", default)]
    pub top_countries: Vec<String>,
    #[serde(rename = "genderSplit")]
    pub gender_split: GenderSplit,
    #[serde(rename = "topAgeRange")]
    pub top_age_range: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenderSplit {
    pub female: f64,
    pub male: f64,
}

/// A recent post with its free-text caption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorPost {
    pub caption: String,
    pub views: i64,
    pub likes: i64,
}

/// Creator profile with audience and content stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub username: String,
    pub country: String,
    #[serde(default)]
    pub niches: Vec<String>,
    pub followers: i64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    #[serde(rename = "avgWatchTime")]
    pub avg_watch_time: f64,
    #[serde(rename = "contentStyle")]
    pub content_style: String,
    #[serde(rename = "primaryHookType")]
    pub primary_hook_type: String,
    #[serde(rename = "brandSafetyFlags", default)]
    pub brand_safety_flags: Vec<String>,
    pub audience: CreatorAudience,
    #[serde(rename = "lastPosts", default)]
    pub last_posts: Vec<CreatorPost>,
}

/// Weighted contribution of each factor: `[0, weight]` for six factors,
/// `[-weight, 0]` for the brand-safety penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "nicheMatch")]
    pub niche_match: f64,
    #[serde(rename = "audienceCountryMatch")]
    pub audience_country_match: f64,
    #[serde(rename = "engagementScore")]
    pub engagement_score: f64,
    #[serde(rename = "watchTimeScore")]
    pub watch_time_score: f64,
    #[serde(rename = "followerFitScore")]
    pub follower_fit_score: f64,
    #[serde(rename = "hookMatch")]
    pub hook_match: f64,
    #[serde(rename = "brandSafetyPenalty")]
    pub brand_safety_penalty: f64,
}

/// One scored creator, ready for ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCreatorScore {
    #[serde(rename = "creatorId")]
    pub creator_id: String,
    pub creator: Creator,
    /// Normalized score in [0, 100]
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
}

/// Per-factor weights. The six positive weights sum to 100; the
/// brand-safety weight bounds the penalty contribution in [-10, 0]
#[derive(Debug, Clone, Copy)]
pub struct MatchingWeights {
    pub niche_match: f64,
    pub audience_country_match: f64,
    pub engagement: f64,
    pub watch_time: f64,
    pub follower_fit: f64,
    pub hook_match: f64,
    pub brand_safety: f64,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        Self {
            niche_match: 25.0,
            audience_country_match: 20.0,
            engagement: 15.0,
            watch_time: 15.0,
            follower_fit: 15.0,
            hook_match: 10.0,
            brand_safety: 10.0,
        }
    }
}

/// Structured outreach brief produced by the LLM
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
pub struct BriefResponse {
    #[serde(rename = "outreachMessage")]
    pub outreach_message: String,
    #[validate(length(min = 5))]
    #[serde(rename = "contentIdeas")]
    pub content_ideas: Vec<String>,
    #[validate(length(min = 3))]
    #[serde(rename = "hookSuggestions")]
    pub hook_suggestions: Vec<String>,
    #[serde(rename = "keyTalkingPoints", default, skip_serializing_if = "Option::is_none")]
    pub key_talking_points: Option<Vec<String>>,
    #[serde(
        rename = "suggestedPostingSchedule",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_posting_schedule: Option<String>,
}

/// Persisted brief with its store metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefRecord {
    pub id: String,
    #[serde(rename = "campaignId")]
    pub campaign_id: String,
    #[serde(rename = "creatorId")]
    pub creator_id: String,
    #[serde(rename = "responseJson")]
    pub response_json: BriefResponse,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
