use crate::core::factors::{
    score_audience_country_match, score_brand_safety, score_engagement, score_follower_fit,
    score_hook_match, score_niche_match, score_watch_time,
};
use crate::models::{Campaign, Creator, MatchingWeights, RankedCreatorScore, ScoreBreakdown};

/// Sum of the six positive weights; the raw total is normalized against
/// this, so the brand-safety penalty can only pull a score down, never
/// stretch the scale
pub const WEIGHT_TOTAL: f64 = 100.0;

/// Compute the seven weighted factor contributions for one (campaign, creator) pair
///
/// Each contribution is the factor's unit score multiplied by its weight.
/// The brand-safety unit score is negative, so its contribution is too.
pub fn calculate_score_breakdown(
    campaign: &Campaign,
    creator: &Creator,
    weights: &MatchingWeights,
) -> ScoreBreakdown {
    let niche = score_niche_match(campaign, creator);
    let audience = score_audience_country_match(campaign, creator);
    let engagement = score_engagement(creator);
    let watch_time = score_watch_time(campaign, creator);
    let follower_fit = score_follower_fit(campaign, creator);
    let hook = score_hook_match(campaign, creator);
    let brand_penalty = score_brand_safety(campaign, creator);

    ScoreBreakdown {
        niche_match: niche * weights.niche_match,
        audience_country_match: audience * weights.audience_country_match,
        engagement_score: engagement * weights.engagement,
        watch_time_score: watch_time * weights.watch_time,
        follower_fit_score: follower_fit * weights.follower_fit,
        hook_match: hook * weights.hook_match,
        brand_safety_penalty: brand_penalty * weights.brand_safety,
    }
}

/// Score one creator against a campaign
///
/// The total is the sum of the weighted contributions normalized onto
/// [0, 100]; the clamp only guards against the brand-safety penalty pushing
/// the sum below zero.
pub fn calculate_creator_score(
    campaign: &Campaign,
    creator: Creator,
    weights: &MatchingWeights,
) -> RankedCreatorScore {
    let breakdown = calculate_score_breakdown(campaign, &creator, weights);

    let raw_total = breakdown.niche_match
        + breakdown.audience_country_match
        + breakdown.engagement_score
        + breakdown.watch_time_score
        + breakdown.follower_fit_score
        + breakdown.hook_match
        + breakdown.brand_safety_penalty;

    let normalized = clamp_score((raw_total / WEIGHT_TOTAL) * 100.0);

    RankedCreatorScore {
        creator_id: creator.id.clone(),
        creator,
        total_score: normalized,
        score_breakdown: breakdown,
    }
}

#[inline]
fn clamp_score(value: f64) -> f64 {
    if value < 0.0 {
        return 0.0;
    }
    if value > 100.0 {
        return 100.0;
    }
    value
}
