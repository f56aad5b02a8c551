use crate::models::{Campaign, Creator};

const MIN_ENGAGEMENT_RATE: f64 = 0.02;
const MAX_ENGAGEMENT_RATE: f64 = 0.15;

const MIN_WATCH_TIME: f64 = 3.0;
const MAX_WATCH_TIME: f64 = 15.0;

/// Clamp a value to `[min, max]`
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Fraction of the campaign's niches the creator covers (0-1)
///
/// A campaign with no niches scores 0 - absence of requirements is never
/// rewarded.
#[inline]
pub fn score_niche_match(campaign: &Campaign, creator: &Creator) -> f64 {
    if campaign.niches.is_empty() {
        return 0.0;
    }

    let overlap = campaign
        .niches
        .iter()
        .filter(|n| creator.niches.contains(n))
        .count();

    overlap as f64 / campaign.niches.len() as f64
}

/// Audience-country score: 1 if the target country dominates the creator's
/// audience, 0.6 if it appears anywhere else in the list, 0 otherwise
#[inline]
pub fn score_audience_country_match(campaign: &Campaign, creator: &Creator) -> f64 {
    let target = &campaign.target_country;
    if target.is_empty() {
        return 0.0;
    }

    let top_countries = &creator.audience.top_countries;
    match top_countries.first() {
        None => 0.0,
        Some(first) if first == target => 1.0,
        Some(_) if top_countries.contains(target) => 0.6,
        Some(_) => 0.0,
    }
}

/// Engagement rate rescaled linearly from [0.02, 0.15] onto [0, 1]
#[inline]
pub fn score_engagement(creator: &Creator) -> f64 {
    let rate = clamp(creator.engagement_rate, MIN_ENGAGEMENT_RATE, MAX_ENGAGEMENT_RATE);
    (rate - MIN_ENGAGEMENT_RATE) / (MAX_ENGAGEMENT_RATE - MIN_ENGAGEMENT_RATE)
}

/// Watch-time score centred on 0.6 at exact parity with the campaign target
///
/// Both values are clamped to the [3, 15] second band first. Up to 5 seconds
/// of excess raises the score toward 1.0; up to 5 seconds of deficit lowers
/// it toward 0.0. Beyond 5 seconds either way has no further effect.
#[inline]
pub fn score_watch_time(campaign: &Campaign, creator: &Creator) -> f64 {
    let target = clamp(campaign.min_avg_watch_time, MIN_WATCH_TIME, MAX_WATCH_TIME);
    let watch = clamp(creator.avg_watch_time, MIN_WATCH_TIME, MAX_WATCH_TIME);

    if watch >= target {
        let over = clamp(watch - target, 0.0, 5.0);
        return 0.6 + (over / 5.0) * 0.4;
    }

    let under = clamp(target - watch, 0.0, 5.0);
    0.6 - (under / 5.0) * 0.6
}

/// Follower-count fit against the campaign's budget band
///
/// In-band followers score 1. Out-of-band followers decay against a
/// tolerance of 50% of the nearest bound and are capped at 0.7. A
/// degenerate band (min >= max) or non-positive follower count scores 0.
#[inline]
pub fn score_follower_fit(campaign: &Campaign, creator: &Creator) -> f64 {
    let min = campaign.budget_range.min_followers;
    let max = campaign.budget_range.max_followers;
    let followers = creator.followers;

    if min >= max || followers <= 0 {
        return 0.0;
    }

    if followers >= min && followers <= max {
        return 1.0;
    }

    let (distance, tolerance) = if followers < min {
        ((min - followers) as f64, min as f64 * 0.5)
    } else {
        ((followers - max) as f64, max as f64 * 0.5)
    };

    let ratio = clamp(1.0 - distance / tolerance, 0.0, 1.0);
    ratio * 0.7
}

/// 1 when the creator's primary hook type is one the campaign prefers
#[inline]
pub fn score_hook_match(campaign: &Campaign, creator: &Creator) -> f64 {
    if campaign.preferred_hook_types.is_empty() {
        return 0.0;
    }
    if campaign
        .preferred_hook_types
        .contains(&creator.primary_hook_type)
    {
        return 1.0;
    }
    0.0
}

/// Brand-safety penalty in [-1, 0]
///
/// -0.4 when the creator carries any safety flag; a further -0.3 (at most
/// once) when any of the campaign's blocked terms appears as a substring
/// of the creator's recent captions, case-folded.
pub fn score_brand_safety(campaign: &Campaign, creator: &Creator) -> f64 {
    let mut penalty = 0.0;

    if !creator.brand_safety_flags.is_empty() {
        penalty -= 0.4;
    }

    if !campaign.do_not_use_words.is_empty() && !creator.last_posts.is_empty() {
        let blocked: Vec<String> = campaign
            .do_not_use_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let text = creator
            .last_posts
            .iter()
            .map(|p| p.caption.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        if blocked.iter().any(|term| text.contains(term.as_str())) {
            penalty -= 0.3;
        }
    }

    clamp(penalty, -1.0, 0.0)
}
