// Core algorithm exports
pub mod factors;
pub mod ranker;
pub mod scoring;

pub use factors::{
    score_audience_country_match, score_brand_safety, score_engagement, score_follower_fit,
    score_hook_match, score_niche_match, score_watch_time,
};
pub use ranker::{RankResult, Ranker};
pub use scoring::{calculate_creator_score, calculate_score_breakdown, WEIGHT_TOTAL};
