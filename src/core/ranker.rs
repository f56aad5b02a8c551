use crate::core::scoring::{calculate_creator_score, calculate_score_breakdown};
use crate::models::{Campaign, Creator, MatchingWeights, RankedCreatorScore, ScoreBreakdown};
use std::cmp::Ordering;

/// Result of ranking a candidate set
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<RankedCreatorScore>,
    pub total_candidates: usize,
}

/// Scores every creator against a campaign and produces a deterministic,
/// length-bounded ordering
///
/// # Ordering
/// 1. `totalScore` descending
/// 2. engagement contribution descending
/// 3. watch-time contribution descending
/// 4. creator id ascending
///
/// The id tie-break makes the ordering total, so identical inputs always
/// produce identical output.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: MatchingWeights,
}

impl Ranker {
    pub fn new(weights: MatchingWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchingWeights::default(),
        }
    }

    /// Score a single (campaign, creator) pair
    pub fn score(&self, campaign: &Campaign, creator: Creator) -> RankedCreatorScore {
        calculate_creator_score(campaign, creator, &self.weights)
    }

    /// The seven weighted contributions only, without aggregation
    pub fn breakdown(&self, campaign: &Campaign, creator: &Creator) -> ScoreBreakdown {
        calculate_score_breakdown(campaign, creator, &self.weights)
    }

    /// Rank all creators for a campaign, truncated to `limit` entries
    ///
    /// Every creator is scored before truncation so ties are resolved over
    /// the full set. An empty candidate set or a zero limit yields an empty
    /// result.
    pub fn rank(&self, campaign: &Campaign, creators: Vec<Creator>, limit: usize) -> RankResult {
        let total_candidates = creators.len();

        let mut ranked: Vec<RankedCreatorScore> = creators
            .into_iter()
            .map(|creator| self.score(campaign, creator))
            .collect();

        ranked.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.score_breakdown
                        .engagement_score
                        .partial_cmp(&a.score_breakdown.engagement_score)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| {
                    b.score_breakdown
                        .watch_time_score
                        .partial_cmp(&a.score_breakdown.watch_time_score)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.creator_id.cmp(&b.creator_id))
        });

        ranked.truncate(limit);

        RankResult {
            ranked,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
