//! Wayv Algo - Creator ranking service for Wayv campaign matching
//!
//! This library provides the core ranking engine used by the Wayv campaign
//! matching app. It scores every creator against a campaign with a weighted
//! multi-factor scoring function and returns a deterministic top-N ordering.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{RankResult, Ranker};
pub use crate::models::{
    Campaign, Creator, MatchingWeights, RankCreatorsRequest, RankCreatorsResponse,
    RankedCreatorScore, ScoreBreakdown,
};
