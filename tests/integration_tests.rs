// Integration tests for Wayv Algo

use wayv_algo::core::Ranker;
use wayv_algo::models::{
    BudgetRange, Campaign, Creator, CreatorAudience, CreatorPost, GenderSplit,
};

fn create_campaign() -> Campaign {
    Campaign {
        id: "c1".to_string(),
        brand: "Acme".to_string(),
        objective: "Awareness".to_string(),
        target_country: "NL".to_string(),
        target_gender: "all".to_string(),
        target_age_range: "18-24".to_string(),
        niches: vec!["fitness".to_string()],
        preferred_hook_types: vec!["POV".to_string()],
        min_avg_watch_time: 7.0,
        budget_range: BudgetRange {
            min_followers: 50_000,
            max_followers: 250_000,
        },
        tone: "energetic".to_string(),
        do_not_use_words: vec![],
    }
}

fn create_creator(id: &str, engagement_rate: f64, avg_watch_time: f64) -> Creator {
    Creator {
        id: id.to_string(),
        username: format!("u{}", id),
        country: "NL".to_string(),
        niches: vec!["fitness".to_string()],
        followers: 100_000,
        engagement_rate,
        avg_watch_time,
        content_style: "pov".to_string(),
        primary_hook_type: "POV".to_string(),
        brand_safety_flags: vec![],
        audience: CreatorAudience {
            top_countries: vec!["NL".to_string()],
            gender_split: GenderSplit {
                female: 0.7,
                male: 0.3,
            },
            top_age_range: "18-24".to_string(),
        },
        last_posts: vec![CreatorPost {
            caption: "Morning workout".to_string(),
            views: 10_000,
            likes: 500,
        }],
    }
}

#[test]
fn test_reference_scenario_total_score() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();
    let creator = create_creator("cr_1", 0.08, 8.0);

    let breakdown = ranker.breakdown(&campaign, &creator);

    assert!((breakdown.niche_match - 25.0).abs() < 1e-9);
    assert!((breakdown.audience_country_match - 20.0).abs() < 1e-9);
    assert!((breakdown.hook_match - 10.0).abs() < 1e-9);
    assert!((breakdown.follower_fit_score - 15.0).abs() < 1e-9);
    assert!((breakdown.watch_time_score - 10.2).abs() < 1e-9);
    assert!((breakdown.engagement_score - (0.06 / 0.13) * 15.0).abs() < 1e-9);
    assert_eq!(breakdown.brand_safety_penalty, 0.0);

    let scored = ranker.score(&campaign, creator);
    let expected = 25.0 + 20.0 + 10.0 + 15.0 + 10.2 + (0.06 / 0.13) * 15.0;
    assert!((scored.total_score - expected).abs() < 1e-9);
}

#[test]
fn test_end_to_end_ranking() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();

    let mut flagged = create_creator("flagged", 0.08, 8.0);
    flagged.brand_safety_flags = vec!["controversy".to_string()];

    let mut off_niche = create_creator("off_niche", 0.08, 8.0);
    off_niche.niches = vec!["comedy".to_string()];

    let creators = vec![
        create_creator("strong", 0.12, 12.0),
        create_creator("average", 0.06, 6.0),
        flagged,
        off_niche,
    ];

    let result = ranker.rank(&campaign, creators, 10);

    assert_eq!(result.ranked.len(), 4);
    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.ranked[0].creator_id, "strong");

    // Sorted by score throughout
    for pair in result.ranked.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score);
    }

    // All scores within bounds
    for r in &result.ranked {
        assert!(r.total_score >= 0.0 && r.total_score <= 100.0);
    }
}

#[test]
fn test_rank_twice_produces_value_equal_output() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();

    let creators: Vec<Creator> = (0..30)
        .map(|i| {
            create_creator(
                &format!("cr_{:02}", i),
                0.02 + (i as f64) * 0.004,
                3.0 + (i as f64) * 0.3,
            )
        })
        .collect();

    let first = ranker.rank(&campaign, creators.clone(), 20);
    let second = ranker.rank(&campaign, creators, 20);

    assert_eq!(first.ranked.len(), second.ranked.len());
    for (a, b) in first.ranked.iter().zip(second.ranked.iter()) {
        assert_eq!(a.creator_id, b.creator_id);
        assert_eq!(a.total_score, b.total_score);
        assert_eq!(a.score_breakdown, b.score_breakdown);
    }
}

#[test]
fn test_tie_ordering_is_deterministic() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();

    // Identical totals and engagement; cr_c wins on watch time, then the
    // remaining pair falls back to ascending id
    let creators = vec![
        create_creator("cr_b", 0.05, 7.0),
        create_creator("cr_c", 0.05, 8.0),
        create_creator("cr_a", 0.05, 7.0),
    ];

    let result = ranker.rank(&campaign, creators, 10);

    let ids: Vec<&str> = result.ranked.iter().map(|r| r.creator_id.as_str()).collect();
    assert_eq!(ids, vec!["cr_c", "cr_a", "cr_b"]);
}

#[test]
fn test_limit_returns_top_entries_of_full_ordering() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();

    let creators = vec![
        create_creator("weakest", 0.02, 3.0),
        create_creator("best", 0.13, 12.0),
        create_creator("second", 0.09, 9.0),
    ];

    let full = ranker.rank(&campaign, creators.clone(), 10);
    let truncated = ranker.rank(&campaign, creators, 2);

    assert_eq!(truncated.ranked.len(), 2);
    assert_eq!(truncated.ranked[0].creator_id, full.ranked[0].creator_id);
    assert_eq!(truncated.ranked[1].creator_id, full.ranked[1].creator_id);
    assert_eq!(truncated.total_candidates, 3);
}

#[test]
fn test_inputs_are_not_mutated() {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();
    let creators = vec![
        create_creator("a", 0.08, 8.0),
        create_creator("b", 0.05, 5.0),
    ];

    let before = serde_json::to_value(&creators).unwrap();
    let campaign_before = serde_json::to_value(&campaign).unwrap();

    let _ = ranker.rank(&campaign, creators.clone(), 10);

    assert_eq!(serde_json::to_value(&creators).unwrap(), before);
    assert_eq!(serde_json::to_value(&campaign).unwrap(), campaign_before);
}

#[test]
fn test_empty_candidate_set() {
    let ranker = Ranker::with_default_weights();
    let result = ranker.rank(&create_campaign(), vec![], 20);

    assert!(result.ranked.is_empty());
    assert_eq!(result.total_candidates, 0);
}
