// Unit tests for Wayv Algo

use wayv_algo::core::{
    calculate_score_breakdown, score_audience_country_match, score_brand_safety, score_engagement,
    score_follower_fit, score_hook_match, score_niche_match, score_watch_time,
};
use wayv_algo::models::{
    BudgetRange, Campaign, Creator, CreatorAudience, CreatorPost, GenderSplit, MatchingWeights,
};

fn campaign() -> Campaign {
    Campaign {
        id: "c1".to_string(),
        brand: "X".to_string(),
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

fn creator(id: &str) -> Creator {
    Creator {
        id: id.to_string(),
        username: format!("u{}", id),
        country: "NL".to_string(),
        niches: vec!["fitness".to_string()],
        followers: 100_000,
        engagement_rate: 0.08,
        avg_watch_time: 8.0,
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
        last_posts: vec![],
    }
}

#[test]
fn test_all_unit_scores_within_documented_ranges() {
    let campaign = campaign();
    let creator = creator("cr_1");

    let niche = score_niche_match(&campaign, &creator);
    assert!((0.0..=1.0).contains(&niche));

    let audience = score_audience_country_match(&campaign, &creator);
    assert!(audience == 0.0 || audience == 0.6 || audience == 1.0);

    let engagement = score_engagement(&creator);
    assert!((0.0..=1.0).contains(&engagement));

    let watch = score_watch_time(&campaign, &creator);
    assert!((0.0..=1.0).contains(&watch));

    let follower = score_follower_fit(&campaign, &creator);
    assert!((0.0..=1.0).contains(&follower));

    let hook = score_hook_match(&campaign, &creator);
    assert!(hook == 0.0 || hook == 1.0);

    let safety = score_brand_safety(&campaign, &creator);
    assert!((-1.0..=0.0).contains(&safety));
}

#[test]
fn test_niche_match_monotonicity() {
    let mut campaign = campaign();
    let creator = creator("cr_1");

    let base = score_niche_match(&campaign, &creator);

    // Adding an uncovered campaign niche cannot increase the score
    campaign.niches.push("comedy".to_string());
    let with_uncovered = score_niche_match(&campaign, &creator);
    assert!(with_uncovered <= base);

    // Adding a covered niche cannot decrease it
    let mut covering = creator.clone();
    covering.niches.push("comedy".to_string());
    let with_covered = score_niche_match(&campaign, &covering);
    assert!(with_covered >= with_uncovered);
}

#[test]
fn test_degenerate_band_ignores_follower_count() {
    let mut campaign = campaign();
    campaign.budget_range = BudgetRange {
        min_followers: 100,
        max_followers: 100,
    };

    for followers in [1, 100, 10_000, 10_000_000] {
        let mut creator = creator("cr_1");
        creator.followers = followers;
        assert_eq!(score_follower_fit(&campaign, &creator), 0.0);
    }

    // Inverted band behaves the same
    campaign.budget_range = BudgetRange {
        min_followers: 200_000,
        max_followers: 50_000,
    };
    assert_eq!(score_follower_fit(&campaign, &creator("cr_1")), 0.0);
}

#[test]
fn test_brand_safety_floor_is_minus_one() {
    let mut campaign = campaign();
    campaign.do_not_use_words = vec!["spam".to_string()];

    let mut creator = creator("cr_1");
    creator.brand_safety_flags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    creator.last_posts = vec![
        CreatorPost {
            caption: "spam spam spam".to_string(),
            views: 1,
            likes: 0,
        },
        CreatorPost {
            caption: "more spam".to_string(),
            views: 1,
            likes: 0,
        },
    ];

    // Flags count once and the term penalty applies once, never lower
    let penalty = score_brand_safety(&campaign, &creator);
    assert!(penalty >= -1.0);
    assert!((penalty + 0.7).abs() < 1e-9);
}

#[test]
fn test_watch_time_band_edges() {
    let mut campaign = campaign();
    let mut creator = creator("cr_1");

    // Maximum achievable: 5s over target
    campaign.min_avg_watch_time = 5.0;
    creator.avg_watch_time = 10.0;
    assert!((score_watch_time(&campaign, &creator) - 1.0).abs() < 1e-9);

    // Minimum achievable: 5s under target
    campaign.min_avg_watch_time = 10.0;
    creator.avg_watch_time = 5.0;
    assert!(score_watch_time(&campaign, &creator).abs() < 1e-9);
}

#[test]
fn test_breakdown_uses_full_weight_table() {
    let weights = MatchingWeights::default();
    let breakdown = calculate_score_breakdown(&campaign(), &creator("cr_1"), &weights);

    // Full marks on the categorical factors for the reference pair
    assert!((breakdown.niche_match - weights.niche_match).abs() < 1e-9);
    assert!((breakdown.audience_country_match - weights.audience_country_match).abs() < 1e-9);
    assert!((breakdown.hook_match - weights.hook_match).abs() < 1e-9);
    assert!((breakdown.follower_fit_score - weights.follower_fit).abs() < 1e-9);
}
