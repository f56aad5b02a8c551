// Criterion benchmarks for Wayv Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
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
        niches: vec!["fitness".to_string(), "lifestyle".to_string()],
        preferred_hook_types: vec!["POV".to_string()],
        min_avg_watch_time: 7.0,
        budget_range: BudgetRange {
            min_followers: 50_000,
            max_followers: 250_000,
        },
        tone: "energetic".to_string(),
        do_not_use_words: vec!["spam".to_string(), "scam".to_string()],
    }
}

fn create_creator(id: usize) -> Creator {
    Creator {
        id: format!("cr_{:05}", id),
        username: format!("user{}", id),
        country: "NL".to_string(),
        niches: if id % 3 == 0 {
            vec!["fitness".to_string()]
        } else {
            vec!["fitness".to_string(), "lifestyle".to_string()]
        },
        followers: 10_000 + (id as i64 * 977) % 500_000,
        engagement_rate: 0.02 + (id % 14) as f64 * 0.01,
        avg_watch_time: 3.0 + (id % 13) as f64,
        content_style: "pov".to_string(),
        primary_hook_type: if id % 2 == 0 { "POV" } else { "Shock" }.to_string(),
        brand_safety_flags: if id % 17 == 0 {
            vec!["controversy".to_string()]
        } else {
            vec![]
        },
        audience: CreatorAudience {
            top_countries: vec!["NL".to_string(), "DE".to_string(), "BE".to_string()],
            gender_split: GenderSplit {
                female: 0.6,
                male: 0.4,
            },
            top_age_range: "18-24".to_string(),
        },
        last_posts: vec![
            CreatorPost {
                caption: format!("Post number {} with a normal caption", id),
                views: 10_000,
                likes: 500,
            },
            CreatorPost {
                caption: "Another day another workout".to_string(),
                views: 8_000,
                likes: 400,
            },
        ],
    }
}

fn bench_breakdown(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();
    let creator = create_creator(42);

    c.bench_function("score_breakdown", |b| {
        b.iter(|| ranker.breakdown(black_box(&campaign), black_box(&creator)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let campaign = create_campaign();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let creators: Vec<Creator> = (0..*candidate_count).map(create_creator).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &creators,
            |b, creators| {
                b.iter(|| {
                    ranker.rank(
                        black_box(&campaign),
                        black_box(creators.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_breakdown, bench_ranking);
criterion_main!(benches);
