// Criterion benchmarks for Luna Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use luna_engine::core::{
    calculate_user_compatibility, haversine_distance, recommend_people, recommend_venues,
};
use luna_engine::models::{PriceTier, User, Venue};
use std::collections::HashMap;

const TAGS: &[&str] = &[
    "coffee", "art", "music", "indie", "books", "quiet", "cocktails", "nightlife", "dancing",
    "food", "wine", "culture", "photography", "study", "wifi", "events",
];

fn tier(i: usize) -> PriceTier {
    match i % 3 {
        0 => PriceTier::Budget,
        1 => PriceTier::Moderate,
        _ => PriceTier::Upscale,
    }
}

fn pick_tags(i: usize, count: usize) -> Vec<String> {
    (0..count).map(|k| TAGS[(i * 7 + k * 3) % TAGS.len()].to_string()).collect()
}

fn create_user(i: usize, venue_count: usize) -> User {
    let viewing_history: HashMap<String, f64> = (0..3)
        .map(|k| (format!("venue{}", (i + k * 5) % venue_count.max(1)), ((i * 13 + k * 29) % 150) as f64))
        .collect();

    User {
        id: format!("user{}", i),
        name: format!("User {}", i),
        latitude: 40.7580 + (i as f64 * 0.0007) % 0.05,
        longitude: -73.9855 + (i as f64 * 0.0011) % 0.05,
        interests: pick_tags(i, 4),
        preferred_price_range: tier(i),
        viewing_history,
    }
}

fn create_venue(i: usize) -> Venue {
    Venue {
        id: format!("venue{}", i),
        name: format!("Venue {}", i),
        category: "cafe".to_string(),
        latitude: 40.7500 + (i as f64 * 0.0009) % 0.05,
        longitude: -73.9900 + (i as f64 * 0.0013) % 0.05,
        price_range: tier(i + 1),
        tags: pick_tags(i + 3, 4),
        description: String::new(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7580),
                black_box(-73.9855),
                black_box(40.7520),
                black_box(-73.9900),
            )
        });
    });
}

fn bench_compatibility(c: &mut Criterion) {
    let a = create_user(1, 10);
    let b = create_user(2, 10);

    c.bench_function("user_compatibility", |bench| {
        bench.iter(|| calculate_user_compatibility(black_box(&a), black_box(&b)));
    });
}

fn bench_venue_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_venues");

    for size in [10, 50, 100, 250].iter() {
        let venues: Vec<Venue> = (0..*size).map(create_venue).collect();
        let users: Vec<User> = (0..*size).map(|i| create_user(i, *size)).collect();
        let user = users[0].clone();

        group.bench_with_input(BenchmarkId::new("venues_x_users", size), size, |b, _| {
            b.iter(|| recommend_venues(black_box(&user), black_box(&venues), black_box(&users), black_box(20)));
        });
    }

    group.finish();
}

fn bench_people_recommendations(c: &mut Criterion) {
    let users: Vec<User> = (0..1000).map(|i| create_user(i, 50)).collect();
    let user = users[0].clone();

    c.bench_function("recommend_people_1000_users", |b| {
        b.iter(|| recommend_people(black_box(&user), black_box(&users), black_box(10)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_compatibility,
    bench_venue_recommendations,
    bench_people_recommendations
);

criterion_main!(benches);
