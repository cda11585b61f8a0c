// Criterion benchmarks for Travel Match

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use travel_match::core::{is_eligible, similarity, MatchService, Matcher};
use travel_match::models::{UserId, UserProfile};
use travel_match::services::{ChannelError, ChannelService, InMemoryStore};

const STYLES: &[&str] = &["relaxed", "active", "luxury", "backpacking"];
const DESTINATIONS: &[&str] = &["Jeju", "Busan", "Tokyo", "Bangkok", "Lisbon"];
const HOBBIES: &[&str] = &["hiking", "diving", "skiing", "surfing", "photography", "cooking", "yoga"];
const BUDGETS: &[&str] = &["Low", "Medium", "High"];

struct NoopChannels;

#[async_trait::async_trait]
impl ChannelService for NoopChannels {
    async fn create_channel(&self, _: &str, _: UserId, _: UserId) -> Result<(), ChannelError> {
        Ok(())
    }
}

fn create_traveller(id: usize) -> UserProfile {
    let mut profile = UserProfile::new(id as UserId, format!("User {}", id));
    profile.budget = Some(BUDGETS[id % BUDGETS.len()].to_string());
    profile.available_travel_dates = (0..5)
        .map(|offset| NaiveDate::from_ymd_opt(2024, 6, 1 + ((id + offset * 3) % 28) as u32).unwrap())
        .collect();
    profile.travel_style = Some(STYLES[id % STYLES.len()].to_string());
    profile.preferred_destination = Some(DESTINATIONS[id % DESTINATIONS.len()].to_string());
    profile.hobbies = (0..3)
        .map(|i| HOBBIES[(id + i * 2) % HOBBIES.len()].to_string())
        .collect();
    profile.interests = vec![HOBBIES[(id * 5) % HOBBIES.len()].to_string()];
    profile
}

fn bench_similarity(c: &mut Criterion) {
    let a = create_traveller(1);
    let b = create_traveller(4);

    c.bench_function("similarity", |bench| {
        bench.iter(|| similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_eligibility(c: &mut Criterion) {
    let a = create_traveller(3);
    let b = create_traveller(6);

    c.bench_function("is_eligible", |bench| {
        bench.iter(|| is_eligible(black_box(&a), black_box(&b)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let requester = create_traveller(0);

    let mut group = c.benchmark_group("matching");

    for user_count in [10, 50, 100, 500, 1000].iter() {
        let users: Vec<UserProfile> = (0..*user_count).map(create_traveller).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", user_count),
            user_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&requester), black_box(users.clone())));
            },
        );
    }

    group.finish();
}

fn bench_candidate_discovery(c: &mut Criterion) {
    let store = Arc::new(InMemoryStore::with_users((0..500).map(create_traveller)));
    let service = MatchService::new(store.clone(), store, Arc::new(NoopChannels));

    c.bench_function("candidate_discovery_500_users", |b| {
        b.iter(|| tokio_test::block_on(service.find_matches(black_box(0))));
    });
}

criterion_group!(
    benches,
    bench_similarity,
    bench_eligibility,
    bench_matching,
    bench_candidate_discovery
);

criterion_main!(benches);
