// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use common::{lookup_with, record, CountingExerciseSource, FailingExerciseSource};
use performance_pro::error::AppError;
use performance_pro::models::{Equipment, TrainingDay};
use performance_pro::services::exercise_db::{default_exercises, BodyRegion};
use performance_pro::services::{ExerciseCache, ExerciseLookup, InMemoryExerciseCache, Provenance};
use std::sync::Arc;

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    let source = Arc::new(CountingExerciseSource::mixed());
    let lookup = lookup_with(source.clone());

    let first = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    assert_eq!(first.provenance, Provenance::Live);
    assert!(first.content.contains("Exercise: dumbbell bench press"));
    assert!(!first.content.contains("barbell bench press"));

    let second = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    assert_eq!(second.provenance, Provenance::Cached);
    assert_eq!(second.content, first.content);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_different_equipment_bypasses_cache() {
    let source = Arc::new(CountingExerciseSource::mixed());
    let lookup = lookup_with(source.clone());

    lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    let barbell = lookup.fetch(TrainingDay::Push, Equipment::Barbell).await;

    assert_eq!(barbell.provenance, Provenance::Live);
    assert!(barbell.content.contains("Exercise: barbell bench press"));
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_days_sharing_a_region_share_the_cache() {
    // HIIT and Full Body both map to "full body"
    let source = Arc::new(CountingExerciseSource::mixed());
    let lookup = lookup_with(source.clone());

    lookup.fetch(TrainingDay::FullBody, Equipment::Dumbbell).await;
    let hiit = lookup.fetch(TrainingDay::Hiit, Equipment::Dumbbell).await;

    assert_eq!(hiit.provenance, Provenance::Cached);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_upstream_errors_fall_back_to_defaults() {
    for message in [
        AppError::RATE_LIMITED,
        AppError::AUTH_FAILED,
        "HTTP 500 Internal Server Error: ",
        "JSON parse error: expected value",
    ] {
        let lookup = lookup_with(Arc::new(FailingExerciseSource::new(message)));
        let result = lookup.fetch(TrainingDay::Pull, Equipment::Barbell).await;

        assert!(result.is_fallback(), "message {}", message);
        assert!(!result.provenance.is_authoritative());
        assert_eq!(
            result.content,
            default_exercises(BodyRegion::Back, Equipment::Barbell)
        );
    }
}

#[tokio::test]
async fn test_fallback_is_not_cached() {
    let source = Arc::new(FailingExerciseSource::new("HTTP 503 Service Unavailable: "));
    let cache = Arc::new(InMemoryExerciseCache::new());
    let lookup = ExerciseLookup::new(source.clone(), cache.clone());

    lookup.fetch(TrainingDay::Legs, Equipment::Dumbbell).await;
    let again = lookup.fetch(TrainingDay::Legs, Equipment::Dumbbell).await;

    assert!(again.is_fallback());
    assert_eq!(source.calls(), 2);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_no_matching_equipment_falls_back() {
    let source = Arc::new(CountingExerciseSource::new(vec![record(
        "cable crossover",
        "pectorals",
        "cable",
    )]));
    let lookup = lookup_with(source.clone());

    let result = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    assert!(result.is_fallback());
    assert!(result
        .content
        .starts_with("Default exercises for chest with dumbbell:"));

    // Empty filter results are not cached either
    lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let source = Arc::new(CountingExerciseSource::mixed());
    let lookup = lookup_with(source.clone());

    lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
    lookup.clear_cache();
    let refetched = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;

    assert_eq!(refetched.provenance, Provenance::Live);
    assert_eq!(source.calls(), 2);
}

#[test]
fn test_in_memory_cache_concurrent_puts() {
    let cache = Arc::new(InMemoryExerciseCache::new());
    let regions = [
        BodyRegion::Chest,
        BodyRegion::Back,
        BodyRegion::UpperLegs,
        BodyRegion::Waist,
    ];

    let handles: Vec<_> = regions
        .into_iter()
        .map(|region| {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for equipment in [Equipment::Barbell, Equipment::Dumbbell] {
                    cache.put(
                        performance_pro::services::exercise_db::ExerciseCacheKey {
                            region,
                            equipment,
                        },
                        format!("{} {}", region, equipment),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 8);
}
