// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use performance_pro::config::Config;
use performance_pro::db::ProfileStore;
use performance_pro::error::{AppError, Result};
use performance_pro::models::{ActivityLevel, Goal, NewMetrics, NewProfile};
use performance_pro::services::exercise_db::{BodyRegion, ExerciseRecord};
use performance_pro::services::nutritionix::FoodNutrients;
use performance_pro::services::{
    ExerciseLookup, ExerciseSource, InMemoryExerciseCache, MealNutritionSource, WorkoutPlanner,
};
use performance_pro::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Exercise source that serves fixed records and counts calls.
#[allow(dead_code)]
pub struct CountingExerciseSource {
    pub records: Vec<ExerciseRecord>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingExerciseSource {
    pub fn new(records: Vec<ExerciseRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    /// One dumbbell and one barbell exercise.
    pub fn mixed() -> Self {
        Self::new(vec![
            record("dumbbell bench press", "pectorals", "dumbbell"),
            record("barbell bench press", "pectorals", "Barbell"),
        ])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExerciseSource for CountingExerciseSource {
    async fn exercises_for(&self, _region: BodyRegion) -> Result<Vec<ExerciseRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Exercise source that always fails with the given error message.
#[allow(dead_code)]
pub struct FailingExerciseSource {
    pub message: String,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FailingExerciseSource {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExerciseSource for FailingExerciseSource {
    async fn exercises_for(&self, _region: BodyRegion) -> Result<Vec<ExerciseRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::ExerciseApi(self.message.clone()))
    }
}

/// Meal source that returns one fixed food for any query.
#[allow(dead_code)]
pub struct StubMealSource;

#[async_trait]
impl MealNutritionSource for StubMealSource {
    async fn meal_nutrition(&self, query: &str) -> Result<Vec<FoodNutrients>> {
        if query.contains("error") {
            return Err(AppError::NutritionApi(AppError::RATE_LIMITED.to_string()));
        }
        Ok(vec![FoodNutrients {
            name: "apple".to_string(),
            calories: Some(95.0),
            protein_g: Some(0.5),
            carbs_g: Some(25.0),
            fat_g: None,
        }])
    }
}

#[allow(dead_code)]
pub fn record(name: &str, target: &str, equipment: &str) -> ExerciseRecord {
    ExerciseRecord {
        name: name.to_string(),
        target: target.to_string(),
        equipment: equipment.to_string(),
        body_part: "chest".to_string(),
        instructions: Some(vec!["Lie on the bench".to_string(), "Press up".to_string()]),
    }
}

#[allow(dead_code)]
pub fn lookup_with(source: Arc<dyn ExerciseSource>) -> ExerciseLookup {
    ExerciseLookup::new(source, Arc::new(InMemoryExerciseCache::new()))
}

#[allow(dead_code)]
pub fn new_profile(goal: Goal, activity_level: ActivityLevel, weight_kg: f64) -> NewProfile {
    NewProfile {
        name: "Test User".to_string(),
        goal,
        weight_kg,
        height_m: 1.75,
        age: 30,
        gender: "Female".to_string(),
        activity_level,
    }
}

#[allow(dead_code)]
pub fn new_metrics(profile_id: i64, strength_max_kg: f64) -> NewMetrics {
    NewMetrics {
        profile_id,
        strength_max_kg,
        speed_time_s: 12.0,
        endurance_duration_min: 30.0,
        agility_score: 7.0,
    }
}

/// In-memory store seeded with the sample profiles and catalog.
#[allow(dead_code)]
pub fn seeded_store() -> ProfileStore {
    let store = ProfileStore::open_in_memory().expect("Failed to open in-memory store");
    store.seed_sample_data().expect("Failed to seed store");
    store
}

/// App state over a seeded store with stubbed lookups.
#[allow(dead_code)]
pub fn test_state(
    source: Arc<dyn ExerciseSource>,
    meals: Option<Arc<dyn MealNutritionSource>>,
) -> AppState {
    state_with_store(seeded_store(), source, meals)
}

/// App state over the given store with stubbed lookups.
#[allow(dead_code)]
pub fn state_with_store(
    store: ProfileStore,
    source: Arc<dyn ExerciseSource>,
    meals: Option<Arc<dyn MealNutritionSource>>,
) -> AppState {
    AppState {
        config: Config::test_default(),
        store,
        planner: WorkoutPlanner::new(lookup_with(source)),
        meals,
    }
}
