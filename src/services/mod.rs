// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - plan generation and external lookups.

pub mod exercise_db;
pub mod nutrition_plan;
pub mod nutritionix;
pub mod suggestions;
pub mod workout_plan;

pub use exercise_db::{
    ExerciseCache, ExerciseDbClient, ExerciseLookup, ExerciseSource, InMemoryExerciseCache,
    Provenance, Sourced,
};
pub use nutrition_plan::{generate_nutrition_plan, NutritionPlan};
pub use nutritionix::{MealNutritionSource, NutritionixClient};
pub use suggestions::{nutrition_suggestion, workout_suggestion};
pub use workout_plan::{WorkoutPlan, WorkoutPlanner};
