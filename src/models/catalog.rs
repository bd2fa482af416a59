//! Reference catalog rows (`workouts` and `nutrition` tables).
//!
//! These are curated suggestions keyed by goal, not generated plans.

use crate::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// A suggested exercise for a goal/activity-level pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub exercise_name: String,
    pub duration_minutes: u32,
    /// Free-form intensity label (e.g. "High")
    pub intensity: String,
}

/// A suggested daily intake for a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub goal: Goal,
    /// Free-form range (e.g. "1800-2000")
    pub calorie_range: String,
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
}
