//! User profile model and the goal/activity enumerations that drive every plan.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// A user's training objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "Cardio")]
    Cardio,
    /// Anything that is not one of the three targeted goals.
    #[serde(rename = "General Fitness")]
    General,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Cardio,
        Goal::General,
    ];

    /// Human-readable label, also the value stored in the database.
    pub fn label(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Cardio => "Cardio",
            Goal::General => "General Fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    /// Case-insensitive; unknown goals are rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight loss" => Ok(Goal::WeightLoss),
            "muscle gain" => Ok(Goal::MuscleGain),
            "cardio" => Ok(Goal::Cardio),
            "general fitness" | "general" | "other" => Ok(Goal::General),
            _ => Err(AppError::BadRequest(format!(
                "unknown goal '{}' (expected Weight Loss, Muscle Gain, Cardio or General Fitness)",
                s.trim()
            ))),
        }
    }
}

/// Self-reported exertion tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ActivityLevel::Low),
            "moderate" => Ok(ActivityLevel::Moderate),
            "high" => Ok(ActivityLevel::High),
            _ => Err(AppError::BadRequest(format!(
                "unknown activity level '{}' (expected Low, Moderate or High)",
                s.trim()
            ))),
        }
    }
}

/// User profile stored in the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Row ID (also the user ID shown in the console)
    pub id: i64,
    pub name: String,
    pub goal: Goal,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: ActivityLevel,
    /// When the profile was created (RFC3339)
    pub created_at: String,
    /// Last explicit update (RFC3339)
    pub updated_at: String,
}

/// Insert payload for a new profile.
#[derive(Debug, Clone, Validate)]
pub struct NewProfile {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub goal: Goal,
    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height_m: f64,
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,
    pub gender: String,
    pub activity_level: ActivityLevel,
}
