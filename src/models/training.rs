//! Training vocabulary shared by the workout planner and the exercise lookup.

use crate::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a weekly split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingDay {
    Push,
    Pull,
    Legs,
    UpperBody,
    LowerBody,
    FullBody,
    Hiit,
    Liss,
    Cardio,
    Core,
    ActiveRecovery,
    Rest,
}

impl TrainingDay {
    pub fn label(self) -> &'static str {
        match self {
            TrainingDay::Push => "Push",
            TrainingDay::Pull => "Pull",
            TrainingDay::Legs => "Legs",
            TrainingDay::UpperBody => "Upper Body",
            TrainingDay::LowerBody => "Lower Body",
            TrainingDay::FullBody => "Full Body",
            TrainingDay::Hiit => "HIIT",
            TrainingDay::Liss => "LISS",
            TrainingDay::Cardio => "Cardio",
            TrainingDay::Core => "Core",
            TrainingDay::ActiveRecovery => "Active Recovery",
            TrainingDay::Rest => "Rest",
        }
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Equipment filter applied to exercise lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Barbell,
    Dumbbell,
}

impl Equipment {
    /// Highly active users train with barbells; everyone else with dumbbells.
    pub fn for_activity_level(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::High => Equipment::Barbell,
            ActivityLevel::Low | ActivityLevel::Moderate => Equipment::Dumbbell,
        }
    }

    /// Value used by the ExerciseDB `equipment` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
