// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based workout plan generation.
//!
//! A plan is assembled from:
//! 1. A 4-week periodization narrative chosen by goal
//! 2. A 7-day split chosen by goal
//! 3. Exercises per split day from the exercise lookup
//! 4. Intensity guidelines banded on relative strength
//! 5. Progression advice banded on a composite fitness score

use crate::models::{Equipment, Goal, PerformanceMetrics, Profile, TrainingDay};
use crate::services::exercise_db::{ExerciseLookup, Sourced};
use std::fmt;

/// Strength max (kg) that maps to a normalized score of 1.0.
pub const STRENGTH_NORMALIZER: f64 = 150.0;
/// Endurance duration (min) that maps to 1.0.
pub const ENDURANCE_NORMALIZER: f64 = 60.0;
/// Agility score that maps to 1.0.
pub const AGILITY_NORMALIZER: f64 = 10.0;

/// Scores below this are in the low band.
pub const LOW_BAND_LIMIT: f64 = 0.4;
/// Scores below this (and at least `LOW_BAND_LIMIT`) are in the middle band.
pub const MIDDLE_BAND_LIMIT: f64 = 0.7;

/// Three-way banding of a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Middle,
    High,
}

impl Band {
    /// Inclusive-exclusive: 0.4 is `Middle`, 0.7 is `High`.
    pub fn from_score(score: f64) -> Self {
        if score < LOW_BAND_LIMIT {
            Band::Low
        } else if score < MIDDLE_BAND_LIMIT {
            Band::Middle
        } else {
            Band::High
        }
    }
}

/// Strength max relative to `STRENGTH_NORMALIZER`.
pub fn strength_ratio(metrics: &PerformanceMetrics) -> f64 {
    metrics.strength_max_kg / STRENGTH_NORMALIZER
}

/// Mean of normalized strength, endurance and agility.
pub fn fitness_score(metrics: &PerformanceMetrics) -> f64 {
    (metrics.strength_max_kg / STRENGTH_NORMALIZER
        + metrics.endurance_duration_min / ENDURANCE_NORMALIZER
        + metrics.agility_score / AGILITY_NORMALIZER)
        / 3.0
}

/// Weekly split for a goal.
pub fn workout_split(goal: Goal) -> [TrainingDay; 7] {
    use TrainingDay::*;
    match goal {
        Goal::MuscleGain => [Push, Pull, Legs, UpperBody, LowerBody, Rest, Rest],
        Goal::WeightLoss => [FullBody, Hiit, FullBody, Hiit, FullBody, Liss, Rest],
        Goal::Cardio | Goal::General => [
            UpperBody,
            LowerBody,
            Cardio,
            FullBody,
            Core,
            ActiveRecovery,
            Rest,
        ],
    }
}

/// Four-week periodization narrative.
pub fn periodization(goal: Goal) -> String {
    let weeks: [&str; 4] = match goal {
        Goal::MuscleGain => [
            "Week 1: Hypertrophy Focus (4 sets of 8-12 reps)",
            "Week 2: Strength Focus (5 sets of 4-6 reps)",
            "Week 3: Power Focus (3 sets of 2-3 reps)",
            "Week 4: Deload (3 sets of 12-15 reps)",
        ],
        Goal::WeightLoss => [
            "Week 1: Endurance Focus (3 sets of 15-20 reps)",
            "Week 2: Circuit Training (4 rounds, minimal rest)",
            "Week 3: HIIT Focus (30s work, 30s rest)",
            "Week 4: Active Recovery (2 sets of 12-15 reps)",
        ],
        Goal::Cardio => [
            "Week 1: Aerobic Base (3-4 sessions of 30-45 minutes at conversational pace)",
            "Week 2: Tempo Focus (2 sessions of 20-30 minutes at comfortably hard pace)",
            "Week 3: Interval Focus (6-8 rounds of 2 minutes hard, 2 minutes easy)",
            "Week 4: Recovery (reduce total volume by 40%)",
        ],
        Goal::General => [
            "Week 1: Foundation (3 sets of 10-12 reps)",
            "Week 2: Volume (4 sets of 10-12 reps)",
            "Week 3: Intensity (4 sets of 6-8 reps)",
            "Week 4: Deload (2 sets of 10-12 reps)",
        ],
    };

    let mut out = String::from("4-Week Periodization Plan:\n\n");
    for week in weeks {
        out.push_str(week);
        out.push('\n');
    }
    out
}

/// Load and rest guidance banded on `strength_ratio`.
pub fn intensity_guidelines(metrics: &PerformanceMetrics) -> &'static str {
    match Band::from_score(strength_ratio(metrics)) {
        Band::Low => "- Focus on form with lighter weights\n- Rest 2-3 minutes between sets\n",
        Band::Middle => {
            "- Moderate weights with controlled tempo\n- Rest 1-2 minutes between sets\n"
        }
        Band::High => {
            "- Challenge yourself with heavier weights\n- Rest 3-4 minutes for compound exercises\n"
        }
    }
}

/// Progression advice banded on `fitness_score`.
pub fn progression_plan(metrics: &PerformanceMetrics) -> &'static str {
    match Band::from_score(fitness_score(metrics)) {
        Band::Low => concat!(
            "Beginner Progression:\n",
            "- Increase weight by 2.5-5% when you can complete all sets\n",
            "- Add 1 rep per set each week\n",
        ),
        Band::Middle => concat!(
            "Intermediate Progression:\n",
            "- Implement double progression method\n",
            "- Alternate between volume and intensity weeks\n",
        ),
        Band::High => concat!(
            "Advanced Progression:\n",
            "- Use periodization with deload weeks\n",
            "- Implement advanced techniques like clusters and drop sets\n",
        ),
    }
}

/// One day of the split with its exercise block.
#[derive(Debug, Clone)]
pub struct PlannedDay {
    pub day: TrainingDay,
    pub exercises: Sourced<String>,
}

/// A generated workout plan. `Display` renders the full text.
#[derive(Debug, Clone)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub equipment: Equipment,
    pub periodization: String,
    pub days: Vec<PlannedDay>,
    pub intensity: &'static str,
    pub progression: &'static str,
}

impl WorkoutPlan {
    /// The split, in order.
    pub fn split(&self) -> Vec<TrainingDay> {
        self.days.iter().map(|d| d.day).collect()
    }

    /// True if any day's exercises are canned fallback content.
    pub fn used_fallback(&self) -> bool {
        self.days.iter().any(|d| d.exercises.is_fallback())
    }
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.periodization)?;
        for planned in &self.days {
            write!(f, "\n{}:\n", planned.day)?;
            f.write_str(&planned.exercises.content)?;
            write!(f, "\nIntensity Guidelines:\n{}", self.intensity)?;
        }
        write!(f, "\nProgression Plan:\n{}", self.progression)
    }
}

/// Builds workout plans, pulling exercises through an `ExerciseLookup`.
#[derive(Clone)]
pub struct WorkoutPlanner {
    lookup: ExerciseLookup,
}

impl WorkoutPlanner {
    pub fn new(lookup: ExerciseLookup) -> Self {
        Self { lookup }
    }

    /// Generate a plan. Never fails; lookups degrade to fallback content.
    pub async fn generate(&self, profile: &Profile, metrics: &PerformanceMetrics) -> WorkoutPlan {
        let equipment = Equipment::for_activity_level(profile.activity_level);

        tracing::info!(
            profile_id = profile.id,
            goal = %profile.goal,
            equipment = %equipment,
            "Generating workout plan"
        );

        let mut days = Vec::with_capacity(7);
        for day in workout_split(profile.goal) {
            let exercises = self.lookup.fetch(day, equipment).await;
            days.push(PlannedDay { day, exercises });
        }

        WorkoutPlan {
            goal: profile.goal,
            equipment,
            periodization: periodization(profile.goal),
            days,
            intensity: intensity_guidelines(metrics),
            progression: progression_plan(metrics),
        }
    }
}
