// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based nutrition plan generation.
//!
//! Calories follow a lean-mass resting-energy estimate scaled by activity
//! and goal; macros are derived from body weight and goal ratios.

use crate::models::{ActivityLevel, Goal, PerformanceMetrics, Profile};
use std::fmt;

/// Resting energy intercept (kcal).
pub const RESTING_ENERGY_BASE: f64 = 370.0;
/// Resting energy per kilogram of lean mass (kcal).
pub const RESTING_ENERGY_PER_KG_LEAN: f64 = 21.6;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Estimated body-fat fraction for an activity level.
pub fn body_fat_estimate(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::High => 0.15,
        ActivityLevel::Moderate => 0.20,
        ActivityLevel::Low => 0.25,
    }
}

/// Fat-free mass in kg, never negative.
pub fn lean_mass(weight_kg: f64, level: ActivityLevel) -> f64 {
    (weight_kg * (1.0 - body_fat_estimate(level))).max(0.0)
}

pub fn resting_energy(lean_mass_kg: f64) -> f64 {
    RESTING_ENERGY_BASE + RESTING_ENERGY_PER_KG_LEAN * lean_mass_kg
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Low => 1.2,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::High => 1.725,
    }
}

/// Extra kcal granted to muscle gain for stronger lifters.
///
/// Zero when no metrics are on record.
pub fn strength_surplus(metrics: Option<&PerformanceMetrics>) -> f64 {
    metrics.map_or(0.0, |m| m.strength_max_kg / 10.0)
}

/// Intermediate and final values of the calorie estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieEstimate {
    pub lean_mass_kg: f64,
    pub resting_energy: f64,
    /// Resting energy scaled by activity (maintenance calories).
    pub maintenance: f64,
    /// Maintenance adjusted for the goal.
    pub target: f64,
}

impl CalorieEstimate {
    pub fn calculate(profile: &Profile, metrics: Option<&PerformanceMetrics>) -> Self {
        let lean_mass_kg = lean_mass(profile.weight_kg, profile.activity_level);
        let resting_energy = resting_energy(lean_mass_kg);
        let maintenance = resting_energy * activity_multiplier(profile.activity_level);

        let target = match profile.goal {
            Goal::WeightLoss => maintenance * 0.8,
            Goal::MuscleGain => maintenance * 1.1 + strength_surplus(metrics),
            Goal::Cardio | Goal::General => maintenance,
        };

        Self {
            lean_mass_kg,
            resting_energy,
            maintenance,
            target,
        }
    }
}

/// Per-goal macro constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein_g_per_kg: f64,
    /// Share of *total* target calories from carbohydrate.
    pub carb_fraction: f64,
    /// Share of *total* target calories from fat.
    pub fat_fraction: f64,
}

impl MacroRatios {
    pub fn for_goal(goal: Goal) -> Self {
        let (protein_g_per_kg, carb_fraction, fat_fraction) = match goal {
            Goal::WeightLoss => (2.2, 0.30, 0.30),
            Goal::MuscleGain => (2.4, 0.45, 0.25),
            Goal::Cardio | Goal::General => (1.8, 0.40, 0.30),
        };
        Self {
            protein_g_per_kg,
            carb_fraction,
            fat_fraction,
        }
    }
}

/// Daily macro targets in grams.
///
/// Protein comes from body weight while carbs and fat are fractions of the
/// total target, so the three do not necessarily add up to the target.
/// See [`MacroSplit::unallocated_calories`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroSplit {
    pub fn calculate(weight_kg: f64, goal: Goal, target_calories: f64) -> Self {
        let ratios = MacroRatios::for_goal(goal);
        Self {
            protein_g: weight_kg * ratios.protein_g_per_kg,
            carbs_g: target_calories * ratios.carb_fraction / KCAL_PER_GRAM_CARB,
            fat_g: target_calories * ratios.fat_fraction / KCAL_PER_GRAM_FAT,
        }
    }

    pub fn protein_calories(&self) -> f64 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
    }

    pub fn carb_calories(&self) -> f64 {
        self.carbs_g * KCAL_PER_GRAM_CARB
    }

    pub fn fat_calories(&self) -> f64 {
        self.fat_g * KCAL_PER_GRAM_FAT
    }

    pub fn total_calories(&self) -> f64 {
        self.protein_calories() + self.carb_calories() + self.fat_calories()
    }

    /// Target minus the calories the three macros account for.
    ///
    /// Negative when the macros overshoot the target.
    pub fn unallocated_calories(&self, target_calories: f64) -> f64 {
        target_calories - self.total_calories()
    }
}

/// A generated nutrition plan. `Display` joins the four sections.
#[derive(Debug, Clone)]
pub struct NutritionPlan {
    pub goal: Goal,
    pub calories: CalorieEstimate,
    pub macros: MacroSplit,
    pub overview: String,
    pub meal_timing: String,
    pub supplements: String,
    pub progression: String,
}

impl fmt::Display for NutritionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.overview, self.meal_timing, self.supplements, self.progression
        )
    }
}

/// Build a nutrition plan. Metrics are optional.
pub fn generate_nutrition_plan(
    profile: &Profile,
    metrics: Option<&PerformanceMetrics>,
) -> NutritionPlan {
    let calories = CalorieEstimate::calculate(profile, metrics);
    let macros = MacroSplit::calculate(profile.weight_kg, profile.goal, calories.target);

    tracing::info!(
        profile_id = profile.id,
        goal = %profile.goal,
        has_metrics = metrics.is_some(),
        target_calories = calories.target,
        "Generating nutrition plan"
    );
    tracing::debug!(
        profile_id = profile.id,
        unallocated = macros.unallocated_calories(calories.target),
        "Macro split computed"
    );

    NutritionPlan {
        goal: profile.goal,
        calories,
        macros,
        overview: overview(profile.goal, calories.target, &macros),
        meal_timing: meal_timing(profile.goal),
        supplements: supplements(profile.goal),
        progression: progression_guidelines(profile.goal),
    }
}

fn push_lines(out: &mut String, lines: &[&str]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

fn overview(goal: Goal, target_calories: f64, macros: &MacroSplit) -> String {
    let mut out = String::from("Daily Nutrition Plan:\n\n");
    out.push_str(&format!("Target Calories: {:.0} calories\n\n", target_calories));
    out.push_str("Macronutrient Targets:\n");
    out.push_str(&format!(
        "- Protein: {:.0}g ({:.0} calories)\n",
        macros.protein_g,
        macros.protein_calories()
    ));
    out.push_str(&format!(
        "- Carbohydrates: {:.0}g ({:.0} calories)\n",
        macros.carbs_g,
        macros.carb_calories()
    ));
    out.push_str(&format!(
        "- Fats: {:.0}g ({:.0} calories)\n\n",
        macros.fat_g,
        macros.fat_calories()
    ));

    out.push_str("Key Focus Areas:\n");
    push_lines(
        &mut out,
        match goal {
            Goal::WeightLoss => &[
                "- Maintain high protein intake for muscle preservation",
                "- Focus on fiber-rich foods for satiety",
                "- Time carbohydrates around workouts",
            ],
            Goal::MuscleGain => &[
                "- Prioritize protein distribution throughout the day",
                "- Include fast-digesting carbs post-workout",
                "- Ensure adequate healthy fats for hormone production",
            ],
            Goal::Cardio => &[
                "- Fuel longer sessions with complex carbohydrates",
                "- Replace electrolytes after sessions over an hour",
                "- Eat protein within an hour of training",
            ],
            Goal::General => &[
                "- Build meals around whole, minimally processed foods",
                "- Spread protein evenly across meals",
                "- Keep hydration consistent through the day",
            ],
        },
    );
    out
}

fn meal_timing(goal: Goal) -> String {
    let mut out = String::from("Meal Timing Strategy:\n\nRecommended Meal Schedule:\n");
    push_lines(
        &mut out,
        match goal {
            Goal::WeightLoss => &[
                "1. Breakfast (25%): Focus on protein and fiber",
                "2. Lunch (35%): Largest meal with complex carbs",
                "3. Pre-workout snack (10%): Light, easily digestible",
                "4. Post-workout (15%): Protein and simple carbs",
                "5. Dinner (15%): Protein and vegetables",
            ],
            Goal::MuscleGain => &[
                "1. Breakfast (20%): High protein and carbs",
                "2. Mid-morning (15%): Protein and fats",
                "3. Lunch (25%): Complete meal",
                "4. Pre-workout (15%): Carb-focused",
                "5. Post-workout (15%): Protein and fast carbs",
                "6. Dinner (10%): Protein and slow carbs",
            ],
            Goal::Cardio => &[
                "1. Breakfast (25%): Oats or whole grains with protein",
                "2. Pre-workout snack (15%): Fruit or toast",
                "3. Lunch (25%): Balanced plate with starches",
                "4. Post-workout (15%): Carbs and protein in a 3:1 ratio",
                "5. Dinner (20%): Lean protein and vegetables",
            ],
            Goal::General => &[
                "1. Breakfast (25%): Protein with whole grains",
                "2. Lunch (30%): Balanced plate",
                "3. Afternoon snack (15%): Fruit and nuts",
                "4. Dinner (30%): Protein, vegetables and starches",
            ],
        },
    );
    out
}

fn supplements(goal: Goal) -> String {
    let mut out = String::from("Supplement Recommendations:\n\n");
    out.push_str("Core Supplements:\n");
    push_lines(
        &mut out,
        &[
            "- Multivitamin: Daily with breakfast",
            "- Omega-3: 2-3g daily with meals",
        ],
    );

    out.push_str("\nGoal-Specific Supplements:\n");
    push_lines(
        &mut out,
        match goal {
            Goal::WeightLoss => &[
                "- Whey Protein: 25-30g post-workout",
                "- L-Carnitine: 2g pre-workout",
                "- Green Tea Extract: Morning and afternoon",
            ],
            Goal::MuscleGain => &[
                "- Whey/Casein Blend: 30-40g post-workout",
                "- Creatine Monohydrate: 5g daily",
                "- BCAAs: During workouts",
                "- Beta-Alanine: 3-5g daily",
            ],
            Goal::Cardio => &[
                "- Electrolyte Mix: During sessions over 60 minutes",
                "- Whey Protein: 20-25g post-workout",
                "- Beta-Alanine: 3-5g daily",
            ],
            Goal::General => &[
                "- Whey Protein: As needed to reach daily protein target",
                "- Vitamin D: 1000-2000 IU daily",
            ],
        },
    );
    out
}

fn progression_guidelines(goal: Goal) -> String {
    let mut out = String::from("Nutrition Progression Guidelines:\n\nWeekly Adjustments:\n");
    push_lines(
        &mut out,
        match goal {
            Goal::WeightLoss => &[
                "- Monitor weight loss (target: 0.5-1% body weight per week)",
                "- Adjust calories down 10% if plateau occurs",
                "- Increase protein if strength decreases",
            ],
            Goal::MuscleGain => &[
                "- Target weight gain: 0.25-0.5% body weight per week",
                "- Increase calories 5-10% if weight plateaus",
                "- Adjust carbs based on workout performance",
            ],
            Goal::Cardio => &[
                "- Keep body weight within 1% week to week",
                "- Increase carbs 10% when training volume rises",
                "- Reduce calories 5% during recovery weeks",
            ],
            Goal::General => &[
                "- Keep body weight within 1% week to week",
                "- Adjust calories 5% against any unwanted trend",
                "- Review protein intake monthly",
            ],
        },
    );

    out.push_str("\nMonitoring Metrics:\n");
    push_lines(
        &mut out,
        &[
            "- Weekly weight measurements",
            "- Progress photos every 2-4 weeks",
            "- Strength tracking",
            "- Energy levels and recovery quality",
        ],
    );
    out
}
