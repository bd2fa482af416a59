// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive menu.
//!
//! The console is generic over its input and output so it can run on
//! stdin/stdout or be driven by scripted input in tests.

pub mod prompt;

pub use prompt::Prompter;

use crate::error::AppError;
use crate::models::{ActivityLevel, PerformanceMetrics, Profile};
use crate::services::{
    generate_nutrition_plan, nutrition_suggestion, nutritionix::format_foods, workout_suggestion,
};
use crate::AppState;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// The six menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProfile,
    UpdateProfile,
    WorkoutPlan,
    NutritionPlan,
    ViewMetrics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewProfile,
        MenuChoice::UpdateProfile,
        MenuChoice::WorkoutPlan,
        MenuChoice::NutritionPlan,
        MenuChoice::ViewMetrics,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewProfile => "View User Profile",
            MenuChoice::UpdateProfile => "Update User Details",
            MenuChoice::WorkoutPlan => "Generate Workout Plan",
            MenuChoice::NutritionPlan => "Generate Nutrition Plan",
            MenuChoice::ViewMetrics => "View Performance Stats",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| "Please enter a valid number between 1 and 6.".to_string())
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Menu loop bound to shared application state.
pub struct Console<'a, R, W> {
    state: &'a AppState,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self
                .prompt
                .ask("\nChoose an option (1-6): ", |s| s.parse::<MenuChoice>())?
            else {
                tracing::info!("Input closed, leaving menu");
                return Ok(());
            };

            tracing::debug!(choice = %choice, "Menu choice");
            let step = match choice {
                MenuChoice::ViewProfile => self.view_profile()?,
                MenuChoice::UpdateProfile => self.update_profile()?,
                MenuChoice::WorkoutPlan => self.workout_plan().await?,
                MenuChoice::NutritionPlan => self.nutrition_plan().await?,
                MenuChoice::ViewMetrics => self.view_metrics()?,
                MenuChoice::Exit => {
                    writeln!(self.out(), "Thank you for using Performance Pro!")?;
                    Step::Quit
                }
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompt.output()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n=== Performance Pro Menu ===")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out(), "{}. {}", i + 1, choice)?;
        }
        Ok(())
    }

    fn ask_profile_id(&mut self) -> io::Result<Option<i64>> {
        self.prompt.ask("Enter user ID: ", |s| {
            s.parse::<i64>()
                .map_err(|_| "Please enter a valid user ID.".to_string())
        })
    }

    // ─── Store access ───

    /// Load a profile, reporting "not found" and store errors to the user.
    fn load_profile(&mut self, id: i64) -> io::Result<Option<Profile>> {
        match self.state.store.get_profile(id) {
            Ok(Some(profile)) => Ok(Some(profile)),
            Ok(None) => {
                writeln!(self.out(), "User not found.")?;
                Ok(None)
            }
            Err(e) => {
                tracing::error!(profile_id = id, error = %e, "Failed to load profile");
                writeln!(self.out(), "Error: could not load profile {}.", id)?;
                Ok(None)
            }
        }
    }

    /// Load metrics, reporting "not found" and store errors to the user.
    fn require_metrics(&mut self, id: i64) -> io::Result<Option<PerformanceMetrics>> {
        match self.state.store.get_metrics(id) {
            Ok(Some(metrics)) => Ok(Some(metrics)),
            Ok(None) => {
                writeln!(self.out(), "Performance stats not found for this user.")?;
                Ok(None)
            }
            Err(e) => {
                self.report_metrics_error(id, &e)?;
                Ok(None)
            }
        }
    }

    /// Load optional metrics. Store errors are reported and treated as absent.
    fn load_metrics(&mut self, id: i64) -> io::Result<Option<PerformanceMetrics>> {
        match self.state.store.get_metrics(id) {
            Ok(metrics) => Ok(metrics),
            Err(e) => {
                self.report_metrics_error(id, &e)?;
                Ok(None)
            }
        }
    }

    fn report_metrics_error(&mut self, id: i64, e: &AppError) -> io::Result<()> {
        tracing::error!(profile_id = id, error = %e, "Failed to load metrics");
        writeln!(self.out(), "Error: could not load performance stats for {}.", id)
    }

    // ─── Actions ───

    fn view_profile(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_profile_id()? else {
            return Ok(Step::Quit);
        };
        let Some(p) = self.load_profile(id)? else {
            return Ok(Step::Continue);
        };

        let out = self.out();
        writeln!(out, "\nUser Profile:")?;
        writeln!(out, "Name: {}", p.name)?;
        writeln!(out, "Goal: {}", p.goal)?;
        writeln!(out, "Weight: {} kg", p.weight_kg)?;
        writeln!(out, "Height: {} m", p.height_m)?;
        writeln!(out, "Age: {}", p.age)?;
        writeln!(out, "Gender: {}", p.gender)?;
        writeln!(out, "Activity Level: {}", p.activity_level)?;
        Ok(Step::Continue)
    }

    fn update_profile(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_profile_id()? else {
            return Ok(Step::Quit);
        };
        let Some(mut profile) = self.load_profile(id)? else {
            return Ok(Step::Continue);
        };

        let Some(weight) = self.prompt.ask_positive_f64("Enter new weight (kg): ")? else {
            return Ok(Step::Quit);
        };
        let Some(age) = self.prompt.ask_age("Enter new age: ")? else {
            return Ok(Step::Quit);
        };
        let Some(level) = self
            .prompt
            .ask("Enter new activity level (Low/Moderate/High): ", |s| {
                s.parse::<ActivityLevel>().map_err(|e| e.to_string())
            })?
        else {
            return Ok(Step::Quit);
        };

        profile.weight_kg = weight;
        profile.age = age;
        profile.activity_level = level;

        match self.state.store.update_profile(&profile) {
            Ok(_) => writeln!(self.out(), "User details updated successfully.")?,
            Err(e) => {
                tracing::error!(profile_id = id, error = %e, "Failed to update profile");
                writeln!(self.out(), "Error: could not update profile {}.", id)?;
            }
        }
        Ok(Step::Continue)
    }

    async fn workout_plan(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_profile_id()? else {
            return Ok(Step::Quit);
        };
        let Some(profile) = self.load_profile(id)? else {
            return Ok(Step::Continue);
        };
        let Some(metrics) = self.require_metrics(id)? else {
            return Ok(Step::Continue);
        };

        let plan = self.state.planner.generate(&profile, &metrics).await;

        writeln!(self.out(), "\nWorkout Plan:")?;
        writeln!(self.out(), "{}", plan)?;
        if plan.used_fallback() {
            writeln!(
                self.out(),
                "Note: the exercise database was unavailable, so default exercises are shown for some days."
            )?;
        }
        writeln!(self.out(), "\nExercise Suggestions:")?;
        writeln!(self.out(), "{}", workout_suggestion(&profile))?;

        match self
            .state
            .store
            .workout_templates(profile.goal, profile.activity_level)
        {
            Ok(templates) if !templates.is_empty() => {
                writeln!(self.out(), "Recommended Workouts:")?;
                for t in templates {
                    writeln!(
                        self.out(),
                        "- {}: {} minutes ({} intensity)",
                        t.exercise_name,
                        t.duration_minutes,
                        t.intensity
                    )?;
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(profile_id = id, error = %e, "Failed to load workout templates");
                writeln!(self.out(), "Error: could not load recommended workouts.")?;
            }
        }
        Ok(Step::Continue)
    }

    async fn nutrition_plan(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_profile_id()? else {
            return Ok(Step::Quit);
        };
        let Some(profile) = self.load_profile(id)? else {
            return Ok(Step::Continue);
        };
        let metrics = self.load_metrics(id)?;

        let plan = generate_nutrition_plan(&profile, metrics.as_ref());

        writeln!(self.out(), "\nNutrition Plan:")?;
        writeln!(self.out(), "{}", plan)?;
        writeln!(self.out(), "Nutrition Suggestions:")?;
        writeln!(self.out(), "{}", nutrition_suggestion(&profile))?;

        match self.state.store.nutrition_target(profile.goal) {
            Ok(Some(t)) => {
                writeln!(self.out(), "Reference Targets:")?;
                writeln!(self.out(), "Calories: {}", t.calorie_range)?;
                writeln!(
                    self.out(),
                    "Protein: {}g, Carbs: {}g, Fat: {}g",
                    t.protein_grams,
                    t.carb_grams,
                    t.fat_grams
                )?;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(profile_id = id, error = %e, "Failed to load nutrition target");
                writeln!(self.out(), "Error: could not load reference targets.")?;
            }
        }

        self.meal_lookup().await
    }

    async fn meal_lookup(&mut self) -> io::Result<Step> {
        let Some(meals) = self.state.meals.clone() else {
            writeln!(
                self.out(),
                "\nMeal lookup unavailable: Nutritionix credentials are not configured."
            )?;
            return Ok(Step::Continue);
        };

        let Some(query) = self
            .prompt
            .read_line("\nDescribe a meal to look up (or press Enter to skip): ")?
        else {
            return Ok(Step::Quit);
        };
        if query.is_empty() {
            return Ok(Step::Continue);
        }

        match meals.meal_nutrition(&query).await {
            Ok(foods) if foods.is_empty() => writeln!(self.out(), "No foods recognized.")?,
            Ok(foods) => write!(self.out(), "\n{}", format_foods(&foods))?,
            Err(e) => {
                tracing::warn!(error = %e, "Meal lookup failed");
                writeln!(self.out(), "Meal lookup failed: {}", e)?;
            }
        }
        Ok(Step::Continue)
    }

    fn view_metrics(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_profile_id()? else {
            return Ok(Step::Quit);
        };
        let Some(m) = self.require_metrics(id)? else {
            return Ok(Step::Continue);
        };

        write_metrics(self.out(), "Performance Statistics:", &m)?;
        Ok(Step::Continue)
    }
}

/// Print a metrics block under `heading`.
pub fn write_metrics<W: Write>(
    out: &mut W,
    heading: &str,
    m: &PerformanceMetrics,
) -> io::Result<()> {
    writeln!(out, "\n{}", heading)?;
    writeln!(out, "Strength Max: {} kg", m.strength_max_kg)?;
    writeln!(out, "Speed Time: {} seconds", m.speed_time_s)?;
    writeln!(out, "Endurance Duration: {} minutes", m.endurance_duration_min)?;
    writeln!(out, "Agility Score: {}", m.agility_score)
}
