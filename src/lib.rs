// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Performance Pro: console fitness tracker
//!
//! This crate stores user profiles and performance metrics in SQLite and
//! generates rule-based workout and nutrition plans, optionally enriched
//! by the ExerciseDB and Nutritionix APIs.

pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use db::ProfileStore;
use services::{ExerciseLookup, MealNutritionSource, NutritionixClient, WorkoutPlanner};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ProfileStore,
    pub planner: WorkoutPlanner,
    /// Meal lookup; `None` when Nutritionix credentials are not configured.
    pub meals: Option<Arc<dyn MealNutritionSource>>,
}

impl AppState {
    /// Wire up the HTTP-backed services described by `config`.
    pub fn from_config(config: Config, store: ProfileStore) -> Self {
        let planner = WorkoutPlanner::new(ExerciseLookup::from_config(&config));
        let meals: Option<Arc<dyn MealNutritionSource>> = if config.has_nutritionix_credentials() {
            Some(Arc::new(NutritionixClient::from_config(&config)))
        } else {
            None
        };

        Self {
            config,
            store,
            planner,
            meals,
        }
    }
}
