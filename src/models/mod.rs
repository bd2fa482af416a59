// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod metrics;
pub mod profile;
pub mod training;

pub use catalog::{NutritionTarget, WorkoutTemplate};
pub use metrics::{NewMetrics, PerformanceMetrics};
pub use profile::{ActivityLevel, Goal, NewProfile, Profile};
pub use training::{Equipment, TrainingDay};
