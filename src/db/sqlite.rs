// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite-backed profile store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage)
//! - Performance stats (benchmark results per user)
//! - Workout and nutrition catalogs (curated suggestions by goal)

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::models::{
    ActivityLevel, Goal, NewMetrics, NewProfile, NutritionTarget, PerformanceMetrics, Profile,
    WorkoutTemplate,
};
use chrono::{SecondsFormat, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use validator::Validate;

const SCHEMA_SQL: &str = include_str!("schema.sql");

const PROFILE_COLUMNS: &str =
    "id, name, goal, weight, height, age, gender, activity_level, created_at, updated_at";
const METRICS_COLUMNS: &str =
    "id, user_id, strength_max, speed_time, endurance_duration, agility_score";

/// Relational store for profiles, metrics and the suggestion catalogs.
#[derive(Debug)]
pub struct ProfileStore {
    conn: Mutex<Connection>,
}

impl ProfileStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Database(format!("Failed to create {:?}: {}", parent, e)))?;
        }
        let conn = Connection::open(path)?;
        let store = Self::with_connection(conn)?;
        tracing::info!(path = %path.display(), "Opened profile store");
        Ok(store)
    }

    /// Private in-memory database (tests and benchmarks).
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("database mutex poisoned")))
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Insert a new profile and return it with its assigned ID.
    pub fn insert_profile(&self, new: &NewProfile) -> Result<Profile> {
        new.validate()?;
        let now = now_rfc3339();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (name, goal, weight, height, age, gender, activity_level, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                new.name,
                new.goal,
                new.weight_kg,
                new.height_m,
                new.age,
                new.gender,
                new.activity_level,
                now,
                now,
            ],
        )?;
        let id = conn.last_insert_rowid();

        tracing::info!(profile_id = id, name = %new.name, "Profile inserted");

        Ok(Profile {
            id,
            name: new.name.clone(),
            goal: new.goal,
            weight_kg: new.weight_kg,
            height_m: new.height_m,
            age: new.age,
            gender: new.gender.clone(),
            activity_level: new.activity_level,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Get a profile by ID.
    pub fn get_profile(&self, id: i64) -> Result<Option<Profile>> {
        let conn = self.conn()?;
        let profile = conn
            .query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM users WHERE id = ?1"),
                [id],
                profile_from_row,
            )
            .optional()?;
        Ok(profile)
    }

    /// Overwrite every mutable field of an existing profile.
    ///
    /// Returns the stored profile with a refreshed `updated_at`.
    pub fn update_profile(&self, profile: &Profile) -> Result<Profile> {
        let now = now_rfc3339();
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE users
             SET name = ?1, goal = ?2, weight = ?3, height = ?4, age = ?5, gender = ?6,
                 activity_level = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                profile.name,
                profile.goal,
                profile.weight_kg,
                profile.height_m,
                profile.age,
                profile.gender,
                profile.activity_level,
                now,
                profile.id,
            ],
        )?;

        if changed == 0 {
            return Err(AppError::NotFound(format!("Profile {}", profile.id)));
        }

        tracing::info!(profile_id = profile.id, "Profile updated");

        Ok(Profile {
            updated_at: now,
            ..profile.clone()
        })
    }

    /// Number of stored profiles.
    pub fn count_profiles(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", tables::USERS),
            [],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    // ─── Metrics Operations ──────────────────────────────────────

    /// Record metrics for an existing profile.
    ///
    /// Fails with `AppError::Database` if the profile does not exist.
    pub fn insert_metrics(&self, new: &NewMetrics) -> Result<PerformanceMetrics> {
        new.validate()?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO performance_stats (user_id, strength_max, speed_time, endurance_duration, agility_score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.profile_id,
                new.strength_max_kg,
                new.speed_time_s,
                new.endurance_duration_min,
                new.agility_score,
            ],
        )?;
        let id = conn.last_insert_rowid();

        tracing::info!(profile_id = new.profile_id, metrics_id = id, "Performance stats inserted");

        Ok(PerformanceMetrics {
            id,
            profile_id: new.profile_id,
            strength_max_kg: new.strength_max_kg,
            speed_time_s: new.speed_time_s,
            endurance_duration_min: new.endurance_duration_min,
            agility_score: new.agility_score,
        })
    }

    /// Most recently recorded metrics for a profile.
    pub fn get_metrics(&self, profile_id: i64) -> Result<Option<PerformanceMetrics>> {
        let conn = self.conn()?;
        let metrics = conn
            .query_row(
                &format!(
                    "SELECT {METRICS_COLUMNS} FROM performance_stats
                     WHERE user_id = ?1 ORDER BY id DESC LIMIT 1"
                ),
                [profile_id],
                metrics_from_row,
            )
            .optional()?;
        Ok(metrics)
    }

    // ─── Catalog Operations ──────────────────────────────────────

    pub fn insert_workout_template(&self, template: &WorkoutTemplate) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO workouts (goal, activity_level, exercise_name, duration_minutes, intensity)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                template.goal,
                template.activity_level,
                template.exercise_name,
                template.duration_minutes,
                template.intensity,
            ],
        )?;
        tracing::debug!(exercise = %template.exercise_name, "Workout template inserted");
        Ok(())
    }

    /// Catalog workouts for a goal/activity-level pair, in insertion order.
    pub fn workout_templates(
        &self,
        goal: Goal,
        activity_level: ActivityLevel,
    ) -> Result<Vec<WorkoutTemplate>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT goal, activity_level, exercise_name, duration_minutes, intensity
             FROM workouts WHERE goal = ?1 AND activity_level = ?2 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![goal, activity_level], |row| {
            Ok(WorkoutTemplate {
                goal: row.get(0)?,
                activity_level: row.get(1)?,
                exercise_name: row.get(2)?,
                duration_minutes: row.get(3)?,
                intensity: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn insert_nutrition_target(&self, target: &NutritionTarget) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO nutrition (goal, calorie_range, protein_grams, carb_grams, fat_grams)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                target.goal,
                target.calorie_range,
                target.protein_grams,
                target.carb_grams,
                target.fat_grams,
            ],
        )?;
        tracing::debug!(goal = %target.goal, "Nutrition target inserted");
        Ok(())
    }

    /// First catalog nutrition target for a goal.
    pub fn nutrition_target(&self, goal: Goal) -> Result<Option<NutritionTarget>> {
        let conn = self.conn()?;
        let target = conn
            .query_row(
                "SELECT goal, calorie_range, protein_grams, carb_grams, fat_grams
                 FROM nutrition WHERE goal = ?1 ORDER BY id LIMIT 1",
                [goal],
                |row| {
                    Ok(NutritionTarget {
                        goal: row.get(0)?,
                        calorie_range: row.get(1)?,
                        protein_grams: row.get(2)?,
                        carb_grams: row.get(3)?,
                        fat_grams: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(target)
    }

    // ─── Sample Data ─────────────────────────────────────────────

    /// Insert the demo profiles, their metrics and a small catalog.
    ///
    /// Does nothing (returns `false`) when any profile already exists.
    pub fn seed_sample_data(&self) -> Result<bool> {
        if self.count_profiles()? > 0 {
            tracing::debug!("Profiles already present, skipping sample data");
            return Ok(false);
        }

        for (profile, (strength, speed, endurance, agility)) in sample_profiles() {
            let stored = self.insert_profile(&profile)?;
            self.insert_metrics(&NewMetrics {
                profile_id: stored.id,
                strength_max_kg: strength,
                speed_time_s: speed,
                endurance_duration_min: endurance,
                agility_score: agility,
            })?;
        }

        for template in sample_workout_templates() {
            self.insert_workout_template(&template)?;
        }
        for target in sample_nutrition_targets() {
            self.insert_nutrition_target(&target)?;
        }

        tracing::info!("Sample data created");
        Ok(true)
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        goal: row.get(2)?,
        weight_kg: row.get(3)?,
        height_m: row.get(4)?,
        age: row.get(5)?,
        gender: row.get(6)?,
        activity_level: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn metrics_from_row(row: &Row<'_>) -> rusqlite::Result<PerformanceMetrics> {
    Ok(PerformanceMetrics {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        strength_max_kg: row.get(2)?,
        speed_time_s: row.get(3)?,
        endurance_duration_min: row.get(4)?,
        agility_score: row.get(5)?,
    })
}

// Goals and activity levels are stored as their display labels.

impl ToSql for Goal {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Goal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: AppError| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for ActivityLevel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for ActivityLevel {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: AppError| FromSqlError::Other(Box::new(e)))
    }
}

/// Demo users with (strength, speed, endurance, agility).
fn sample_profiles() -> Vec<(NewProfile, (f64, f64, f64, f64))> {
    vec![
        (
            NewProfile {
                name: "John Doe".to_string(),
                goal: Goal::WeightLoss,
                weight_kg: 85.0,
                height_m: 1.75,
                age: 25,
                gender: "Male".to_string(),
                activity_level: ActivityLevel::Moderate,
            },
            (120.0, 12.5, 30.0, 7.8),
        ),
        (
            NewProfile {
                name: "Jane Smith".to_string(),
                goal: Goal::MuscleGain,
                weight_kg: 65.0,
                height_m: 1.65,
                age: 28,
                gender: "Female".to_string(),
                activity_level: ActivityLevel::High,
            },
            (95.0, 10.0, 45.0, 8.5),
        ),
        (
            NewProfile {
                name: "Mike Johnson".to_string(),
                goal: Goal::Cardio,
                weight_kg: 75.0,
                height_m: 1.80,
                age: 35,
                gender: "Male".to_string(),
                activity_level: ActivityLevel::Low,
            },
            (80.0, 11.2, 35.0, 7.0),
        ),
    ]
}

fn sample_workout_templates() -> Vec<WorkoutTemplate> {
    let row = |goal: Goal,
               activity_level: ActivityLevel,
               name: &str,
               minutes: u32,
               intensity: &str| WorkoutTemplate {
        goal,
        activity_level,
        exercise_name: name.to_string(),
        duration_minutes: minutes,
        intensity: intensity.to_string(),
    };
    vec![
        row(Goal::WeightLoss, ActivityLevel::Moderate, "Jump Rope", 20, "High"),
        row(Goal::WeightLoss, ActivityLevel::Moderate, "Kettlebell Swings", 15, "Moderate"),
        row(Goal::MuscleGain, ActivityLevel::High, "Barbell Back Squat", 45, "High"),
        row(Goal::MuscleGain, ActivityLevel::High, "Weighted Pull-Ups", 30, "High"),
        row(Goal::Cardio, ActivityLevel::Low, "Brisk Walk", 30, "Low"),
    ]
}

fn sample_nutrition_targets() -> Vec<NutritionTarget> {
    vec![
        NutritionTarget {
            goal: Goal::WeightLoss,
            calorie_range: "1800-2000".to_string(),
            protein_grams: 170,
            carb_grams: 150,
            fat_grams: 60,
        },
        NutritionTarget {
            goal: Goal::MuscleGain,
            calorie_range: "2600-2900".to_string(),
            protein_grams: 160,
            carb_grams: 320,
            fat_grams: 75,
        },
        NutritionTarget {
            goal: Goal::Cardio,
            calorie_range: "2200-2400".to_string(),
            protein_grams: 120,
            carb_grams: 300,
            fat_grams: 70,
        },
    ]
}
