// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ExerciseDB client and cached exercise lookup.
//!
//! Handles:
//! - Mapping split days onto ExerciseDB body-part vocabulary
//! - Fetching and equipment-filtering exercises
//! - Caching formatted results per (region, equipment)
//! - Canned fallback content when the API is unavailable

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Equipment, TrainingDay};
use async_trait::async_trait;
use dashmap::DashMap;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// ExerciseDB body-part categories used by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRegion {
    Chest,
    Back,
    UpperLegs,
    UpperArms,
    LowerLegs,
    Waist,
    Cardio,
    FullBody,
}

impl BodyRegion {
    /// Fixed mapping from split days to the API's body parts.
    pub fn for_day(day: TrainingDay) -> Self {
        match day {
            TrainingDay::Push => BodyRegion::Chest,
            TrainingDay::Pull => BodyRegion::Back,
            TrainingDay::Legs => BodyRegion::UpperLegs,
            TrainingDay::UpperBody => BodyRegion::UpperArms,
            TrainingDay::LowerBody => BodyRegion::LowerLegs,
            TrainingDay::Core => BodyRegion::Waist,
            TrainingDay::Cardio => BodyRegion::Cardio,
            TrainingDay::FullBody
            | TrainingDay::Hiit
            | TrainingDay::Liss
            | TrainingDay::ActiveRecovery
            | TrainingDay::Rest => BodyRegion::FullBody,
        }
    }

    /// Path segment expected by `/exercises/bodyPart/{region}`.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyRegion::Chest => "chest",
            BodyRegion::Back => "back",
            BodyRegion::UpperLegs => "upper legs",
            BodyRegion::UpperArms => "upper arms",
            BodyRegion::LowerLegs => "lower legs",
            BodyRegion::Waist => "waist",
            BodyRegion::Cardio => "cardio",
            BodyRegion::FullBody => "full body",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a piece of looked-up content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Fetched from the API during this call.
    Live,
    /// Served from the lookup cache (originally live).
    Cached,
    /// Canned content substituted after a failure.
    Fallback,
}

impl Provenance {
    pub fn is_authoritative(self) -> bool {
        !matches!(self, Provenance::Fallback)
    }
}

/// Content tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub content: T,
    pub provenance: Provenance,
}

impl<T> Sourced<T> {
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExerciseSource - raw API access
// ─────────────────────────────────────────────────────────────────────────────

/// One exercise as returned by ExerciseDB.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default, rename = "bodyPart")]
    pub body_part: String,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}

/// Anything that can list exercises for a body region.
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    async fn exercises_for(&self, region: BodyRegion) -> Result<Vec<ExerciseRecord>>;
}

/// ExerciseDB (RapidAPI) client.
#[derive(Clone)]
pub struct ExerciseDbClient {
    http: reqwest::Client,
    base_url: String,
    host: String,
    api_key: Option<SecretString>,
}

impl ExerciseDbClient {
    pub fn new(base_url: String, host: String, api_key: Option<SecretString>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            host,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.exercisedb_base_url.clone(),
            config.exercisedb_host.clone(),
            config.exercisedb_api_key.clone(),
        )
    }

    fn endpoint(&self, region: BodyRegion) -> String {
        format!(
            "{}/bodyPart/{}",
            self.base_url,
            urlencoding::encode(region.as_str())
        )
    }

    /// Check response status and return error if not successful.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        region: BodyRegion,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                400 => {
                    tracing::warn!(region = %region, "ExerciseDB rejected request (400)");
                    AppError::ExerciseApi(format!("bad request for body part '{}'", region))
                }
                401 | 403 => {
                    tracing::warn!(
                        status = %status,
                        "ExerciseDB authentication failed; check API key"
                    );
                    AppError::ExerciseApi(AppError::AUTH_FAILED.to_string())
                }
                429 => {
                    tracing::warn!("ExerciseDB rate limit hit (429)");
                    AppError::ExerciseApi(AppError::RATE_LIMITED.to_string())
                }
                _ => AppError::ExerciseApi(format!("HTTP {}: {}", status, body)),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExerciseApi(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl ExerciseSource for ExerciseDbClient {
    async fn exercises_for(&self, region: BodyRegion) -> Result<Vec<ExerciseRecord>> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::ExerciseApi("API key not configured".to_string()))?;

        let response = self
            .http
            .get(self.endpoint(region))
            .header("X-RapidAPI-Key", api_key.expose_secret().as_str())
            .header("X-RapidAPI-Host", &self.host)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::ExerciseApi(e.to_string()))?;

        self.check_response_json(region, response).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExerciseCache - formatted results per (region, equipment)
// ─────────────────────────────────────────────────────────────────────────────

/// Cache key for formatted exercise lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseCacheKey {
    pub region: BodyRegion,
    pub equipment: Equipment,
}

/// Storage for formatted exercise lists.
pub trait ExerciseCache: Send + Sync {
    fn get(&self, key: &ExerciseCacheKey) -> Option<String>;
    fn put(&self, key: ExerciseCacheKey, exercises: String);
    fn clear(&self);
}

/// Unbounded process-lifetime cache. No eviction.
#[derive(Debug, Default)]
pub struct InMemoryExerciseCache {
    entries: DashMap<ExerciseCacheKey, String>,
}

impl InMemoryExerciseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExerciseCache for InMemoryExerciseCache {
    fn get(&self, key: &ExerciseCacheKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: ExerciseCacheKey, exercises: String) {
        self.entries.insert(key, exercises);
    }

    fn clear(&self) {
        self.entries.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExerciseLookup - high-level lookup used by the planner
// ─────────────────────────────────────────────────────────────────────────────

/// Cached exercise lookup with canned fallback.
///
/// Never fails: any upstream problem yields `Provenance::Fallback` content.
#[derive(Clone)]
pub struct ExerciseLookup {
    source: Arc<dyn ExerciseSource>,
    cache: Arc<dyn ExerciseCache>,
}

impl ExerciseLookup {
    pub fn new(source: Arc<dyn ExerciseSource>, cache: Arc<dyn ExerciseCache>) -> Self {
        Self { source, cache }
    }

    /// ExerciseDB client with a fresh in-memory cache.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ExerciseDbClient::from_config(config)),
            Arc::new(InMemoryExerciseCache::new()),
        )
    }

    /// Exercises for a split day, filtered to the given equipment.
    pub async fn fetch(&self, day: TrainingDay, equipment: Equipment) -> Sourced<String> {
        let region = BodyRegion::for_day(day);
        let key = ExerciseCacheKey { region, equipment };

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(region = %region, equipment = %equipment, "Exercise cache hit");
            return Sourced {
                content: cached,
                provenance: Provenance::Cached,
            };
        }

        match self.source.exercises_for(region).await {
            Ok(records) => match format_exercises(&records, equipment) {
                Some(formatted) => {
                    self.cache.put(key, formatted.clone());
                    tracing::info!(region = %region, equipment = %equipment, "Fetched exercises");
                    Sourced {
                        content: formatted,
                        provenance: Provenance::Live,
                    }
                }
                None => {
                    tracing::info!(
                        region = %region,
                        equipment = %equipment,
                        returned = records.len(),
                        "No exercises match equipment, using defaults"
                    );
                    fallback(region, equipment)
                }
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    region = %region,
                    "Exercise lookup failed, using defaults"
                );
                fallback(region, equipment)
            }
        }
    }

    /// Drop every cached entry.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn fallback(region: BodyRegion, equipment: Equipment) -> Sourced<String> {
    Sourced {
        content: default_exercises(region, equipment),
        provenance: Provenance::Fallback,
    }
}

/// Format exercises matching `equipment` (case-insensitive).
///
/// Returns `None` when nothing matches.
pub fn format_exercises(records: &[ExerciseRecord], equipment: Equipment) -> Option<String> {
    let mut out = String::new();

    for record in records
        .iter()
        .filter(|r| r.equipment.eq_ignore_ascii_case(equipment.as_str()))
    {
        out.push_str(&format!("Exercise: {}\n", record.name));
        out.push_str(&format!("Target: {}\n", record.target));
        if let Some(steps) = &record.instructions {
            out.push_str("Instructions:\n");
            for (i, step) in steps.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, step));
            }
        }
        out.push('\n');
    }

    (!out.is_empty()).then_some(out)
}

// ─── Canned content ──────────────────────────────────────────────────────────

struct CannedExercise {
    name: &'static str,
    target: &'static str,
    steps: &'static [&'static str],
}

const CHEST: &[CannedExercise] = &[
    CannedExercise {
        name: "Bench Press",
        target: "Chest",
        steps: &[
            "Lie on bench with feet flat on the floor",
            "Grip the bar slightly wider than shoulder width",
            "Lower the bar to chest level",
            "Press the bar back up to starting position",
            "Repeat for desired reps",
        ],
    },
    CannedExercise {
        name: "Push-Ups",
        target: "Chest",
        steps: &[
            "Start in plank position",
            "Lower body until chest nearly touches ground",
            "Push back up to starting position",
            "Maintain straight body throughout movement",
        ],
    },
];

const BACK: &[CannedExercise] = &[
    CannedExercise {
        name: "Bent Over Rows",
        target: "Back",
        steps: &[
            "Bend at hips and knees, keeping back straight",
            "Grip weight with palms facing down",
            "Pull weight to lower chest",
            "Lower weight back down with control",
            "Repeat for desired reps",
        ],
    },
    CannedExercise {
        name: "Lat Pulldowns",
        target: "Back",
        steps: &[
            "Sit at lat pulldown machine",
            "Grip bar wider than shoulder width",
            "Pull bar down to upper chest",
            "Control the weight back up",
            "Maintain proper posture throughout",
        ],
    },
];

const LEGS: &[CannedExercise] = &[
    CannedExercise {
        name: "Squats",
        target: "Legs",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Lower body by bending knees and hips",
            "Keep chest up and back straight",
            "Push through heels to return to start",
            "Maintain control throughout movement",
        ],
    },
    CannedExercise {
        name: "Lunges",
        target: "Legs",
        steps: &[
            "Stand with feet hip-width apart",
            "Step forward with one leg",
            "Lower back knee toward ground",
            "Push back to starting position",
            "Alternate legs",
        ],
    },
];

const ARMS: &[CannedExercise] = &[
    CannedExercise {
        name: "Bicep Curls",
        target: "Arms",
        steps: &[
            "Stand holding weights at sides",
            "Curl weights toward shoulders",
            "Keep elbows close to body",
            "Lower with control",
            "Maintain proper form",
        ],
    },
    CannedExercise {
        name: "Tricep Extensions",
        target: "Arms",
        steps: &[
            "Hold weight overhead",
            "Lower weight behind head",
            "Keep elbows pointing forward",
            "Extend arms fully",
            "Control the movement",
        ],
    },
];

const CORE: &[CannedExercise] = &[
    CannedExercise {
        name: "Planks",
        target: "Core",
        steps: &[
            "Start in forearm plank position",
            "Keep body in straight line",
            "Engage core muscles",
            "Hold position",
            "Maintain proper breathing",
        ],
    },
    CannedExercise {
        name: "Russian Twists",
        target: "Core",
        steps: &[
            "Sit with knees bent",
            "Lean back slightly",
            "Twist torso side to side",
            "Keep feet off ground",
            "Control the movement",
        ],
    },
];

const FULL_BODY: &[CannedExercise] = &[
    CannedExercise {
        name: "Bodyweight Squats",
        target: "Full Body",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Lower body by bending knees and hips",
            "Keep chest up and back straight",
            "Return to starting position",
            "Repeat for desired reps",
        ],
    },
    CannedExercise {
        name: "Push-Ups",
        target: "Full Body",
        steps: &[
            "Start in plank position",
            "Lower chest to ground",
            "Push back up",
            "Keep body straight",
            "Maintain core tension",
        ],
    },
];

fn canned_for(region: BodyRegion) -> &'static [CannedExercise] {
    match region {
        BodyRegion::Chest => CHEST,
        BodyRegion::Back => BACK,
        BodyRegion::UpperLegs | BodyRegion::LowerLegs => LEGS,
        BodyRegion::UpperArms => ARMS,
        BodyRegion::Waist => CORE,
        BodyRegion::Cardio | BodyRegion::FullBody => FULL_BODY,
    }
}

/// Canned exercises used when the API cannot be reached.
pub fn default_exercises(region: BodyRegion, equipment: Equipment) -> String {
    let mut out = format!("Default exercises for {} with {}:\n\n", region, equipment);
    for exercise in canned_for(region) {
        out.push_str(&format!("Exercise: {}\n", exercise.name));
        out.push_str(&format!("Target: {}\n", exercise.target));
        out.push_str("Instructions:\n");
        for (i, step) in exercise.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, equipment: &str, instructions: Option<Vec<&str>>) -> ExerciseRecord {
        ExerciseRecord {
            name: name.to_string(),
            target: "pectorals".to_string(),
            equipment: equipment.to_string(),
            body_part: "chest".to_string(),
            instructions: instructions.map(|v| v.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_day_to_region_mapping() {
        assert_eq!(BodyRegion::for_day(TrainingDay::Push), BodyRegion::Chest);
        assert_eq!(BodyRegion::for_day(TrainingDay::Legs), BodyRegion::UpperLegs);
        assert_eq!(BodyRegion::for_day(TrainingDay::Core), BodyRegion::Waist);
        assert_eq!(BodyRegion::for_day(TrainingDay::Hiit), BodyRegion::FullBody);
        assert_eq!(BodyRegion::for_day(TrainingDay::Rest), BodyRegion::FullBody);
    }

    #[test]
    fn test_endpoint_encodes_region() {
        let client = ExerciseDbClient::new(
            "https://example.test/exercises/".to_string(),
            "example.test".to_string(),
            None,
        );
        assert_eq!(
            client.endpoint(BodyRegion::UpperLegs),
            "https://example.test/exercises/bodyPart/upper%20legs"
        );
    }

    #[test]
    fn test_format_filters_equipment_case_insensitively() {
        let records = vec![
            record("barbell bench press", "Barbell", Some(vec!["Lie down", "Press"])),
            record("dumbbell fly", "dumbbell", None),
        ];

        let formatted = format_exercises(&records, Equipment::Barbell).unwrap();
        assert_eq!(
            formatted,
            "Exercise: barbell bench press\nTarget: pectorals\nInstructions:\n1. Lie down\n2. Press\n\n"
        );

        let dumbbell = format_exercises(&records, Equipment::Dumbbell).unwrap();
        assert!(dumbbell.contains("dumbbell fly"));
        assert!(!dumbbell.contains("Instructions:"));
    }

    #[test]
    fn test_format_returns_none_without_matches() {
        let records = vec![record("cable crossover", "cable", None)];
        assert!(format_exercises(&records, Equipment::Dumbbell).is_none());
        assert!(format_exercises(&[], Equipment::Dumbbell).is_none());
    }

    #[test]
    fn test_default_exercises_per_region() {
        let chest = default_exercises(BodyRegion::Chest, Equipment::Barbell);
        assert!(chest.starts_with("Default exercises for chest with barbell:\n\n"));
        assert!(chest.contains("Exercise: Bench Press"));

        let legs = default_exercises(BodyRegion::LowerLegs, Equipment::Dumbbell);
        assert!(legs.contains("Exercise: Squats"));

        let full = default_exercises(BodyRegion::Cardio, Equipment::Dumbbell);
        assert!(full.contains("Exercise: Bodyweight Squats"));
    }

    #[test]
    fn test_record_deserializes_api_shape() {
        let json = r#"[{"bodyPart":"chest","equipment":"barbell","id":"0025",
            "name":"barbell bench press","target":"pectorals",
            "instructions":["Lie flat","Press up"]}]"#;
        let records: Vec<ExerciseRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].body_part, "chest");
        assert_eq!(records[0].instructions.as_ref().map(Vec::len), Some(2));
    }
}
