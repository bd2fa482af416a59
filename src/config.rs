// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! API credentials are never compiled in; they come from the environment
//! (or a local `.env` file) and are held as `SecretString`.

use secrecy::SecretString;
use std::env;

const DEFAULT_DATABASE_PATH: &str = "performance_tracker.db";
const DEFAULT_EXERCISEDB_BASE_URL: &str = "https://exercisedb.p.rapidapi.com/exercises";
const DEFAULT_EXERCISEDB_HOST: &str = "exercisedb.p.rapidapi.com";
const DEFAULT_NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Path of the SQLite database file
    pub database_path: String,
    /// ExerciseDB base URL (up to and including `/exercises`)
    pub exercisedb_base_url: String,
    /// Value for the `X-RapidAPI-Host` header
    pub exercisedb_host: String,
    /// Nutritionix base URL (up to and including `/v2`)
    pub nutritionix_base_url: String,
    /// Nutritionix application ID
    pub nutritionix_app_id: Option<String>,
    /// Insert the sample profiles when the store is empty
    pub seed_sample_data: bool,

    // --- Secrets ---
    /// RapidAPI key for ExerciseDB
    pub exercisedb_api_key: Option<SecretString>,
    /// Nutritionix application key
    pub nutritionix_app_key: Option<SecretString>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let config = Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            exercisedb_base_url: env::var("EXERCISEDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EXERCISEDB_BASE_URL.to_string()),
            exercisedb_host: env::var("EXERCISEDB_API_HOST")
                .unwrap_or_else(|_| DEFAULT_EXERCISEDB_HOST.to_string()),
            nutritionix_base_url: env::var("NUTRITIONIX_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NUTRITIONIX_BASE_URL.to_string()),
            nutritionix_app_id: non_empty_var("NUTRITIONIX_APP_ID"),
            seed_sample_data: parse_bool("SEED_SAMPLE_DATA", true)?,

            exercisedb_api_key: non_empty_var("EXERCISEDB_API_KEY").map(SecretString::new),
            nutritionix_app_key: non_empty_var("NUTRITIONIX_APP_KEY").map(SecretString::new),
        };

        if config.exercisedb_api_key.is_none() {
            tracing::warn!("EXERCISEDB_API_KEY not set; workout plans will use default exercises");
        }
        if !config.has_nutritionix_credentials() {
            tracing::warn!("Nutritionix credentials not set; meal lookup disabled");
        }

        Ok(config)
    }

    /// Config for tests: local paths, no credentials, no seeding.
    pub fn test_default() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            exercisedb_base_url: "http://127.0.0.1:9/exercises".to_string(),
            exercisedb_host: DEFAULT_EXERCISEDB_HOST.to_string(),
            nutritionix_base_url: "http://127.0.0.1:9/v2".to_string(),
            nutritionix_app_id: None,
            seed_sample_data: false,
            exercisedb_api_key: None,
            nutritionix_app_key: None,
        }
    }

    /// Both halves of the Nutritionix credential pair are present.
    pub fn has_nutritionix_credentials(&self) -> bool {
        self.nutritionix_app_id.is_some() && self.nutritionix_app_key.is_some()
    }
}

/// Read a variable, trimmed, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(name, v)),
        },
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
