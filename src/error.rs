// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the store, lookups and console.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("ExerciseDB API error: {0}")]
    ExerciseApi(String),

    #[error("Nutritionix API error: {0}")]
    NutritionApi(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Marker for upstream rate limiting (HTTP 429).
    pub const RATE_LIMITED: &'static str = "rate limit exceeded";
    /// Marker for rejected API credentials (HTTP 401).
    pub const AUTH_FAILED: &'static str = "authentication failed";

    /// True if this error came from one of the external HTTP lookups.
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::ExerciseApi(_) | AppError::NutritionApi(_))
    }

    /// True if the upstream rejected our credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            AppError::ExerciseApi(msg) | AppError::NutritionApi(msg) => {
                msg.contains(Self::AUTH_FAILED)
            }
            _ => false,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
