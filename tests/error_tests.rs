// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use performance_pro::error::AppError;

#[test]
fn test_is_auth_error_matches() {
    let err = AppError::ExerciseApi(AppError::AUTH_FAILED.to_string());
    assert!(err.is_auth_error());

    let err = AppError::NutritionApi(format!("{} (401)", AppError::AUTH_FAILED));
    assert!(err.is_auth_error());
}

#[test]
fn test_is_auth_error_no_match() {
    let err = AppError::ExerciseApi(AppError::RATE_LIMITED.to_string());
    assert!(!err.is_auth_error());

    let err = AppError::ExerciseApi("HTTP 500 Internal Server Error: ".to_string());
    assert!(!err.is_auth_error());

    let err = AppError::BadRequest(AppError::AUTH_FAILED.to_string());
    assert!(!err.is_auth_error());
}

#[test]
fn test_is_upstream() {
    assert!(AppError::ExerciseApi("x".to_string()).is_upstream());
    assert!(AppError::NutritionApi("x".to_string()).is_upstream());
    assert!(!AppError::Database("x".to_string()).is_upstream());
    assert!(!AppError::NotFound("x".to_string()).is_upstream());
}

#[test]
fn test_rusqlite_error_maps_to_database() {
    let err: AppError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, AppError::Database(_)));
}

#[test]
fn test_display_messages() {
    let err = AppError::NotFound("profile 9".to_string());
    assert_eq!(err.to_string(), "Resource not found: profile 9");

    let err: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
