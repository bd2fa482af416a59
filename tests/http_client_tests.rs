// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use performance_pro::error::AppError;
use performance_pro::models::{Equipment, TrainingDay};
use performance_pro::services::exercise_db::BodyRegion;
use performance_pro::services::{
    ExerciseDbClient, ExerciseLookup, ExerciseSource, InMemoryExerciseCache, MealNutritionSource,
    NutritionixClient, Provenance,
};
use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_HOST: &str = "exercisedb.test";
const API_KEY: &str = "rapid-test-key";

fn exercise_client(server: &MockServer) -> ExerciseDbClient {
    ExerciseDbClient::new(
        format!("{}/exercises", server.uri()),
        API_HOST.to_string(),
        Some(SecretString::new(API_KEY.to_string())),
    )
}

fn nutritionix_client(server: &MockServer) -> NutritionixClient {
    NutritionixClient::new(
        format!("{}/v2", server.uri()),
        Some("app-123".to_string()),
        Some(SecretString::new("key-456".to_string())),
    )
}

fn exercises_json() -> serde_json::Value {
    json!([
        {
            "name": "barbell full squat",
            "target": "glutes",
            "equipment": "barbell",
            "bodyPart": "upper legs",
            "instructions": ["Stand with feet shoulder-width apart", "Squat down"]
        },
        {
            "name": "dumbbell lunge",
            "target": "quads",
            "equipment": "dumbbell",
            "bodyPart": "upper legs"
        }
    ])
}

async fn exercise_error(status: u16) -> AppError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises/bodyPart/chest"))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
        .mount(&server)
        .await;

    exercise_client(&server)
        .exercises_for(BodyRegion::Chest)
        .await
        .unwrap_err()
}

// ─── ExerciseDB ───

#[tokio::test]
async fn test_exercise_request_path_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises/bodyPart/upper%20legs"))
        .and(header("X-RapidAPI-Key", API_KEY))
        .and(header("X-RapidAPI-Host", API_HOST))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises_json()))
        .expect(1)
        .mount(&server)
        .await;

    let records = exercise_client(&server)
        .exercises_for(BodyRegion::UpperLegs)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].body_part, "upper legs");
    assert_eq!(records[1].instructions, None);
}

#[tokio::test]
async fn test_exercise_status_mapping() {
    match exercise_error(400).await {
        AppError::ExerciseApi(msg) => assert!(msg.contains("bad request"), "got {}", msg),
        other => panic!("unexpected error {:?}", other),
    }

    for status in [401, 403] {
        let err = exercise_error(status).await;
        assert!(err.is_auth_error(), "status {} gave {:?}", status, err);
    }

    match exercise_error(429).await {
        AppError::ExerciseApi(msg) => assert_eq!(msg, AppError::RATE_LIMITED),
        other => panic!("unexpected error {:?}", other),
    }

    match exercise_error(500).await {
        AppError::ExerciseApi(msg) => {
            assert!(msg.starts_with("HTTP 500"), "got {}", msg);
            assert!(msg.contains("upstream says no"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_exercise_invalid_json_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = exercise_client(&server)
        .exercises_for(BodyRegion::Back)
        .await
        .unwrap_err();
    match err {
        AppError::ExerciseApi(msg) => assert!(msg.starts_with("JSON parse error")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_exercise_missing_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = ExerciseDbClient::new(
        format!("{}/exercises", server.uri()),
        API_HOST.to_string(),
        None,
    );
    let err = client.exercises_for(BodyRegion::Chest).await.unwrap_err();
    assert!(matches!(err, AppError::ExerciseApi(_)));
}

#[tokio::test]
async fn test_lookup_over_http_live_then_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises/bodyPart/upper%20legs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises_json()))
        .expect(1)
        .mount(&server)
        .await;

    let lookup = ExerciseLookup::new(
        Arc::new(exercise_client(&server)),
        Arc::new(InMemoryExerciseCache::new()),
    );

    let live = lookup.fetch(TrainingDay::Legs, Equipment::Barbell).await;
    assert_eq!(live.provenance, Provenance::Live);
    assert!(live.content.contains("Exercise: barbell full squat"));
    assert!(live.content.contains("1. Stand with feet shoulder-width apart"));
    assert!(!live.content.contains("dumbbell lunge"));

    let cached = lookup.fetch(TrainingDay::Legs, Equipment::Barbell).await;
    assert_eq!(cached.provenance, Provenance::Cached);
}

#[tokio::test]
async fn test_lookup_over_http_falls_back_on_errors() {
    for status in [429, 500] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .expect(2)
            .mount(&server)
            .await;

        let lookup = ExerciseLookup::new(
            Arc::new(exercise_client(&server)),
            Arc::new(InMemoryExerciseCache::new()),
        );

        let first = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
        assert_eq!(first.provenance, Provenance::Fallback, "status {}", status);
        assert!(first
            .content
            .starts_with("Default exercises for chest with dumbbell:"));

        // Fallback is not cached, so the API is asked again
        let second = lookup.fetch(TrainingDay::Push, Equipment::Dumbbell).await;
        assert!(second.is_fallback());
    }
}

// ─── Nutritionix ───

#[tokio::test]
async fn test_meal_request_body_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/natural/nutrients"))
        .and(header("x-app-id", "app-123"))
        .and(header("x-app-key", "key-456"))
        .and(body_json(json!({ "query": "1 apple and a black coffee" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foods": [
                {"food_name": "apple", "nf_calories": 94.64, "nf_protein": 0.47,
                 "nf_total_carbohydrate": 25.13, "nf_total_fat": 0.3},
                {"food_name": "black coffee", "nf_calories": 2.37, "nf_protein": 0.28,
                 "nf_total_carbohydrate": 0, "nf_total_fat": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let foods = nutritionix_client(&server)
        .meal_nutrition("  1 apple and a black coffee ")
        .await
        .unwrap();

    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].name, "apple");
    assert_eq!(foods[1].fat_g, None);
}

#[tokio::test]
async fn test_meal_status_mapping() {
    for (status, expected) in [
        (401, AppError::AUTH_FAILED.to_string()),
        (429, AppError::RATE_LIMITED.to_string()),
        (500, "HTTP 500".to_string()),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/natural/nutrients"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = nutritionix_client(&server)
            .meal_nutrition("1 apple")
            .await
            .unwrap_err();
        match err {
            AppError::NutritionApi(msg) => {
                assert!(msg.starts_with(&expected), "status {} gave {}", status, msg)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
