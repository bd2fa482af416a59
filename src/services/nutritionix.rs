// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutritionix natural-language nutrient lookup.

use crate::config::Config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Macro breakdown for one recognized food.
///
/// Nutrients are `None` when the API omits them or sends `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodNutrients {
    #[serde(rename = "food_name")]
    pub name: String,
    #[serde(rename = "nf_calories", default)]
    pub calories: Option<f64>,
    #[serde(rename = "nf_protein", default)]
    pub protein_g: Option<f64>,
    #[serde(rename = "nf_total_carbohydrate", default)]
    pub carbs_g: Option<f64>,
    #[serde(rename = "nf_total_fat", default)]
    pub fat_g: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientsResponse {
    #[serde(default)]
    foods: Vec<FoodNutrients>,
}

/// Anything that can break a free-text meal description into foods.
#[async_trait]
pub trait MealNutritionSource: Send + Sync {
    async fn meal_nutrition(&self, query: &str) -> Result<Vec<FoodNutrients>>;
}

/// Nutritionix v2 API client.
#[derive(Clone)]
pub struct NutritionixClient {
    http: reqwest::Client,
    base_url: String,
    app_id: Option<String>,
    app_key: Option<SecretString>,
}

impl NutritionixClient {
    pub fn new(base_url: String, app_id: Option<String>, app_key: Option<SecretString>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
            app_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.nutritionix_base_url.clone(),
            config.nutritionix_app_id.clone(),
            config.nutritionix_app_key.clone(),
        )
    }
}

#[async_trait]
impl MealNutritionSource for NutritionixClient {
    /// POST `{base}/natural/nutrients` with `{"query": ...}`.
    async fn meal_nutrition(&self, query: &str) -> Result<Vec<FoodNutrients>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("meal description is empty".to_string()));
        }

        let (app_id, app_key) = match (&self.app_id, &self.app_key) {
            (Some(id), Some(key)) => (id, key),
            _ => {
                return Err(AppError::NutritionApi(
                    "credentials not configured".to_string(),
                ))
            }
        };

        let body = serde_json::json!({ "query": query });

        let response = self
            .http
            .post(format!("{}/natural/nutrients", self.base_url))
            .header("x-app-id", app_id)
            .header("x-app-key", app_key.expose_secret().as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::NutritionApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => {
                    tracing::warn!(status = %status, "Nutritionix authentication failed");
                    AppError::NutritionApi(AppError::AUTH_FAILED.to_string())
                }
                429 => {
                    tracing::warn!("Nutritionix rate limit hit (429)");
                    AppError::NutritionApi(AppError::RATE_LIMITED.to_string())
                }
                _ => AppError::NutritionApi(format!("HTTP {}: {}", status, body)),
            });
        }

        let parsed: NutrientsResponse = response
            .json()
            .await
            .map_err(|e| AppError::NutritionApi(format!("JSON parse error: {}", e)))?;

        tracing::info!(foods = parsed.foods.len(), "Meal nutrition fetched");
        Ok(parsed.foods)
    }
}

fn amount(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => "n/a".to_string(),
    }
}

/// Render foods as a plain-text block, one paragraph per food.
///
/// Missing nutrients print as "n/a".
pub fn format_foods(foods: &[FoodNutrients]) -> String {
    let mut out = String::new();
    for food in foods {
        out.push_str(&format!("Food: {}\n", food.name));
        out.push_str(&format!("Calories: {}\n", amount(food.calories, "")));
        out.push_str(&format!("Protein: {}\n", amount(food.protein_g, "g")));
        out.push_str(&format!("Carbs: {}\n", amount(food.carbs_g, "g")));
        out.push_str(&format!("Fat: {}\n\n", amount(food.fat_g, "g")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_response() {
        let json = r#"{"foods":[{"food_name":"apple","nf_calories":94.64,
            "nf_protein":0.47,"nf_total_carbohydrate":25.13,"nf_total_fat":0.3,
            "serving_qty":1}]}"#;
        let parsed: NutrientsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            format_foods(&parsed.foods),
            "Food: apple\nCalories: 94.64\nProtein: 0.47g\nCarbs: 25.13g\nFat: 0.3g\n\n"
        );
    }

    #[test]
    fn test_missing_nutrients_are_none() {
        let json = r#"{"foods":[{"food_name":"water"}]}"#;
        let parsed: NutrientsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.foods[0].calories, None);
    }

    #[test]
    fn test_null_nutrient_keeps_other_foods() {
        let json = r#"{"foods":[
            {"food_name":"apple","nf_calories":94.64,"nf_protein":0.47,
             "nf_total_carbohydrate":25.13,"nf_total_fat":0.3},
            {"food_name":"black coffee","nf_calories":2.37,"nf_protein":0.28,
             "nf_total_carbohydrate":0,"nf_total_fat":null}]}"#;
        let parsed: NutrientsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.foods.len(), 2);
        assert_eq!(parsed.foods[1].fat_g, None);
        assert_eq!(parsed.foods[1].carbs_g, Some(0.0));

        let text = format_foods(&parsed.foods);
        assert!(text.starts_with("Food: apple\nCalories: 94.64\n"));
        assert!(text.contains(
            "Food: black coffee\nCalories: 2.37\nProtein: 0.28g\nCarbs: 0g\nFat: n/a\n"
        ));
    }

    #[tokio::test]
    async fn test_missing_credentials_is_typed_error() {
        let client = NutritionixClient::new("http://127.0.0.1:9/v2".to_string(), None, None);
        let err = client.meal_nutrition("1 apple").await.unwrap_err();
        assert!(matches!(err, AppError::NutritionApi(_)));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_empty_query_is_bad_request() {
        let client = NutritionixClient::new("http://127.0.0.1:9/v2".to_string(), None, None);
        let err = client.meal_nutrition("   ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
