//! Performance metrics model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One set of benchmark results for a profile (`performance_stats` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub id: i64,
    /// Owning profile (foreign key to `users.id`)
    pub profile_id: i64,
    /// One-rep max in kilograms
    pub strength_max_kg: f64,
    /// Sprint time in seconds
    pub speed_time_s: f64,
    /// Sustained effort in minutes
    pub endurance_duration_min: f64,
    /// Self-assessed agility on a 1-10 scale
    pub agility_score: f64,
}

/// Insert payload for a profile's metrics.
#[derive(Debug, Clone, Validate)]
pub struct NewMetrics {
    pub profile_id: i64,
    #[validate(range(min = 0.0, message = "strength max must not be negative"))]
    pub strength_max_kg: f64,
    #[validate(range(min = 0.0, message = "speed time must not be negative"))]
    pub speed_time_s: f64,
    #[validate(range(min = 0.0, message = "endurance duration must not be negative"))]
    pub endurance_duration_min: f64,
    #[validate(range(min = 1.0, max = 10.0, message = "agility score must be between 1 and 10"))]
    pub agility_score: f64,
}
