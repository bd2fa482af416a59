//! Database layer (SQLite).

pub mod sqlite;

pub use sqlite::ProfileStore;

/// Table names as constants.
pub mod tables {
    pub const USERS: &str = "users";
    pub const PERFORMANCE_STATS: &str = "performance_stats";
    /// Workout catalog (suggested exercises per goal/activity level)
    pub const WORKOUTS: &str = "workouts";
    /// Nutrition catalog (suggested intake per goal)
    pub const NUTRITION: &str = "nutrition";
}
