// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Short advisory text keyed by goal and activity level.

use crate::models::{ActivityLevel, Goal, Profile};

fn join(lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Workout advice for a profile's goal and activity level.
pub fn workout_suggestion(profile: &Profile) -> String {
    let level = profile.activity_level;
    let mut lines: Vec<&str> = Vec::new();

    match profile.goal {
        Goal::WeightLoss => {
            lines.push("Focus on fat-burning exercises with a mix of strength and cardio.");
            match level {
                ActivityLevel::Moderate => lines.push(
                    "For moderate activity level, try a combination of HIIT for 30 minutes and strength training 3 times a week.",
                ),
                ActivityLevel::High => lines.push(
                    "Since you're highly active, aim for 5 days of HIIT or circuit training and 2 days of strength training.",
                ),
                ActivityLevel::Low => {}
            }
            lines.push(
                "Include core exercises like planks, leg raises, and crunches for 10-15 minutes post-cardio.",
            );
            lines.push(
                "Focus on calorie burning, not muscle growth, so exercises like running, cycling, and rowing are key.",
            );
        }
        Goal::MuscleGain => {
            lines.push("Focus on strength and hypertrophy workouts with heavy weights.");
            match level {
                ActivityLevel::Moderate => {
                    lines.push(
                        "Do 4 days of strength training with compound lifts like squats, deadlifts, bench press, and rows.",
                    );
                    lines.push(
                        "Add accessory movements like bicep curls, tricep dips, and leg extensions to build muscle.",
                    );
                }
                ActivityLevel::High => {
                    lines.push(
                        "Go for 5-6 days of heavy lifting with 3 days focusing on strength and 3 days on hypertrophy.",
                    );
                    lines.push(
                        "Incorporate supersets to increase muscle endurance and time under tension.",
                    );
                }
                ActivityLevel::Low => {}
            }
            lines.push("Remember to progressively overload your muscles to induce growth.");
        }
        Goal::Cardio => {
            lines.push("Focus on improving cardiovascular health and stamina.");
            lines.push("For beginners, start with 3-4 days of moderate cardio (30-45 minutes).");
            if level == ActivityLevel::High {
                lines.push(
                    "For high activity level, aim for 5-6 days of varied cardio: mix steady-state cardio with HIIT.",
                );
            }
            lines.push(
                "Consider adding low-impact activities like swimming or cycling for variety.",
            );
        }
        Goal::General => {
            lines.push("Aim for a balanced week of strength, cardio, and mobility work.");
            match level {
                ActivityLevel::Low => {
                    lines.push("Start with 3 days of 30-minute full body sessions and daily walks.")
                }
                ActivityLevel::Moderate => {
                    lines.push("Train 4 days a week, alternating strength and cardio sessions.")
                }
                ActivityLevel::High => {
                    lines.push("Train 5 days a week and add one longer endurance session.")
                }
            }
            lines.push("Keep one day for active recovery such as stretching or yoga.");
        }
    }

    join(&lines)
}

/// Nutrition advice for a profile's goal.
pub fn nutrition_suggestion(profile: &Profile) -> String {
    join(match profile.goal {
        Goal::WeightLoss => &[
            "Aim for a calorie deficit by consuming fewer calories than you burn.",
            "Include lean proteins like chicken breast, turkey, and fish.",
            "Focus on vegetables, fruits, and complex carbs.",
            "Avoid sugary foods and drinks.",
            "Track calories using apps like MyFitnessPal.",
        ],
        Goal::MuscleGain => &[
            "Focus on a calorie surplus with high-protein foods.",
            "Consume beef, chicken, eggs, and legumes for muscle growth.",
            "Include complex carbs like brown rice and sweet potatoes.",
            "Add healthy fats from avocados, olive oil, and nuts.",
            "Aim for 5-6 protein-rich meals throughout the day.",
        ],
        Goal::Cardio => &[
            "Balance protein and carbs for energy and recovery.",
            "Focus on whole grains and lean proteins.",
            "Stay hydrated with water and electrolyte drinks.",
        ],
        Goal::General => &[
            "Maintain a balanced diet with varied whole foods.",
            "Include lean proteins, complex carbs, and healthy fats.",
            "Stay hydrated and limit processed foods.",
        ],
    })
}
