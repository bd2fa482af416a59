// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record a new profile and its performance metrics from stdin.

use anyhow::Context;
use performance_pro::{
    config::Config,
    console::{write_metrics, Prompter},
    db::ProfileStore,
    models::{ActivityLevel, Goal, NewMetrics, NewProfile},
};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("performance_pro=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let store = ProfileStore::open(Path::new(&config.database_path))
        .context("Failed to open profile store")?;

    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    writeln!(prompt.output(), "=== User Performance Input System ===")?;

    if record(&store, &mut prompt)?.is_none() {
        writeln!(prompt.output(), "\nInput ended before the profile was recorded.")?;
    }
    Ok(())
}

/// Prompt for a profile and metrics, store both, and echo the stored metrics.
///
/// Nothing is stored until every answer has been read, so `Ok(None)` (input
/// ended early) leaves the store untouched.
fn record<R: BufRead, W: Write>(
    store: &ProfileStore,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<Option<i64>> {
    let Some(new_profile) = ask_profile(prompt)? else {
        return Ok(None);
    };
    let Some(mut new_metrics) = ask_metrics(prompt)? else {
        return Ok(None);
    };

    let profile = store
        .insert_profile(&new_profile)
        .context("Failed to insert profile")?;
    tracing::info!(profile_id = profile.id, name = %profile.name, "Profile recorded");

    new_metrics.profile_id = profile.id;
    store
        .insert_metrics(&new_metrics)
        .context("Failed to insert performance metrics")?;

    match store.get_metrics(profile.id)? {
        Some(m) => write_metrics(prompt.output(), "Recorded Performance Stats:", &m)?,
        None => writeln!(prompt.output(), "No stats found for user ID: {}", profile.id)?,
    }
    Ok(Some(profile.id))
}

fn ask_profile<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
) -> io::Result<Option<NewProfile>> {
    let Some(name) = prompt.ask_non_empty("Enter user name: ")? else {
        return Ok(None);
    };
    let Some(goal) = prompt.ask(
        "Enter user goal (Weight Loss/Muscle Gain/Cardio/General Fitness): ",
        |s| s.parse::<Goal>().map_err(|e| e.to_string()),
    )?
    else {
        return Ok(None);
    };
    let Some(weight_kg) = prompt.ask_positive_f64("Enter weight (kg): ")? else {
        return Ok(None);
    };
    let Some(height_m) = prompt.ask_positive_f64("Enter height (m): ")? else {
        return Ok(None);
    };
    let Some(age) = prompt.ask_age("Enter age: ")? else {
        return Ok(None);
    };
    let Some(gender) = prompt.ask_non_empty("Enter gender (Male/Female): ")? else {
        return Ok(None);
    };
    let Some(activity_level) = prompt.ask(
        "Enter activity level (Low/Moderate/High): ",
        |s| s.parse::<ActivityLevel>().map_err(|e| e.to_string()),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(NewProfile {
        name,
        goal,
        weight_kg,
        height_m,
        age,
        gender,
        activity_level,
    }))
}

/// The returned metrics carry `profile_id` 0 until the profile is stored.
fn ask_metrics<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
) -> io::Result<Option<NewMetrics>> {
    let non_negative = |s: &str| match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err("Please enter a number of zero or more.".to_string()),
    };

    let Some(strength_max_kg) = prompt.ask("Enter strength max (kg): ", non_negative)? else {
        return Ok(None);
    };
    let Some(speed_time_s) = prompt.ask("Enter speed time (seconds): ", non_negative)? else {
        return Ok(None);
    };
    let Some(endurance_duration_min) =
        prompt.ask("Enter endurance duration (minutes): ", non_negative)?
    else {
        return Ok(None);
    };
    let Some(agility_score) = prompt.ask("Enter agility score (1-10): ", |s| {
        match s.parse::<f64>() {
            Ok(v) if (1.0..=10.0).contains(&v) => Ok(v),
            _ => Err("Please enter a score between 1 and 10.".to_string()),
        }
    })?
    else {
        return Ok(None);
    };

    Ok(Some(NewMetrics {
        profile_id: 0,
        strength_max_kg,
        speed_time_s,
        endurance_duration_min,
        agility_score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_record_profile_and_metrics() {
        let store = ProfileStore::open_in_memory().unwrap();
        let input = "Ada\nweight loss\nabc\n60\n1.68\n34\nFemale\nhigh\n70\n13.1\n40\n11\n8\n";
        let mut prompt = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let id = record(&store, &mut prompt).unwrap().unwrap();

        let profile = store.get_profile(id).unwrap().unwrap();
        assert_eq!(profile.goal, Goal::WeightLoss);
        assert_eq!(profile.activity_level, ActivityLevel::High);
        assert_eq!(store.get_metrics(id).unwrap().unwrap().agility_score, 8.0);

        let out = String::from_utf8(prompt.into_output()).unwrap();
        assert!(out.contains("Please enter a positive number."));
        assert!(out.contains("Please enter a score between 1 and 10."));
        assert!(out.contains("Recorded Performance Stats:\nStrength Max: 70 kg"));
    }

    #[test]
    fn test_early_eof_records_nothing() {
        let store = ProfileStore::open_in_memory().unwrap();
        let mut prompt = Prompter::new(Cursor::new(b"Ada\n".to_vec()), Vec::new());

        assert_eq!(record(&store, &mut prompt).unwrap(), None);
        assert_eq!(store.count_profiles().unwrap(), 0);
    }

    #[test]
    fn test_eof_during_metrics_records_nothing() {
        let store = ProfileStore::open_in_memory().unwrap();
        let input = "Ada\nweight loss\n60\n1.68\n34\nFemale\nhigh\n70\n13.1\n";
        let mut prompt = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        assert_eq!(record(&store, &mut prompt).unwrap(), None);
        assert_eq!(store.count_profiles().unwrap(), 0);

        let out = String::from_utf8(prompt.into_output()).unwrap();
        assert!(out.contains("Enter endurance duration (minutes): "));
    }
}
