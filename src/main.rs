// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Performance Pro console
//!
//! Loads configuration, opens the profile store and runs the interactive
//! menu on stdin/stdout. Logs go to stderr.

use anyhow::Context;
use performance_pro::{config::Config, console::Console, db::ProfileStore, AppState};
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(database = %config.database_path, "Starting Performance Pro");

    let store = ProfileStore::open(Path::new(&config.database_path))
        .context("Failed to open profile store")?;

    if config.seed_sample_data && store.seed_sample_data().context("Failed to seed sample data")? {
        println!("Sample data created. Available user IDs: 1, 2, 3");
    }

    let state = AppState::from_config(config, store);

    let stdin = io::stdin();
    let mut console = Console::new(&state, stdin.lock(), io::stdout());
    console.run().await.context("Console I/O failed")?;

    tracing::info!("Performance Pro exiting");
    Ok(())
}

/// Initialize logging on stderr. `LOG_FORMAT=json` selects JSON lines.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("performance_pro=info".parse()?)
        .add_directive("warn".parse()?);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}
