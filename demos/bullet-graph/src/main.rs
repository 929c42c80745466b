// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bullet Graph Demo
//!
//! Loads a session file (the bundled `session.toml` unless a path is given),
//! renders the chart to the console and feeds it simulated sales figures
//! until the walk reaches its bound or Ctrl+C is pressed.

mod console;

use crate::console::ConsoleRenderer;
use anyhow::Result;
use livegauge::{LiveSession, RenderEvent, SessionConfig};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SESSION: &str = include_str!("../session.toml");

async fn wait_until_idle(session: &LiveSession<ConsoleRenderer>) {
    while session.is_live() {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::from_toml_str(DEFAULT_SESSION)?,
    };

    let mut session = LiveSession::new(config, ConsoleRenderer::default())?;
    session.render()?;
    session.handle_event(RenderEvent::Rendered)?;

    tokio::select! {
        () = wait_until_idle(&session) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Ctrl+C received, stopping feed");
        }
    }

    if let Some(report) = session.end().await? {
        info!(
            "feed finished: {:?} after {} ticks, last value {}",
            report.reason, report.ticks, report.final_value
        );
    }
    info!("renderer received {} updates", session.renderer().lock().updates());
    Ok(())
}
