use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use ui::RefreshableApp;

#[derive(Parser, Debug)]
#[command(about = "Refreshable list demo with pull-to-refresh and cancel")]
struct Args {
    /// Settings file; defaults to ./refreshable.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    refresh_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings =
        refresh_core::load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(refresh_ms) = args.refresh_ms {
        settings.refresh_ms = refresh_ms;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let runtime = backend_bridge::runtime::build_effect_runtime()
        .context("backend worker startup failure")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Refreshable")
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([280.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Refreshable",
        options,
        Box::new(move |cc| Ok(Box::new(RefreshableApp::new(cc, handle, &settings)))),
    )
    .map_err(|err| anyhow!("gui event loop failed: {err}"))?;

    runtime.shutdown_timeout(std::time::Duration::from_millis(200));
    Ok(())
}
