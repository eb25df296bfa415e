use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use refresh_core::{
    Clock, ContinuousClock, ImmediateClock, RefreshableFeature, RefreshableState, Store,
};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

mod driver;
mod script;

use driver::ScriptRunner;

#[derive(Parser, Debug)]
#[command(about = "Replays refresh/cancel triggers against the refreshable list and prints each state")]
struct Args {
    /// Comma-separated steps: refresh, cancel, wait, sleep:<ms>.
    #[arg(long, default_value = "refresh,cancel,refresh,wait")]
    script: String,
    #[arg(long)]
    refresh_ms: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Complete refresh waits immediately instead of sleeping (preview mode).
    #[arg(long)]
    instant: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings =
        refresh_core::load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(refresh_ms) = args.refresh_ms {
        settings.refresh_ms = refresh_ms;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let steps = script::parse_script(&args.script).context("invalid --script")?;
    let clock: Arc<dyn Clock> = if args.instant {
        Arc::new(ImmediateClock)
    } else {
        Arc::new(ContinuousClock)
    };
    let feature = RefreshableFeature::new(clock, settings.refresh_duration());
    let store = Store::new(
        RefreshableState::with_items(settings.items.clone()),
        feature,
        Handle::current(),
    );

    let mut runner = ScriptRunner::new(store);
    runner
        .run(&steps, |transition| match serde_json::to_string(&transition) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::warn!("failed to encode transition: {err}"),
        })
        .await;
    tracing::info!(
        is_refreshing = runner.state().is_refreshing,
        "script finished"
    );

    Ok(())
}
