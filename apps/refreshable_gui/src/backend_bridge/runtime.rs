//! Runtime bridge: builds the tokio runtime that executes store effects off the UI thread.

use refresh_core::StoreError;
use tokio::runtime::Runtime;

const EFFECT_WORKER_THREADS: usize = 2;

pub fn build_effect_runtime() -> Result<Runtime, StoreError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(EFFECT_WORKER_THREADS)
        .thread_name("refreshable-effects")
        .enable_all()
        .build()?;
    tracing::info!(workers = EFFECT_WORKER_THREADS, "effect runtime started");
    Ok(runtime)
}
