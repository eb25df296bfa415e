use std::time::Duration;

use async_trait::async_trait;

/// Time source injected into features so tests and previews can control waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock time backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContinuousClock;

#[async_trait]
impl Clock for ContinuousClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes every sleep immediately (after one scheduler yield).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateClock;

#[async_trait]
impl Clock for ImmediateClock {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
