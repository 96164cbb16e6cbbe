//! Scheduling port for the opponent's thinking time.
//!
//! The orchestrator never sleeps directly; it asks a [`Delay`] to wait.
//! The binary injects [`TokioDelay`], tests inject [`NoDelay`] so the
//! opponent answers synchronously.

use std::time::Duration;
use tracing::trace;

/// Waits for a given duration before the opponent's move is applied.
#[async_trait::async_trait]
pub trait Delay: Send + Sync {
    /// Completes after `duration` has elapsed (or immediately).
    async fn wait(&self, duration: Duration);
}

/// Real-time delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait::async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        trace!(?duration, "Sleeping before opponent move");
        tokio::time::sleep(duration).await;
    }
}

/// Delay that completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait::async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}
