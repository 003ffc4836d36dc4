//! # Feature: Rate Limiting
//!
//! Global pacing gate in front of response generation. A call that comes in
//! too soon after the previous one is delayed, never rejected.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Single global minimum-interval gate replaces the per-user window

use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Minimum spacing between generation calls (free-tier friendly)
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone)]
pub struct RateLimiter {
    last_call: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        RateLimiter {
            last_call: Arc::new(Mutex::new(None)),
            min_interval,
        }
    }

    /// Wait until `min_interval` has passed since the previous acquisition,
    /// then record this one. The lock is held across the wait so concurrent
    /// callers queue up behind each other.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                debug!("Pacing generation call for {}ms", wait_time.as_millis());
                sleep(wait_time).await;
            }
        }

        *last_call = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
