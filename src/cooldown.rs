//! # Feature: Command Cooldowns
//!
//! Per-user, per-command lockout after a successful command. Entries expire
//! lazily: an entry whose expiry has passed counts as inactive whether or not
//! it has been evicted yet. `purge_expired` does the physical eviction and is
//! driven by a periodic sweep in the bot binary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use dashmap::DashMap;
use log::{debug, info};
use std::time::Duration;
use tokio::time::{interval, Instant};

/// How often the bot binary evicts expired entries
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
pub struct CooldownEntry {
    pub expires_at: Instant,
}

impl CooldownEntry {
    fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }

    fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CooldownKey {
    user_id: String,
    command: String,
}

impl CooldownKey {
    fn new(user_id: &str, command: &str) -> Self {
        CooldownKey {
            user_id: user_id.to_string(),
            command: command.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CooldownManager {
    cooldowns: DashMap<CooldownKey, CooldownEntry>,
    default_duration: Duration,
}

impl CooldownManager {
    pub fn new(default_duration: Duration) -> Self {
        CooldownManager {
            cooldowns: DashMap::new(),
            default_duration,
        }
    }

    pub fn is_on_cooldown(&self, user_id: &str, command: &str) -> bool {
        self.cooldowns
            .get(&CooldownKey::new(user_id, command))
            .map(|entry| entry.is_active(Instant::now()))
            .unwrap_or(false)
    }

    /// Remaining lockout in whole seconds, rounded up. Zero when inactive.
    pub fn remaining_seconds(&self, user_id: &str, command: &str) -> u64 {
        let Some(entry) = self.cooldowns.get(&CooldownKey::new(user_id, command)) else {
            return 0;
        };

        let remaining = entry.remaining(Instant::now());
        let secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Start (or restart) a cooldown. `None` uses the manager's default.
    pub fn set_cooldown(&self, user_id: &str, command: &str, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.default_duration);
        let entry = CooldownEntry {
            expires_at: Instant::now() + duration,
        };

        debug!(
            "Cooldown set for user {} on '{}' ({}s)",
            user_id,
            command,
            duration.as_secs()
        );
        self.cooldowns.insert(CooldownKey::new(user_id, command), entry);
    }

    /// Evict entries that are expired right now. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.cooldowns.len();
        self.cooldowns.retain(|_, entry| entry.is_active(now));
        before.saturating_sub(self.cooldowns.len())
    }

    pub fn len(&self) -> usize {
        self.cooldowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cooldowns.is_empty()
    }

    /// Evict expired entries forever. Spawn as a tokio task.
    pub async fn run_sweeper(&self, every: Duration) {
        let mut sweep_interval = interval(every);

        info!("Cooldown sweeper started ({}s interval)", every.as_secs());

        loop {
            sweep_interval.tick().await;

            let purged = self.purge_expired();
            if purged > 0 {
                debug!("Purged {} expired cooldown(s)", purged);
            }
        }
    }
}

impl Default for CooldownManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(15))
    }
}
