use indexmap::IndexMap;
use log::{error, info, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Mutex as AsyncMutex;

use super::write_json;

type Counts = IndexMap<String, u64>;

/// Tease counters per user.
///
/// The in-memory map is authoritative; the file is a snapshot rewritten after
/// every mutation. Reads never touch the disk. Snapshots are taken and written
/// under one lock, so the last write always carries the newest counts.
#[derive(Clone)]
pub struct StatsStore {
    path: PathBuf,
    counts: Arc<Mutex<Counts>>,
    write_lock: Arc<AsyncMutex<()>>,
}

impl StatsStore {
    /// Load the snapshot once. Missing or malformed files start empty and are
    /// rewritten; other read failures also start empty but leave the file alone.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (counts, rewrite) = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<Counts>(&raw) {
                Ok(counts) => {
                    info!("Loaded stats for {} user(s)", counts.len());
                    (counts, false)
                }
                Err(e) => {
                    warn!("Stats file {} is malformed, starting fresh: {}", path.display(), e);
                    (Counts::new(), true)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => (Counts::new(), true),
            Err(e) => {
                error!("Failed to read stats file {}: {}", path.display(), e);
                (Counts::new(), false)
            }
        };

        let store = StatsStore {
            path,
            counts: Arc::new(Mutex::new(counts)),
            write_lock: Arc::new(AsyncMutex::new(())),
        };
        if rewrite && store.persist().await {
            info!("Created new stats file at {}", store.path.display());
        }
        store
    }

    fn counts(&self) -> MutexGuard<'_, Counts> {
        // A panic mid-update cannot leave a count half-written, so recover.
        self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn snapshot(&self) -> Counts {
        self.counts().clone()
    }

    async fn persist(&self) -> bool {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.snapshot();
        match write_json(&self.path, &snapshot).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save stats: {:#}", e);
                false
            }
        }
    }

    /// Count one more tease for `user_id` and persist.
    pub async fn increment(&self, user_id: &str) -> bool {
        *self.counts().entry(user_id.to_string()).or_insert(0) += 1;
        self.persist().await
    }

    /// Reset one user, or everyone when `user_id` is `None`.
    pub async fn reset(&self, user_id: Option<&str>) -> bool {
        match user_id {
            Some(id) => {
                self.counts().shift_remove(id);
            }
            None => {
                self.counts().clear();
            }
        }
        self.persist().await
    }

    pub fn user_stats(&self, user_id: &str) -> u64 {
        self.counts().get(user_id).copied().unwrap_or(0)
    }

    /// Most teased users first. Ties keep insertion order.
    pub fn rankings(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self.snapshot().into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}
