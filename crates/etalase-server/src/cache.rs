//! TTL cache for the last successfully fetched inventory record.
//!
//! The upstream store rate-limits aggressively, so one fetch is shared
//! across requests for a short window. Staleness beats blocking: a fresh
//! snapshot is handed out without touching the network, and the lock is
//! only held to read or swap the slot, never across the upstream call.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Snapshot {
    fetched_at: Instant,
    body: Arc<serde_json::Value>,
}

/// Shared process-wide cache of the last inventory fetch.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    ttl: Duration,
    slot: Arc<RwLock<Option<Snapshot>>>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached record if one exists and is still fresh.
    pub async fn get(&self) -> Option<Arc<serde_json::Value>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|s| s.fetched_at.elapsed() < self.ttl)
            .map(|s| Arc::clone(&s.body))
    }

    /// Replaces the cached record with a freshly fetched one.
    pub async fn store(&self, body: serde_json::Value) -> Arc<serde_json::Value> {
        let body = Arc::new(body);
        let mut slot = self.slot.write().await;
        *slot = Some(Snapshot {
            fetched_at: Instant::now(),
            body: Arc::clone(&body),
        });
        body
    }
}
