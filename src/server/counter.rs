//! Live connection count, for diagnostics only.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared handle to the process-wide count of open connections.
///
/// Cloning shares the same count. Nothing is admitted or refused based on it.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCounter {
    live: Arc<AtomicUsize>,
}

/// Keeps one connection counted until dropped.
#[derive(Debug)]
pub struct ConnectionGuard {
    live: Arc<AtomicUsize>,
}

impl ConnectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a new connection and returns the guard that releases it.
    pub fn enter(&self) -> ConnectionGuard {
        let now = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(live = now, "connection opened");
        ConnectionGuard {
            live: Arc::clone(&self.live),
        }
    }

    pub fn current(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let now = self.live.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::info!(live = now, "connection released");
    }
}
