//! Generation tokens for superseding in-flight requests
//!
//! Every suggestion or enhancement request takes a [`GenerationToken`] from a
//! [`GenerationTracker`]. Beginning a newer request, or cancelling, advances the
//! tracker's epoch. Tokens from earlier epochs are stale: backends stop waiting
//! on them and the wizard drops whatever they produce.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::watch;

/// Handle for one in-flight request
#[derive(Debug, Clone)]
pub struct GenerationToken {
    id: u64,
    epoch: watch::Receiver<u64>,
}

impl GenerationToken {
    /// Epoch this token was issued for
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether no newer request or cancellation has happened since issue
    pub fn is_current(&self) -> bool {
        *self.epoch.borrow() == self.id
    }

    /// Resolves once the token is superseded, cancelled, or its tracker is dropped
    pub async fn cancelled(&self) {
        let mut epoch = self.epoch.clone();
        loop {
            if *epoch.borrow_and_update() != self.id {
                return;
            }
            if epoch.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Counters for generation requests
#[derive(Debug, Default)]
pub struct GenerationStats {
    /// Requests started
    pub started: AtomicU64,
    /// Completions accepted while still current
    pub applied: AtomicU64,
    /// Completions dropped because their token was stale
    pub discarded: AtomicU64,
    /// Explicit cancellations
    pub cancelled: AtomicU64,
}

/// Snapshot of generation statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationStatsSnapshot {
    pub started: u64,
    pub applied: u64,
    pub discarded: u64,
    pub cancelled: u64,
}

impl GenerationStats {
    pub fn snapshot(&self) -> GenerationStatsSnapshot {
        GenerationStatsSnapshot {
            started: self.started.load(Ordering::Relaxed),
            applied: self.applied.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
        }
    }
}

/// Issues tokens and decides which completions are still wanted
#[derive(Debug)]
pub struct GenerationTracker {
    name: &'static str,
    epoch: watch::Sender<u64>,
    stats: GenerationStats,
}

impl GenerationTracker {
    /// Create a tracker; `name` labels its log lines
    pub fn new(name: &'static str) -> Self {
        let (epoch, _) = watch::channel(0);
        Self {
            name,
            epoch,
            stats: GenerationStats::default(),
        }
    }

    /// Start a new request, superseding any request still in flight
    pub fn begin(&self) -> GenerationToken {
        let id = self.advance();
        self.stats.started.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(tracker = self.name, generation = id, "Generation started");

        GenerationToken {
            id,
            epoch: self.epoch.subscribe(),
        }
    }

    /// Invalidate whatever request is in flight
    pub fn cancel(&self) {
        let id = self.advance();
        self.stats.cancelled.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(tracker = self.name, epoch = id, "Generation cancelled");
    }

    /// Decide whether a completion carrying `token` should be applied
    pub fn accept(&self, token: &GenerationToken) -> bool {
        let current = *self.epoch.borrow();
        if token.id == current {
            self.stats.applied.fetch_add(1, Ordering::Relaxed);
            true
        } else {
            self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                tracker = self.name,
                generation = token.id,
                current,
                "Discarding stale generation result"
            );
            false
        }
    }

    /// Record a completion that was rejected for a reason other than age
    pub fn discard(&self, token: &GenerationToken) {
        self.stats.discarded.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            tracker = self.name,
            generation = token.id,
            "Discarding generation result"
        );
    }

    /// Current epoch
    pub fn current(&self) -> u64 {
        *self.epoch.borrow()
    }

    pub fn stats(&self) -> GenerationStatsSnapshot {
        self.stats.snapshot()
    }

    fn advance(&self) -> u64 {
        let mut next = 0;
        self.epoch.send_modify(|epoch| {
            *epoch += 1;
            next = *epoch;
        });
        next
    }
}
