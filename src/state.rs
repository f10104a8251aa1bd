use crate::config::AppConfig;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free request counters (Relaxed ordering is fine for stats).
#[derive(Debug, Default)]
pub struct Counters {
    pub analyses_completed: AtomicU64,
    pub requests_rejected: AtomicU64,
    pub curve_points_emitted: AtomicU64,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CountersSnapshot {
    pub analyses_completed: u64,
    pub requests_rejected: u64,
    pub curve_points_emitted: u64,
}

impl Counters {
    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            analyses_completed: self.analyses_completed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            curve_points_emitted: self.curve_points_emitted.load(Ordering::Relaxed),
        }
    }
}

/// Shared, read-mostly server state. No per-request data lives here.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub counters: Counters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            counters: Counters::default(),
        })
    }

    #[inline]
    pub fn record_analysis(&self, samples: usize) {
        self.counters.analyses_completed.fetch_add(1, Ordering::Relaxed);
        self.counters
            .curve_points_emitted
            .fetch_add(samples as u64, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_rejection(&self) {
        self.counters.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }
}
