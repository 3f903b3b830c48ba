//! Lightweight global metrics for the feed.
//!
//! Потокобезопасные атомарные счётчики:
//! - загрузки страниц (refresh / append / prepend)
//! - сгенерированные записи
//! - страницы, выброшенные по max_size
//! - инвалидации

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

// ----- Loads -----
static PAGES_REFRESHED: AtomicU64 = AtomicU64::new(0);
static PAGES_APPENDED: AtomicU64 = AtomicU64::new(0);
static PAGES_PREPENDED: AtomicU64 = AtomicU64::new(0);

// ----- Generator -----
static RECORDS_GENERATED: AtomicU64 = AtomicU64::new(0);

// ----- Pager -----
static PAGES_DROPPED: AtomicU64 = AtomicU64::new(0);
static INVALIDATIONS: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsSnapshot {
    // Loads
    pub pages_refreshed: u64,
    pub pages_appended: u64,
    pub pages_prepended: u64,

    // Generator
    pub records_generated: u64,

    // Pager
    pub pages_dropped: u64,
    pub invalidations: u64,
}

impl MetricsSnapshot {
    pub fn pages_loaded(&self) -> u64 {
        self.pages_refreshed + self.pages_appended + self.pages_prepended
    }

    pub fn avg_page_len(&self) -> f64 {
        let pages = self.pages_loaded();
        if pages == 0 {
            0.0
        } else {
            self.records_generated as f64 / pages as f64
        }
    }
}

// ----- Recorders (Loads) -----
pub fn record_page_refreshed() {
    PAGES_REFRESHED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_page_appended() {
    PAGES_APPENDED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_page_prepended() {
    PAGES_PREPENDED.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Generator) -----
pub fn record_records_generated(n: usize) {
    RECORDS_GENERATED.fetch_add(n as u64, Ordering::Relaxed);
}

// ----- Recorders (Pager) -----
pub fn record_page_dropped() {
    PAGES_DROPPED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_invalidation() {
    INVALIDATIONS.fetch_add(1, Ordering::Relaxed);
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        pages_refreshed: PAGES_REFRESHED.load(Ordering::Relaxed),
        pages_appended: PAGES_APPENDED.load(Ordering::Relaxed),
        pages_prepended: PAGES_PREPENDED.load(Ordering::Relaxed),

        records_generated: RECORDS_GENERATED.load(Ordering::Relaxed),

        pages_dropped: PAGES_DROPPED.load(Ordering::Relaxed),
        invalidations: INVALIDATIONS.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    PAGES_REFRESHED.store(0, Ordering::Relaxed);
    PAGES_APPENDED.store(0, Ordering::Relaxed);
    PAGES_PREPENDED.store(0, Ordering::Relaxed);

    RECORDS_GENERATED.store(0, Ordering::Relaxed);

    PAGES_DROPPED.store(0, Ordering::Relaxed);
    INVALIDATIONS.store(0, Ordering::Relaxed);
}
