//! Per-base-currency exchange rate cache.
//!
//! Unlike a TTL cache that evicts on expiry, expired snapshots are kept so
//! they can still be served when a refetch fails. Entries leave the cache
//! only through [`RateCache::invalidate_all`].

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use super::clock::{Clock, SystemClock};
use super::exchange::{ExchangeRateSnapshot, RateMap};

/// Default freshness window (1 hour).
const DEFAULT_TTL_SECS: i64 = 3600;

/// Snapshot cache keyed by base currency.
///
/// Thread-safe; concurrent writers for the same base simply overwrite each
/// other with equally valid snapshots.
pub struct RateCache {
    entries: DashMap<String, ExchangeRateSnapshot>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl RateCache {
    /// Creates a cache on the system clock with a one hour window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Arc::new(SystemClock), Duration::seconds(DEFAULT_TTL_SECS))
    }

    /// Creates a cache with an explicit clock and freshness window.
    #[must_use]
    pub fn with_config(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            ttl,
        }
    }

    /// Current time according to the cache's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The freshness window.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the snapshot for `base` if it is still fresh.
    #[must_use]
    pub fn fresh(&self, base: &str) -> Option<ExchangeRateSnapshot> {
        let now = self.now();
        self.entries
            .get(base)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value().clone())
    }

    /// Returns the snapshot for `base` regardless of its age.
    #[must_use]
    pub fn any(&self, base: &str) -> Option<ExchangeRateSnapshot> {
        self.entries.get(base).map(|entry| entry.value().clone())
    }

    /// Stores freshly fetched rates for `base`, replacing any older snapshot.
    pub fn insert(&self, base: &str, rates: RateMap) -> ExchangeRateSnapshot {
        let snapshot = ExchangeRateSnapshot::new(base, rates, self.now());
        self.entries.insert(base.to_string(), snapshot.clone());
        snapshot
    }

    /// Removes every snapshot.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    /// Number of base currencies with a snapshot, fresh or stale.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
