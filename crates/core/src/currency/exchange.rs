//! Exchange rate types.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Target currency code to multiplicative rate, relative to one base.
///
/// `1 base = rates[target] target`. Ordered so serialized maps are stable.
pub type RateMap = BTreeMap<String, Decimal>;

/// Rates for one base currency plus the moment they were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRateSnapshot {
    /// Base currency code.
    pub base: String,
    /// Rates relative to `base`, always containing `base -> 1`.
    pub rates: RateMap,
    /// When the rates were fetched.
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRateSnapshot {
    /// Creates a snapshot, inserting the base self-rate of 1.
    #[must_use]
    pub fn new(base: impl Into<String>, mut rates: RateMap, fetched_at: DateTime<Utc>) -> Self {
        let base = base.into();
        rates.insert(base.clone(), Decimal::ONE);
        Self {
            base,
            rates,
            fetched_at,
        }
    }

    /// Age of the snapshot at `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// True while the snapshot is younger than `ttl`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

/// Where a set of rates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Fetched from the rate API by this call.
    Live,
    /// Served from a snapshot still inside its freshness window.
    Cached,
    /// Served from an expired snapshot because the refetch failed.
    Stale,
    /// Static approximate table; no real data was available.
    Fallback,
}

impl RateSource {
    /// True for rates that came from the rate API at some point.
    #[must_use]
    pub const fn is_real(self) -> bool {
        !matches!(self, Self::Fallback)
    }
}

/// Result of a rate lookup, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLookup {
    /// Base currency the rates are relative to.
    ///
    /// Differs from the requested base only when the static table had no
    /// entry for it and the USD table was served instead.
    pub base: String,
    /// The rates.
    pub rates: RateMap,
    /// Provenance of the rates.
    pub source: RateSource,
    /// Fetch time of the underlying snapshot; `None` for fallback data.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl RateLookup {
    /// Builds a lookup from a cached or freshly fetched snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: ExchangeRateSnapshot, source: RateSource) -> Self {
        Self {
            base: snapshot.base,
            rates: snapshot.rates,
            source,
            fetched_at: Some(snapshot.fetched_at),
        }
    }

    /// Rate for `target`, if present.
    #[must_use]
    pub fn rate(&self, target: &str) -> Option<Decimal> {
        self.rates.get(target).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_snapshot_synthesizes_base_rate() {
        let rates = RateMap::from([("EUR".to_string(), dec!(0.9))]);
        let snapshot = ExchangeRateSnapshot::new("USD", rates, at(10, 0));

        assert_eq!(snapshot.rates.get("USD"), Some(&Decimal::ONE));
        assert_eq!(snapshot.rates.get("EUR"), Some(&dec!(0.9)));
    }

    #[test]
    fn test_snapshot_overrides_reported_base_rate() {
        let rates = RateMap::from([("USD".to_string(), dec!(0.99))]);
        let snapshot = ExchangeRateSnapshot::new("USD", rates, at(10, 0));
        assert_eq!(snapshot.rates.get("USD"), Some(&Decimal::ONE));
    }

    #[test]
    fn test_freshness_window_is_exclusive() {
        let snapshot = ExchangeRateSnapshot::new("USD", RateMap::new(), at(10, 0));
        let ttl = Duration::hours(1);

        assert!(snapshot.is_fresh(at(10, 0), ttl));
        assert!(snapshot.is_fresh(at(10, 59), ttl));
        assert!(!snapshot.is_fresh(at(11, 0), ttl));
        assert!(!snapshot.is_fresh(at(12, 30), ttl));
    }

    #[test]
    fn test_rate_source_is_real() {
        assert!(RateSource::Live.is_real());
        assert!(RateSource::Cached.is_real());
        assert!(RateSource::Stale.is_real());
        assert!(!RateSource::Fallback.is_real());
    }
}
