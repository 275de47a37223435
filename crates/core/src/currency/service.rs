//! Currency service: metadata, country resolution, cached exchange rates,
//! conversion and formatting.
//!
//! Every operation degrades instead of failing. Unknown codes resolve to
//! USD, rate fetch failures fall back to stale or static data, and a missing
//! conversion rate leaves the amount unchanged. Callers that need to know
//! which of these happened use the `*_detailed` variants.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::cache::RateCache;
use super::country;
use super::exchange::{RateLookup, RateMap, RateSource};
use super::fallback;
use super::format;
use super::info::{self, CurrencyInfo};
use super::provider::RateProvider;

/// Locale used when callers do not pick one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Outcome of a conversion, tagged with where the rate came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Converted amount, or the input amount when no rate was found.
    pub amount: Decimal,
    /// Rate applied; `None` when the target was missing from the rate map.
    pub rate: Option<Decimal>,
    /// Provenance of the rate map; `None` for same-currency conversions.
    pub source: Option<RateSource>,
}

impl Conversion {
    /// True if the amount was actually converted.
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        self.rate.is_some()
    }
}

/// Single source of truth for currency data.
pub struct CurrencyService {
    provider: Arc<dyn RateProvider>,
    cache: RateCache,
}

impl CurrencyService {
    /// Creates a service over `provider` with an explicit cache.
    #[must_use]
    pub fn new(provider: Arc<dyn RateProvider>, cache: RateCache) -> Self {
        Self { provider, cache }
    }

    /// Creates a service with a default one-hour cache on the system clock.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn RateProvider>) -> Self {
        Self::new(provider, RateCache::new())
    }

    /// Currency code for an ISO country code; `"USD"` when unmapped.
    #[must_use]
    pub fn currency_by_country(&self, country_code: &str) -> &'static str {
        country::currency_by_country(country_code)
    }

    /// Currency code for a country display name; `"USD"` when unmapped.
    #[must_use]
    pub fn currency_by_country_name(&self, country_name: &str) -> &'static str {
        country::currency_by_country_name(country_name)
    }

    /// Metadata for `currency_code`; the USD record when unknown.
    #[must_use]
    pub fn currency_info(&self, currency_code: &str) -> &'static CurrencyInfo {
        info::currency_info(currency_code)
    }

    /// All supported currencies.
    #[must_use]
    pub fn supported_currencies(&self) -> Vec<&'static CurrencyInfo> {
        info::supported_currencies()
    }

    /// Rates relative to `base`.
    ///
    /// Never fails; see [`Self::exchange_rates_detailed`] for the fallback
    /// order.
    pub async fn exchange_rates(&self, base: &str) -> RateMap {
        self.exchange_rates_detailed(base).await.rates
    }

    /// Rates relative to `base`, tagged with their provenance.
    ///
    /// 1. A fresh snapshot is returned without touching the network.
    /// 2. Otherwise the provider is asked; success replaces the snapshot.
    /// 3. A rejected response (bad status, no `rates`) serves the static table.
    /// 4. A raised failure (offline, undecodable body) serves the stale
    ///    snapshot if one exists, else the static table.
    ///
    /// Concurrent misses for the same base each fetch; the last one wins.
    pub async fn exchange_rates_detailed(&self, base: &str) -> RateLookup {
        if let Some(snapshot) = self.cache.fresh(base) {
            debug!(base = %base, "Serving cached exchange rates");
            return RateLookup::from_snapshot(snapshot, RateSource::Cached);
        }

        match self.provider.fetch_rates(base).await {
            Ok(rates) => {
                let snapshot = self.cache.insert(base, rates);
                info!(base = %base, count = snapshot.rates.len(), "Fetched exchange rates");
                RateLookup::from_snapshot(snapshot, RateSource::Live)
            }
            Err(e) if e.is_raised() => {
                if let Some(snapshot) = self.cache.any(base) {
                    warn!(
                        base = %base,
                        error = %e,
                        fetched_at = %snapshot.fetched_at,
                        "Exchange rate fetch failed, serving stale rates"
                    );
                    return RateLookup::from_snapshot(snapshot, RateSource::Stale);
                }
                warn!(base = %base, error = %e, "Exchange rate fetch failed, using fallback rates");
                Self::fallback_lookup(base)
            }
            Err(e) => {
                warn!(base = %base, error = %e, "Exchange rate API rejected request, using fallback rates");
                Self::fallback_lookup(base)
            }
        }
    }

    fn fallback_lookup(base: &str) -> RateLookup {
        let (table_base, rates) = fallback::rates_for(base);
        if table_base != base {
            debug!(base = %base, "No fallback table for base, serving USD table");
        }
        RateLookup {
            base: table_base,
            rates,
            source: RateSource::Fallback,
            fetched_at: None,
        }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Same-currency conversions return `amount` without any lookup. When
    /// the target rate is missing the amount comes back unchanged.
    pub async fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.convert_detailed(amount, from, to).await.amount
    }

    /// Converts `amount`, reporting the rate used and its provenance.
    pub async fn convert_detailed(&self, amount: Decimal, from: &str, to: &str) -> Conversion {
        if from == to {
            return Conversion {
                amount,
                rate: Some(Decimal::ONE),
                source: None,
            };
        }

        let lookup = self.exchange_rates_detailed(from).await;
        let converted = lookup
            .rate(to)
            .and_then(|rate| amount.checked_mul(rate).map(|value| (rate, value)));

        match converted {
            Some((rate, value)) => Conversion {
                amount: value,
                rate: Some(rate),
                source: Some(lookup.source),
            },
            None => {
                warn!(from = %from, to = %to, "No usable exchange rate, amount left unconverted");
                Conversion {
                    amount,
                    rate: None,
                    source: Some(lookup.source),
                }
            }
        }
    }

    /// Formats `amount` in `currency_code` for `locale`.
    ///
    /// Fraction digits follow the currency's `decimal_digits`. Locales without
    /// formatting rules get plain `symbol + amount`.
    #[must_use]
    pub fn format(&self, amount: Decimal, currency_code: &str, locale: &str) -> String {
        let currency = self.currency_info(currency_code);
        format::format_amount(amount, currency, locale).unwrap_or_else(|e| {
            debug!(error = %e, "Locale formatting unavailable, using plain format");
            format::format_plain(amount, currency)
        })
    }

    /// Drops every cached snapshot. The next lookup for any base fetches.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
        debug!("Exchange rate cache cleared");
    }

    /// Number of base currencies currently cached.
    #[must_use]
    pub fn cached_bases(&self) -> usize {
        self.cache.entry_count()
    }
}
