//! Currency metadata, country resolution and exchange rates.

pub mod cache;
pub mod clock;
pub mod country;
pub mod exchange;
pub mod fallback;
pub mod format;
pub mod info;
pub mod provider;
pub mod service;

#[cfg(test)]
mod props;

pub use cache::RateCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use country::{Country, currency_by_country, currency_by_country_name};
pub use exchange::{ExchangeRateSnapshot, RateLookup, RateMap, RateSource};
pub use format::FormatError;
pub use info::{CurrencyInfo, DEFAULT_CURRENCY, currency_info, supported_currencies};
pub use provider::{ProviderError, RateProvider};
pub use service::{Conversion, CurrencyService, DEFAULT_LOCALE};
