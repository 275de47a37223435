//! Static approximate exchange rates.
//!
//! Served only when no live or cached data exists. The numbers are a
//! hand-maintained seed and drift from the market; nothing should depend on
//! their exact values.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use super::exchange::RateMap;
use super::info::DEFAULT_CURRENCY;

/// Rebased rates are rounded to this many places.
const REBASE_PRECISION: u32 = 6;

/// Units of each currency per 1 USD, as (code, mantissa, scale).
const USD_SEED: &[(&str, i64, u32)] = &[
    ("USD", 1, 0),
    ("CAD", 136, 2),
    ("MXN", 171, 1),
    ("BRL", 50, 1),
    ("ARS", 870, 0),
    ("CLP", 940, 0),
    ("COP", 3900, 0),
    ("PEN", 375, 2),
    ("UYU", 39, 0),
    ("EUR", 92, 2),
    ("GBP", 79, 2),
    ("CHF", 88, 2),
    ("SEK", 105, 1),
    ("NOK", 106, 1),
    ("DKK", 687, 2),
    ("ISK", 138, 0),
    ("PLN", 398, 2),
    ("CZK", 233, 1),
    ("HUF", 360, 0),
    ("RON", 458, 2),
    ("BGN", 180, 2),
    ("RUB", 92, 0),
    ("UAH", 39, 0),
    ("TRY", 32, 0),
    ("AED", 367, 2),
    ("SAR", 375, 2),
    ("QAR", 364, 2),
    ("KWD", 307, 3),
    ("BHD", 376, 3),
    ("OMR", 385, 3),
    ("JOD", 709, 3),
    ("ILS", 37, 1),
    ("EGP", 47, 0),
    ("ZAR", 187, 1),
    ("NGN", 1500, 0),
    ("KES", 130, 0),
    ("MAD", 10, 0),
    ("GHS", 145, 1),
    ("XOF", 605, 0),
    ("JPY", 1495, 1),
    ("CNY", 724, 2),
    ("HKD", 782, 2),
    ("TWD", 315, 1),
    ("KRW", 1330, 0),
    ("SGD", 134, 2),
    ("MYR", 47, 1),
    ("THB", 358, 1),
    ("IDR", 15600, 0),
    ("PHP", 562, 1),
    ("VND", 24300, 0),
    ("INR", 831, 1),
    ("PKR", 279, 0),
    ("BDT", 110, 0),
    ("LKR", 320, 0),
    ("AUD", 152, 2),
    ("NZD", 164, 2),
];

static USD_RATES: Lazy<RateMap> = Lazy::new(|| {
    USD_SEED
        .iter()
        .map(|&(code, mantissa, scale)| (code.to_string(), Decimal::new(mantissa, scale)))
        .collect()
});

/// The seed table, relative to USD.
#[must_use]
pub fn usd_rates() -> RateMap {
    USD_RATES.clone()
}

/// The seed table rebased onto `base`, or `None` if `base` is not seeded.
///
/// `rate[x] = usd[x] / usd[base]`, with `base -> 1` exactly.
#[must_use]
pub fn rebased(base: &str) -> Option<RateMap> {
    if base == DEFAULT_CURRENCY {
        return Some(usd_rates());
    }

    let base_per_usd = USD_RATES.get(base).copied().filter(|r| !r.is_zero())?;

    let rates = USD_RATES
        .iter()
        .map(|(code, usd_rate)| {
            let rate = if code == base {
                Decimal::ONE
            } else {
                (*usd_rate / base_per_usd).round_dp(REBASE_PRECISION)
            };
            (code.clone(), rate)
        })
        .collect();

    Some(rates)
}

/// Fallback rates for `base` and the base they are actually relative to.
///
/// Unknown bases get the USD table.
#[must_use]
pub fn rates_for(base: &str) -> (String, RateMap) {
    match rebased(base) {
        Some(rates) => (base.to_string(), rates),
        None => (DEFAULT_CURRENCY.to_string(), usd_rates()),
    }
}
