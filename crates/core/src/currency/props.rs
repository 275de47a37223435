//! Property-based tests for currency lookups, fallback rates and formatting.
//!
//! - Property 1: Unknown lookups resolve to USD
//! - Property 2: Fallback tables are self-consistent
//! - Property 3: Formatting pins fraction digits

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::country::{currency_by_country, currency_by_country_name};
use super::fallback;
use super::format::{format_amount, format_plain};
use super::info::{CURRENCIES, USD, currency_info};

/// Lower-case strings never match the upper-case code tables or the
/// capitalised country names.
fn unknown_key() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

/// Amounts from -1,000,000.0000 to 1,000,000.0000.
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn any_currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CURRENCIES.iter().map(|c| c.code).collect::<Vec<_>>())
}

/// Counts digits after the last '.' or ',' of a rendered amount.
fn fraction_digits(rendered: &str) -> usize {
    let digits: String = rendered
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    match digits.rfind(['.', ',']) {
        Some(idx) => digits.len() - idx - 1,
        None => 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Unknown lookups resolve to USD
    // =========================================================================

    /// *For any* key absent from the country tables, both lookups return USD.
    #[test]
    fn prop_unknown_country_is_usd(key in unknown_key()) {
        prop_assert_eq!(currency_by_country(&key), "USD");
        prop_assert_eq!(currency_by_country_name(&key), "USD");
    }

    /// *For any* unknown currency code, metadata is the USD record.
    #[test]
    fn prop_unknown_currency_is_usd_record(key in unknown_key()) {
        prop_assert_eq!(currency_info(&key), &USD);
    }

    // =========================================================================
    // Property 2: Fallback tables are self-consistent
    // =========================================================================

    /// *For any* seeded base, the rebased table maps the base to exactly 1
    /// and covers every currency.
    #[test]
    fn prop_rebased_table_has_unit_base(code in any_currency()) {
        let (base, rates) = fallback::rates_for(code);
        prop_assert_eq!(base.as_str(), code);
        prop_assert_eq!(rates.get(code).copied(), Some(Decimal::ONE));
        prop_assert_eq!(rates.len(), fallback::usd_rates().len());
        prop_assert!(rates.values().all(|r| *r > Decimal::ZERO));
    }

    // =========================================================================
    // Property 3: Formatting pins fraction digits
    // =========================================================================

    /// *For any* amount and currency, en-US output carries exactly the
    /// currency's decimal digits.
    #[test]
    fn prop_locale_format_pins_digits(value in amount(), code in any_currency()) {
        let info = currency_info(code);
        let rendered = format_amount(value, info, "en-US").unwrap();
        let numeric = rendered.trim_start_matches('-').trim_start_matches(info.symbol);
        let expected = usize::try_from(info.decimal_digits).unwrap();
        if expected == 0 {
            prop_assert!(!numeric.contains('.'), "{} should have no fraction", rendered);
        } else {
            prop_assert_eq!(fraction_digits(numeric), expected, "{}", rendered);
        }
    }

    /// *For any* amount and currency, the plain format also pins digits.
    #[test]
    fn prop_plain_format_pins_digits(value in amount(), code in any_currency()) {
        let info = currency_info(code);
        let rendered = format_plain(value, info);
        let numeric = &rendered[info.symbol.len()..];
        let expected = usize::try_from(info.decimal_digits).unwrap();
        if expected == 0 {
            prop_assert!(!numeric.contains('.'), "{} should have no fraction", rendered);
        } else {
            prop_assert_eq!(fraction_digits(numeric), expected, "{}", rendered);
        }
    }
}
