//! Locale-aware currency formatting.
//!
//! Fraction digits are always pinned to the currency's `decimal_digits`,
//! whatever the locale would normally use. Midpoints round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::info::CurrencyInfo;

/// Formatting failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No formatting rules for the requested locale.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

#[derive(Debug)]
struct LocaleRules {
    tag: &'static str,
    group_separator: &'static str,
    decimal_separator: &'static str,
    symbol_position: SymbolPosition,
    symbol_gap: &'static str,
    grouping: Grouping,
    /// Integer parts shorter than this are not grouped.
    min_grouped_len: usize,
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

const fn prefix(tag: &'static str, group: &'static str, decimal: &'static str) -> LocaleRules {
    LocaleRules {
        tag,
        group_separator: group,
        decimal_separator: decimal,
        symbol_position: SymbolPosition::Prefix,
        symbol_gap: "",
        grouping: Grouping::Thousands,
        min_grouped_len: 4,
    }
}

const fn suffix(tag: &'static str, group: &'static str, decimal: &'static str) -> LocaleRules {
    LocaleRules {
        tag,
        group_separator: group,
        decimal_separator: decimal,
        symbol_position: SymbolPosition::Suffix,
        symbol_gap: NBSP,
        grouping: Grouping::Thousands,
        min_grouped_len: 4,
    }
}

static LOCALES: &[LocaleRules] = &[
    prefix("en-US", ",", "."),
    prefix("en-GB", ",", "."),
    LocaleRules {
        grouping: Grouping::Indian,
        ..prefix("en-IN", ",", ".")
    },
    suffix("de-DE", ".", ","),
    suffix("fr-FR", NNBSP, ","),
    LocaleRules {
        min_grouped_len: 5,
        ..suffix("es-ES", ".", ",")
    },
    suffix("it-IT", ".", ","),
    LocaleRules {
        symbol_gap: NBSP,
        ..prefix("nl-NL", ".", ",")
    },
    LocaleRules {
        symbol_gap: NBSP,
        ..prefix("pt-BR", ".", ",")
    },
    prefix("ja-JP", ",", "."),
    prefix("zh-CN", ",", "."),
    prefix("ko-KR", ",", "."),
];

fn rules_for(locale: &str) -> Option<&'static LocaleRules> {
    let normalized = locale.replace('_', "-");
    LOCALES
        .iter()
        .find(|rules| rules.tag.eq_ignore_ascii_case(&normalized))
}

/// Rounds `amount` to `digits` places the way display formatting does.
#[must_use]
pub fn round_for_display(amount: Decimal, digits: u32) -> Decimal {
    amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `amount` with exactly `digits` fraction digits, no grouping.
fn fixed(amount: Decimal, digits: u32) -> String {
    format!("{:.prec$}", amount, prec = digits as usize)
}

fn group(int_part: &str, rules: &LocaleRules) -> String {
    if int_part.len() < rules.min_grouped_len {
        return int_part.to_string();
    }

    let size = match rules.grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let (mut rest, last) = int_part.split_at(int_part.len() - 3);
    let mut groups = vec![last];
    while !rest.is_empty() {
        let (head, chunk) = rest.split_at(rest.len().saturating_sub(size));
        groups.push(chunk);
        rest = head;
    }
    groups.reverse();
    groups.join(rules.group_separator)
}

/// Formats `amount` in `currency` following `locale`'s conventions.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedLocale`] when `locale` has no rules.
pub fn format_amount(
    amount: Decimal,
    currency: &CurrencyInfo,
    locale: &str,
) -> Result<String, FormatError> {
    let rules =
        rules_for(locale).ok_or_else(|| FormatError::UnsupportedLocale(locale.to_string()))?;

    let rounded = round_for_display(amount, currency.decimal_digits);
    let digits = fixed(rounded.abs(), currency.decimal_digits);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut number = group(int_part, rules);
    if let Some(frac_part) = frac_part {
        number.push_str(rules.decimal_separator);
        number.push_str(frac_part);
    }

    let body = match rules.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{number}", currency.symbol, rules.symbol_gap),
        SymbolPosition::Suffix => format!("{number}{}{}", rules.symbol_gap, currency.symbol),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    Ok(format!("{sign}{body}"))
}

/// Plain `symbol + fixed digits` rendering, used when locale rules are
/// unavailable. Always prefixes the symbol and never groups.
#[must_use]
pub fn format_plain(amount: Decimal, currency: &CurrencyInfo) -> String {
    let digits = currency.decimal_digits;
    format!("{}{}", currency.symbol, fixed(round_for_display(amount, digits), digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::info::currency_info;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.5), "USD", "en-US", "$1,234.50")]
    #[case(dec!(1234.5), "JPY", "en-US", "¥1,235")]
    #[case(dec!(1234.5), "KWD", "en-US", "KD1,234.500")]
    #[case(dec!(999), "USD", "en-US", "$999.00")]
    #[case(dec!(0), "USD", "en-US", "$0.00")]
    #[case(dec!(1234567.891), "EUR", "de-DE", "1.234.567,89\u{a0}€")]
    #[case(dec!(1234.5), "EUR", "fr-FR", "1\u{202f}234,50\u{a0}€")]
    #[case(dec!(1234.5), "EUR", "es-ES", "1234,50\u{a0}€")]
    #[case(dec!(12345), "EUR", "es-ES", "12.345,00\u{a0}€")]
    #[case(dec!(1234.5), "EUR", "nl-NL", "€\u{a0}1.234,50")]
    #[case(dec!(1234.5), "BRL", "pt-BR", "R$\u{a0}1.234,50")]
    #[case(dec!(1234567.5), "INR", "en-IN", "₹12,34,567.50")]
    #[case(dec!(1234567), "KRW", "ko-KR", "₩1,234,567")]
    fn test_format_amount(
        #[case] amount: Decimal,
        #[case] code: &str,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_amount(amount, currency_info(code), locale).unwrap(), expected);
    }

    #[test]
    fn test_negative_amounts_put_sign_first() {
        let usd = currency_info("USD");
        assert_eq!(format_amount(dec!(-42.5), usd, "en-US").unwrap(), "-$42.50");

        let eur = currency_info("EUR");
        assert_eq!(format_amount(dec!(-42.5), eur, "de-DE").unwrap(), "-42,50\u{a0}€");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        let usd = currency_info("USD");
        assert_eq!(format_amount(dec!(-0.001), usd, "en-US").unwrap(), "$0.00");
    }

    #[rstest]
    #[case("EN-us")]
    #[case("en_US")]
    fn test_locale_tag_normalization(#[case] locale: &str) {
        assert_eq!(
            format_amount(dec!(5), currency_info("USD"), locale).unwrap(),
            "$5.00"
        );
    }

    #[test]
    fn test_unsupported_locale() {
        let err = format_amount(dec!(5), currency_info("USD"), "xx-YY").unwrap_err();
        assert_eq!(err, FormatError::UnsupportedLocale("xx-YY".to_string()));
    }

    #[rstest]
    #[case(dec!(1234.5), "JPY", "¥1235")]
    #[case(dec!(1234.5), "KWD", "KD1234.500")]
    #[case(dec!(1234.567), "EUR", "€1234.57")]
    #[case(dec!(-5), "USD", "$-5.00")]
    fn test_format_plain(#[case] amount: Decimal, #[case] code: &str, #[case] expected: &str) {
        assert_eq!(format_plain(amount, currency_info(code)), expected);
    }

    #[test]
    fn test_round_for_display_midpoint_away_from_zero() {
        assert_eq!(round_for_display(dec!(2.5), 0), dec!(3));
        assert_eq!(round_for_display(dec!(-2.5), 0), dec!(-3));
        assert_eq!(round_for_display(dec!(1.005), 2), dec!(1.01));
    }
}
