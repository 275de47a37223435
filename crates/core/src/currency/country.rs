//! Country to currency resolution.
//!
//! One canonical table keyed by ISO country code. The name-keyed index is
//! derived from it on first use, so lookups by code and by display name
//! always agree.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::info::DEFAULT_CURRENCY;

/// A country the console can ship to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, upper case.
    pub code: &'static str,
    /// Display name exactly as the console shows it.
    pub name: &'static str,
    /// Currency code used for prices in this country.
    pub currency: &'static str,
}

const fn country(code: &'static str, name: &'static str, currency: &'static str) -> Country {
    Country {
        code,
        name,
        currency,
    }
}

/// All supported countries.
pub static COUNTRIES: &[Country] = &[
    // Americas
    country("US", "United States", "USD"),
    country("CA", "Canada", "CAD"),
    country("MX", "Mexico", "MXN"),
    country("BR", "Brazil", "BRL"),
    country("AR", "Argentina", "ARS"),
    country("CL", "Chile", "CLP"),
    country("CO", "Colombia", "COP"),
    country("PE", "Peru", "PEN"),
    country("UY", "Uruguay", "UYU"),
    country("EC", "Ecuador", "USD"),
    country("PR", "Puerto Rico", "USD"),
    // Europe
    country("GB", "United Kingdom", "GBP"),
    country("IE", "Ireland", "EUR"),
    country("DE", "Germany", "EUR"),
    country("FR", "France", "EUR"),
    country("ES", "Spain", "EUR"),
    country("IT", "Italy", "EUR"),
    country("NL", "Netherlands", "EUR"),
    country("BE", "Belgium", "EUR"),
    country("AT", "Austria", "EUR"),
    country("PT", "Portugal", "EUR"),
    country("FI", "Finland", "EUR"),
    country("GR", "Greece", "EUR"),
    country("LU", "Luxembourg", "EUR"),
    country("SK", "Slovakia", "EUR"),
    country("SI", "Slovenia", "EUR"),
    country("EE", "Estonia", "EUR"),
    country("LV", "Latvia", "EUR"),
    country("LT", "Lithuania", "EUR"),
    country("MT", "Malta", "EUR"),
    country("CY", "Cyprus", "EUR"),
    country("HR", "Croatia", "EUR"),
    country("RE", "Réunion", "EUR"),
    country("CH", "Switzerland", "CHF"),
    country("SE", "Sweden", "SEK"),
    country("NO", "Norway", "NOK"),
    country("DK", "Denmark", "DKK"),
    country("IS", "Iceland", "ISK"),
    country("PL", "Poland", "PLN"),
    country("CZ", "Czech Republic", "CZK"),
    country("HU", "Hungary", "HUF"),
    country("RO", "Romania", "RON"),
    country("BG", "Bulgaria", "BGN"),
    country("RU", "Russia", "RUB"),
    country("UA", "Ukraine", "UAH"),
    country("TR", "Türkiye", "TRY"),
    // Middle East
    country("AE", "United Arab Emirates", "AED"),
    country("SA", "Saudi Arabia", "SAR"),
    country("QA", "Qatar", "QAR"),
    country("KW", "Kuwait", "KWD"),
    country("BH", "Bahrain", "BHD"),
    country("OM", "Oman", "OMR"),
    country("JO", "Jordan", "JOD"),
    country("IL", "Israel", "ILS"),
    // Africa
    country("EG", "Egypt", "EGP"),
    country("ZA", "South Africa", "ZAR"),
    country("NG", "Nigeria", "NGN"),
    country("KE", "Kenya", "KES"),
    country("MA", "Morocco", "MAD"),
    country("GH", "Ghana", "GHS"),
    country("CI", "Côte d'Ivoire", "XOF"),
    country("SN", "Senegal", "XOF"),
    // Asia
    country("JP", "Japan", "JPY"),
    country("CN", "China", "CNY"),
    country("HK", "Hong Kong", "HKD"),
    country("TW", "Taiwan", "TWD"),
    country("KR", "South Korea", "KRW"),
    country("SG", "Singapore", "SGD"),
    country("MY", "Malaysia", "MYR"),
    country("TH", "Thailand", "THB"),
    country("ID", "Indonesia", "IDR"),
    country("PH", "Philippines", "PHP"),
    country("VN", "Vietnam", "VND"),
    country("IN", "India", "INR"),
    country("PK", "Pakistan", "PKR"),
    country("BD", "Bangladesh", "BDT"),
    country("LK", "Sri Lanka", "LKR"),
    // Oceania
    country("AU", "Australia", "AUD"),
    country("NZ", "New Zealand", "NZD"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

static BY_NAME: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.name, c)).collect());

/// Finds a country by ISO code. Case-sensitive.
#[must_use]
pub fn find_by_code(code: &str) -> Option<&'static Country> {
    BY_CODE.get(code).copied()
}

/// Finds a country by its exact display name, diacritics included.
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static Country> {
    BY_NAME.get(name).copied()
}

/// Currency for an ISO country code, `"USD"` when unmapped.
#[must_use]
pub fn currency_by_country(code: &str) -> &'static str {
    find_by_code(code).map_or(DEFAULT_CURRENCY, |c| c.currency)
}

/// Currency for a country display name, `"USD"` when unmapped.
///
/// Alternate spellings ("USA", "Turkey") are not recognised and resolve to
/// USD like any other miss.
#[must_use]
pub fn currency_by_country_name(name: &str) -> &'static str {
    find_by_name(name).map_or(DEFAULT_CURRENCY, |c| c.currency)
}
