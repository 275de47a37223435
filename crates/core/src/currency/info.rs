//! Static currency metadata.

use serde::Serialize;

/// Display metadata for a single currency.
///
/// Serialized with camelCase keys; the console reads `decimalDigits`
/// directly when it renders prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Currency code (ISO 4217 where one exists).
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display symbol. Not unique across currencies.
    pub symbol: &'static str,
    /// Conventional number of fraction digits (0, 2 or 3).
    pub decimal_digits: u32,
}

/// Currency every failed lookup resolves to.
pub const DEFAULT_CURRENCY: &str = "USD";

const fn currency(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    decimal_digits: u32,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        name,
        symbol,
        decimal_digits,
    }
}

/// US Dollar record, the fallback for unknown codes.
pub const USD: CurrencyInfo = currency("USD", "US Dollar", "$", 2);

/// All supported currencies.
pub static CURRENCIES: &[CurrencyInfo] = &[
    USD,
    // Americas
    currency("CAD", "Canadian Dollar", "C$", 2),
    currency("MXN", "Mexican Peso", "MX$", 2),
    currency("BRL", "Brazilian Real", "R$", 2),
    currency("ARS", "Argentine Peso", "AR$", 2),
    currency("CLP", "Chilean Peso", "CL$", 0),
    currency("COP", "Colombian Peso", "COL$", 2),
    currency("PEN", "Peruvian Sol", "S/", 2),
    currency("UYU", "Uruguayan Peso", "$U", 2),
    // Europe
    currency("EUR", "Euro", "€", 2),
    currency("GBP", "British Pound", "£", 2),
    currency("CHF", "Swiss Franc", "CHF", 2),
    currency("SEK", "Swedish Krona", "kr", 2),
    currency("NOK", "Norwegian Krone", "kr", 2),
    currency("DKK", "Danish Krone", "kr", 2),
    currency("ISK", "Icelandic Krona", "kr", 0),
    currency("PLN", "Polish Zloty", "zł", 2),
    currency("CZK", "Czech Koruna", "Kč", 2),
    currency("HUF", "Hungarian Forint", "Ft", 2),
    currency("RON", "Romanian Leu", "lei", 2),
    currency("BGN", "Bulgarian Lev", "лв", 2),
    currency("RUB", "Russian Ruble", "₽", 2),
    currency("UAH", "Ukrainian Hryvnia", "₴", 2),
    currency("TRY", "Turkish Lira", "₺", 2),
    // Middle East
    currency("AED", "UAE Dirham", "د.إ", 2),
    currency("SAR", "Saudi Riyal", "﷼", 2),
    currency("QAR", "Qatari Riyal", "QR", 2),
    currency("KWD", "Kuwaiti Dinar", "KD", 3),
    currency("BHD", "Bahraini Dinar", "BD", 3),
    currency("OMR", "Omani Rial", "OMR", 3),
    currency("JOD", "Jordanian Dinar", "JD", 3),
    currency("ILS", "Israeli New Shekel", "₪", 2),
    // Africa
    currency("EGP", "Egyptian Pound", "E£", 2),
    currency("ZAR", "South African Rand", "R", 2),
    currency("NGN", "Nigerian Naira", "₦", 2),
    currency("KES", "Kenyan Shilling", "KSh", 2),
    currency("MAD", "Moroccan Dirham", "DH", 2),
    currency("GHS", "Ghanaian Cedi", "GH₵", 2),
    currency("XOF", "West African CFA Franc", "CFA", 0),
    // Asia
    currency("JPY", "Japanese Yen", "¥", 0),
    currency("CNY", "Chinese Yuan", "¥", 2),
    currency("HKD", "Hong Kong Dollar", "HK$", 2),
    currency("TWD", "New Taiwan Dollar", "NT$", 2),
    currency("KRW", "South Korean Won", "₩", 0),
    currency("SGD", "Singapore Dollar", "S$", 2),
    currency("MYR", "Malaysian Ringgit", "RM", 2),
    currency("THB", "Thai Baht", "฿", 2),
    currency("IDR", "Indonesian Rupiah", "Rp", 2),
    currency("PHP", "Philippine Peso", "₱", 2),
    currency("VND", "Vietnamese Dong", "₫", 0),
    currency("INR", "Indian Rupee", "₹", 2),
    currency("PKR", "Pakistani Rupee", "₨", 2),
    currency("BDT", "Bangladeshi Taka", "৳", 2),
    currency("LKR", "Sri Lankan Rupee", "Rs", 2),
    // Oceania
    currency("AUD", "Australian Dollar", "A$", 2),
    currency("NZD", "New Zealand Dollar", "NZ$", 2),
];

/// Finds the record for `code`, if the code is supported.
#[must_use]
pub fn find_currency(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Returns the record for `code`, or the USD record for unknown codes.
#[must_use]
pub fn currency_info(code: &str) -> &'static CurrencyInfo {
    find_currency(code).unwrap_or(&USD)
}

/// Returns every supported currency.
#[must_use]
pub fn supported_currencies() -> Vec<&'static CurrencyInfo> {
    CURRENCIES.iter().collect()
}
