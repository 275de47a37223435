//! Supplier price string parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Extracts the numeric value from a US-formatted supplier price string.
///
/// Currency symbols and words around the number are ignored, so
/// `"$1,234.50"`, `"US $3"` and `"12.99 USD"` all parse. Inside the number
/// only digits, one `.` decimal point and `,` thousands separators are
/// accepted. Anything else yields `None`: European formats (`"1.234,50 €"`),
/// exponents (`"1e3"`), ranges, or strings with no digits.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let bytes = raw.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    })?;
    let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
    let (prefix, number) = (&raw[..start], &raw[start..end]);

    let negative = match prefix.matches('-').count() {
        0 => false,
        1 if prefix.ends_with('-') => true,
        _ => return None,
    };

    if !number
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
    {
        return None;
    }

    let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
    if frac_part.contains([',', '.']) || (int_part.contains(',') && !is_grouped(int_part)) {
        return None;
    }

    let mut digits: String = number.chars().filter(|c| *c != ',').collect();
    if int_part.is_empty() {
        digits.insert(0, '0');
    }
    let value = Decimal::from_str(&digits).ok()?;
    Some(if negative { -value } else { value })
}

/// `1,234,567` style: a 1-3 digit lead group, then groups of exactly three.
fn is_grouped(int_part: &str) -> bool {
    let mut groups = int_part.split(',');
    let lead_ok = groups
        .next()
        .is_some_and(|lead| (1..=3).contains(&lead.len()));
    lead_ok && groups.all(|group| group.len() == 3)
}
