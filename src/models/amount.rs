use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse the numeric prefix of free-text amount input.
///
/// Leading whitespace is skipped, then an optional sign and the longest run of
/// digits containing at most one `.` is read. Trailing text is ignored, so
/// `"12abc"` is 12 and `"1,000"` is 1. Input without a numeric prefix is zero.
/// Magnitudes beyond what a `Decimal` holds clamp to `Decimal::MAX`.
pub(crate) fn parse_amount(text: &str) -> Decimal {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_dot = false;
    for c in rest.chars() {
        match c {
            '0'..='9' if seen_dot => frac_part.push(c),
            '0'..='9' => int_part.push(c),
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return Decimal::ZERO;
    }
    if int_part.is_empty() {
        int_part.push('0');
    }

    let literal = if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    };

    let value = Decimal::from_str(&literal).unwrap_or(Decimal::MAX);
    if negative {
        -value
    } else {
        value
    }
}
