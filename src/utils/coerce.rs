//! Lenient integer coercion for query parameters.
//!
//! Numeric parameters are never rejected. A value is read from its leading
//! integer prefix (`"12abc"` is 12), and a missing, unparsable or zero value
//! falls back to the default. Negative values pass through unchanged.

/// Parses the leading integer of `raw`, ignoring leading whitespace.
///
/// Returns `None` when no digits are found. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerces an optional raw value, falling back to `default` on missing,
/// unparsable or zero input.
pub fn coerce_or(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(n) => n,
    }
}
