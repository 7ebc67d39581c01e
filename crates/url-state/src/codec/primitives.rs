//! Primitive text encodings for the query-string wire format.
//!
//! Implements percent-encoding of URI components and the textual number
//! format.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// =============================================================================
// PERCENT ENCODING
// =============================================================================

/// Characters escaped in a URI component: everything but ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a URI component.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_COMPONENT).into()
}

/// Percent-decodes a URI component.
///
/// Never fails: malformed escapes are kept verbatim and invalid UTF-8 is
/// replaced with U+FFFD. `+` is not treated as a space.
pub fn decode_component(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Parses number text the way a script engine's `Number(text)` does.
///
/// Surrounding whitespace is ignored and empty text is zero. Accepts
/// decimal literals with optional sign, fraction and exponent, signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Everything else is
/// `NaN`.
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_integer(s) {
        return n;
    }

    if !is_decimal_literal(s) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    // from_str_radix would accept a sign here
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    Some(value)
}

/// Checks `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Formats a number as decimal text.
///
/// `NaN` and the infinities use their script-engine spellings, negative
/// zero prints as `0`, and integral values have no fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        // Display for f64 is the shortest text that parses back exactly
        n.to_string()
    }
}
