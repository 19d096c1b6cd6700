//! Canonical number formatting and the decoder's number grammar.
//!
//! Emission rules (the only forms the encoder produces):
//!
//! - Integer-valued numbers, including floats with a zero fractional part,
//!   emit as plain decimal digits with an optional leading `-`: no exponent,
//!   no decimal point, no leading zeros.
//! - Other finite floats emit as shortest-round-trip decimal with a single
//!   `.` and no exponent. Rust's `f64` `Display` already produces this form.
//! - Negative zero emits as `0`.
//!
//! The decoder accepts a wider grammar: optional `-`, an integer part
//! without leading zeros, an optional fraction, and an optional
//! case-insensitive exponent with signed digits. A token with a redundant
//! leading zero (`05`) is not a number; it stays a string. The quoting rules
//! use a looser variant of the same grammar that also matches those
//! leading-zero lookalikes, so the encoder quotes them.

use crate::Number;
use num_bigint::BigInt;

/// Formats a finite float in canonical form. Callers reject NaN/infinity
/// before this point.
pub(crate) fn format_float(f: f64) -> String {
    if f == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    f.to_string()
}

/// Parses an unquoted token under the strict number grammar.
///
/// Tokens without a fraction or exponent become integers, falling back to
/// arbitrary precision when they overflow `i64`. Everything else becomes a
/// float.
pub(crate) fn parse_number(token: &str) -> Option<Number> {
    if !matches_grammar(token, false) {
        return None;
    }
    if token.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
        // Overflowing exponents parse to infinity, which the value model
        // excludes; such tokens stay strings.
        return token
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float);
    }
    if let Ok(i) = token.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    BigInt::parse_bytes(token.as_bytes(), 10).map(Number::Big)
}

/// `true` when the token could be mistaken for a number, including
/// leading-zero forms like `05`. Such strings must be quoted.
pub(crate) fn is_numeric_like(token: &str) -> bool {
    matches_grammar(token, true)
}

/// The decoder's number grammar:
/// `-? ( 0 | [1-9][0-9]* ) ( \. [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`
///
/// With `allow_leading_zeros` the integer part may be any digit run, which
/// turns the check into the numeric-lookalike test used for quoting.
fn matches_grammar(token: &str, allow_leading_zeros: bool) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_len = i - int_start;
    if int_len == 0 {
        return false;
    }
    if !allow_leading_zeros && int_len > 1 && bytes[int_start] == b'0' {
        return false;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
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
