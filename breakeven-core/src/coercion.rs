//! Tolerant conversion of user input into numbers.
//!
//! Nothing in here fails: input that cannot be read as a number becomes
//! zero, and percentages are clamped into `[0, 1]`.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::format::{Locale, group_digits};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Normalizes input for number parsing: trims whitespace and turns the first
/// decimal comma into a point.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replacen(',', ".", 1)
}

/// Splits off the longest leading numeric literal, in the shape
/// `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// Returns the literal rebuilt in a form `Decimal` accepts (`.5` becomes
/// `0.5`), or `None` when the input does not start with a number.
fn leading_literal(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut pos = 0;
    let mut literal = String::new();
    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        if sign == b'-' {
            literal.push('-');
        }
        pos = 1;
    }

    let int_end = digits_from(pos);
    let int_part = &s[pos..int_end];
    pos = int_end;

    let mut frac_part = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_end = digits_from(pos + 1);
        frac_part = &s[pos + 1..frac_end];
        if !frac_part.is_empty() {
            pos = frac_end;
        }
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        let exp_sign = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                "-"
            }
            Some(b'+') => {
                exp_pos += 1;
                ""
            }
            _ => "",
        };
        let exp_end = digits_from(exp_pos);
        if exp_end > exp_pos {
            literal.push('e');
            literal.push_str(exp_sign);
            literal.push_str(&s[exp_pos..exp_end]);
        }
    }

    Some(literal)
}

/// Reads a number out of free-form text.
///
/// Trims the input, accepts a decimal comma (`"12,5"` is `12.5`) and uses
/// the leading numeric part of the text (`"12 €"` is `12`). Anything else,
/// including empty input and values outside the representable range, is 0.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use breakeven_core::coercion::num_value;
///
/// assert_eq!(num_value(" 2,5 "), dec!(2.5));
/// assert_eq!(num_value("1e3"), dec!(1000));
/// assert_eq!(num_value("n/a"), Decimal::ZERO);
/// ```
pub fn num_value(raw: &str) -> Decimal {
    let normalized = normalize_decimal_input(raw);
    let Some(literal) = leading_literal(&normalized) else {
        if !normalized.is_empty() {
            debug!(input = %raw, "not a number, using 0");
        }
        return Decimal::ZERO;
    };

    let parsed = if literal.contains('e') {
        Decimal::from_scientific(&literal)
    } else {
        Decimal::from_str(&literal)
    };
    parsed.unwrap_or_else(|e| {
        debug!(input = %raw, "number out of range, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Normalizes a ratio into `[0, 1]`.
///
/// Values above 1 are read as percentages and divided by 100, then the
/// result is clamped. `1` and `100` therefore both mean "full".
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use breakeven_core::coercion::pct;
///
/// assert_eq!(pct(dec!(70)), dec!(0.7));
/// assert_eq!(pct(dec!(0.3)), dec!(0.3));
/// assert_eq!(pct(dec!(150)), Decimal::ONE);
/// assert_eq!(pct(dec!(-5)), Decimal::ZERO);
/// ```
pub fn pct(value: Decimal) -> Decimal {
    let ratio = if value > Decimal::ONE {
        value / HUNDRED
    } else {
        value
    };
    ratio.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Formats a guest count for display.
///
/// Whole numbers (within 1e-9) are shown without decimals or grouping;
/// anything else gets exactly one fractional digit in the locale's style.
pub fn format_guests(
    value: Decimal,
    locale: Locale,
) -> String {
    let nearest = value.round();
    if (value - nearest).abs() < Decimal::new(1, 9) {
        return nearest.to_string();
    }
    group_digits(value, 1, locale)
}
