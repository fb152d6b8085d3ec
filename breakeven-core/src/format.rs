//! Locale-aware rendering of money and counts.
//!
//! Currency is always euro; the locale only decides separators and where the
//! symbol goes.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

const NBSP: char = '\u{a0}';

/// Number formatting conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// `1.234,56 €`
    #[default]
    DeDe,
    /// `€1,234.56`
    EnUs,
}

impl Locale {
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::DeDe => ',',
            Self::EnUs => '.',
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Self::DeDe => '.',
            Self::EnUs => ',',
        }
    }
}

/// Rounds `value` half away from zero to `dp` places and renders it with the
/// locale's grouping and decimal separators. A negative `value` keeps its
/// minus sign even when it rounds to zero, so `-0.001` renders as `-0.00`.
pub fn group_digits(
    value: Decimal,
    dp: u32,
    locale: Locale,
) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = value < Decimal::ZERO;
    let plain = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(locale.group_separator());
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

/// Formats euro amounts with two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use breakeven_core::format::{CurrencyFormatter, Locale};
///
/// let de = CurrencyFormatter::new(Locale::DeDe);
/// assert_eq!(de.format(dec!(17500)), "17.500,00\u{a0}€");
///
/// let en = CurrencyFormatter::new(Locale::EnUs);
/// assert_eq!(en.format(dec!(-1234.565)), "-€1,234.57");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
}

impl CurrencyFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let digits = group_digits(round_half_up(amount).abs(), 2, self.locale);
        let sign = if amount < Decimal::ZERO { "-" } else { "" };
        match self.locale {
            Locale::DeDe => format!("{sign}{digits}{NBSP}€"),
            Locale::EnUs => format!("{sign}€{digits}"),
        }
    }
}
