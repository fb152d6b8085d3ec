//! Common arithmetic helpers for the break-even calculations.
//!
//! Model values come straight from user input, so products and sums
//! saturate at the `Decimal` range instead of panicking on overflow.

use rust_decimal::Decimal;

/// Months per year; monthly figures are annual figures spread over this.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use breakeven_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies all factors, saturating on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use breakeven_core::calculations::common::product;
///
/// assert_eq!(product(&[dec!(3000), dec!(2), dec!(7)]), dec!(42000));
/// ```
pub fn product(factors: &[Decimal]) -> Decimal {
    factors
        .iter()
        .fold(Decimal::ONE, |acc, factor| acc.saturating_mul(*factor))
}

/// Sums all values, saturating on overflow.
pub fn total<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Spreads an annual amount evenly over twelve months.
pub fn per_month(annual: Decimal) -> Decimal {
    annual / MONTHS_PER_YEAR
}

/// Scales a monthly amount up to a year.
pub fn per_year(monthly: Decimal) -> Decimal {
    monthly.saturating_mul(MONTHS_PER_YEAR)
}
