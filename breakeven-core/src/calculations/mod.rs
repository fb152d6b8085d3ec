//! Break-even calculations.
//!
//! This module turns a [`crate::models::BusinessModel`] into the aggregate
//! cost, revenue and profit figures shown to the user.

pub mod calendar;
pub mod common;
pub mod engine;
pub mod figures;

pub use calendar::{CalendarError, MONTHS_HIGH_SEASON, MONTHS_WINTER_SEASON, SeasonCalendar};
pub use engine::{BreakEvenCalculator, calculate_all};
pub use figures::{
    AggregateFigures, DailyFigures, EventLineFigures, EventSectionFigures, MonthlyAnnual,
    PersonnelFigures, SeasonSplit, Totals,
};
