//! Season lengths used to annualise seasonal figures.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Season;

/// Months in the high season.
pub const MONTHS_HIGH_SEASON: u32 = 7;
/// Months in the winter season.
pub const MONTHS_WINTER_SEASON: u32 = 5;

/// Errors produced when building a [`SeasonCalendar`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// The two seasons together are longer than a year.
    #[error("seasons cover {0} months, at most 12 are allowed")]
    TooManyMonths(u32),
}

/// Lengths of the two seasons in months.
///
/// The seasons need not cover the whole year, but may not exceed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonCalendar {
    high_season_months: u32,
    winter_season_months: u32,
}

impl SeasonCalendar {
    pub fn new(
        high_season_months: u32,
        winter_season_months: u32,
    ) -> Result<Self, CalendarError> {
        let covered = high_season_months.saturating_add(winter_season_months);
        if covered > 12 {
            return Err(CalendarError::TooManyMonths(covered));
        }
        Ok(Self {
            high_season_months,
            winter_season_months,
        })
    }

    pub fn months(
        &self,
        season: Season,
    ) -> u32 {
        match season {
            Season::High => self.high_season_months,
            Season::Winter => self.winter_season_months,
        }
    }

    /// Season length as a multiplier.
    pub fn factor(
        &self,
        season: Season,
    ) -> Decimal {
        Decimal::from(self.months(season))
    }
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self {
            high_season_months: MONTHS_HIGH_SEASON,
            winter_season_months: MONTHS_WINTER_SEASON,
        }
    }
}
