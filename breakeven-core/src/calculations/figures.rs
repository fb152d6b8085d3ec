//! Aggregate figures derived from a [`crate::models::BusinessModel`].
//!
//! All amounts are raw, unrounded `Decimal`s; formatting happens when the
//! figures are published.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Season;

use super::common::per_month;

/// One amount per season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeasonSplit {
    pub high: Decimal,
    pub winter: Decimal,
}

impl SeasonSplit {
    pub fn get(
        &self,
        season: Season,
    ) -> Decimal {
        match season {
            Season::High => self.high,
            Season::Winter => self.winter,
        }
    }

    pub fn sum(&self) -> Decimal {
        self.high.saturating_add(self.winter)
    }

    /// Both seasons spread over twelve months.
    pub fn per_month(&self) -> SeasonSplit {
        SeasonSplit {
            high: per_month(self.high),
            winter: per_month(self.winter),
        }
    }
}

/// A monthly amount and its annual counterpart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyAnnual {
    pub monthly: Decimal,
    pub annual: Decimal,
}

/// Staffing cost per season.
///
/// `monthly` is the annual figure over twelve months, not over the season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PersonnelFigures {
    pub annual: SeasonSplit,
    pub monthly: SeasonSplit,
}

impl PersonnelFigures {
    pub fn annual_total(&self) -> Decimal {
        self.annual.sum()
    }
}

/// Walk-in business for one season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyFigures {
    /// Guests per open day.
    pub guests: Decimal,
    /// Revenue per month of the season.
    pub monthly: Decimal,
    /// Revenue over the whole season.
    pub annual: Decimal,
}

/// Season revenue of one event line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLineFigures {
    pub key: String,
    /// Revenue of a single occurrence.
    pub price: Decimal,
    pub seasons: SeasonSplit,
}

/// Ticketed or fixed-price events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventSectionFigures {
    pub lines: Vec<EventLineFigures>,
    pub annual: SeasonSplit,
    pub monthly: SeasonSplit,
}

impl EventSectionFigures {
    pub fn line(
        &self,
        key: &str,
    ) -> Option<&EventLineFigures> {
        self.lines.iter().find(|line| line.key == key)
    }
}

/// Grand totals across all sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub cost: MonthlyAnnual,
    pub revenue: MonthlyAnnual,
    pub profit: MonthlyAnnual,
}

impl Totals {
    pub fn is_monthly_loss(&self) -> bool {
        self.profit.monthly < Decimal::ZERO
    }

    pub fn is_annual_loss(&self) -> bool {
        self.profit.annual < Decimal::ZERO
    }
}

/// Everything the break-even view displays, computed from one model snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateFigures {
    pub personnel: PersonnelFigures,
    pub goods: MonthlyAnnual,
    pub operating: MonthlyAnnual,
    pub daily_high: DailyFigures,
    pub daily_winter: DailyFigures,
    pub ticketed: EventSectionFigures,
    pub fixed: EventSectionFigures,
    /// Ticketed plus fixed events, both seasons.
    pub event_revenue_annual: Decimal,
    pub totals: Totals,
}

impl AggregateFigures {
    pub fn daily(
        &self,
        season: Season,
    ) -> &DailyFigures {
        match season {
            Season::High => &self.daily_high,
            Season::Winter => &self.daily_winter,
        }
    }
}
