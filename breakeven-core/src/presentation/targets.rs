//! Names of the display slots figures are published to.

use crate::models::Season;

pub const GOODS_MONTHLY: &str = "goods-month";
pub const GOODS_ANNUAL: &str = "goods-annual";
pub const OPERATING_MONTHLY: &str = "op-month";
pub const OPERATING_ANNUAL: &str = "op-annual";

pub const SUM_COSTS_MONTHLY: &str = "sum-costs-m";
pub const SUM_COSTS_ANNUAL: &str = "sum-costs-ann";
pub const SUM_REVENUE_MONTHLY: &str = "sum-rev-m";
pub const SUM_REVENUE_ANNUAL: &str = "sum-rev-ann";
pub const SUM_PROFIT_MONTHLY: &str = "sum-profit-m";
pub const SUM_PROFIT_ANNUAL: &str = "sum-profit-ann";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Monthly,
    Annual,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Monthly, Period::Annual];

    fn suffix(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Annual => "annual",
        }
    }
}

/// `staff-hs-month`, `staff-ws-annual`, ...
pub fn staff(
    season: Season,
    period: Period,
) -> String {
    format!("staff-{}-{}", season.tag(), period.suffix())
}

/// `guests-high-season-daily`, `guests-winter-season-daily`
pub fn guests(season: Season) -> String {
    format!("guests-{}", season.daily_key())
}

/// `daily-hs-month`, `daily-ws-annual`, ...
pub fn daily(
    season: Season,
    period: Period,
) -> String {
    format!("daily-{}-{}", season.tag(), period.suffix())
}

/// Season value of one event line: `trivia-nights-hs`.
pub fn event_line(
    key: &str,
    season: Season,
) -> String {
    format!("{key}-{}", season.tag())
}

/// Section totals: `ticketed-hs-month`, `fixed-ws-annual`, ...
pub fn event_section(
    section: &str,
    season: Season,
    period: Period,
) -> String {
    format!("{section}-{}-{}", season.tag(), period.suffix())
}
