//! Break-even calculation for a seasonal hospitality business.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Personnel: `salary × staff × season months`, per season |
//! | 2    | Goods and operating costs: sum of `monthly`, annual = monthly × 12 |
//! | 3    | Daily revenue: `seats × occupancy × turnover` guests, × spend × open days per month, × season months per year |
//! | 4    | Events: price per occurrence × occurrences, per season and section |
//! | 5    | Totals: cost, revenue, profit (monthly = annual / 12) |
//!
//! Every step reads the whole model; there is no incremental update.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use breakeven_core::BusinessModel;
//! use breakeven_core::calculations::{BreakEvenCalculator, SeasonCalendar};
//!
//! let model = BusinessModel::default();
//! let figures = BreakEvenCalculator::new(SeasonCalendar::default()).calculate(&model);
//!
//! assert_eq!(figures.daily_high.guests, dec!(87.5));
//! assert_eq!(figures.daily_high.annual, dec!(122500));
//! assert_eq!(figures.totals.profit.annual, dec!(6470));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::coercion::pct;
use crate::models::{
    BusinessModel, DailyRevenue, FixedEvent, Keyed, MonthlyCost, PersonnelCost, Season,
    TicketedEvent,
};

use super::calendar::SeasonCalendar;
use super::common::{per_month, per_year, product, total};
use super::figures::{
    AggregateFigures, DailyFigures, EventLineFigures, EventSectionFigures, MonthlyAnnual,
    PersonnelFigures, SeasonSplit, Totals,
};

/// Event lines priced per occurrence and counted per season.
trait SeasonalEvent: Keyed {
    /// Revenue of one occurrence.
    fn price(&self) -> Decimal;

    fn occurrences(
        &self,
        season: Season,
    ) -> Decimal;
}

impl SeasonalEvent for TicketedEvent {
    fn price(&self) -> Decimal {
        let per_guest = self.entry_fee.saturating_add(self.avg_revenue);
        product(&[per_guest, self.guests])
    }

    fn occurrences(
        &self,
        season: Season,
    ) -> Decimal {
        match season {
            Season::High => self.high,
            Season::Winter => self.winter,
        }
    }
}

impl SeasonalEvent for FixedEvent {
    fn price(&self) -> Decimal {
        self.price
    }

    fn occurrences(
        &self,
        season: Season,
    ) -> Decimal {
        match season {
            Season::High => self.high,
            Season::Winter => self.winter,
        }
    }
}

/// Calculator for the break-even figures.
///
/// Holds only the season calendar; the model is passed to every call, so one
/// calculator can serve any number of models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakEvenCalculator {
    calendar: SeasonCalendar,
}

impl BreakEvenCalculator {
    pub fn new(calendar: SeasonCalendar) -> Self {
        Self { calendar }
    }

    /// Calculates every aggregate figure from `model`.
    ///
    /// Never fails; calling it twice on the same model yields identical
    /// figures.
    pub fn calculate(
        &self,
        model: &BusinessModel,
    ) -> AggregateFigures {
        let personnel = self.personnel(&model.costs.personnel);
        let goods = self.monthly_costs(&model.costs.goods);
        let operating = self.monthly_costs(&model.costs.operating);

        let daily_high = self.daily(Season::High, model.revenue.daily.season(Season::High));
        let daily_winter = self.daily(
            Season::Winter,
            model.revenue.daily.season(Season::Winter),
        );

        let ticketed = self.events(&model.revenue.ticketed);
        let fixed = self.events(&model.revenue.fixed);
        let event_revenue_annual = ticketed.annual.sum().saturating_add(fixed.annual.sum());

        let cost_annual = total([personnel.annual_total(), goods.annual, operating.annual]);
        let revenue_annual = total([daily_high.annual, daily_winter.annual, event_revenue_annual]);
        let totals = self.totals(cost_annual, revenue_annual);

        debug!(
            cost_annual = %totals.cost.annual,
            revenue_annual = %totals.revenue.annual,
            profit_annual = %totals.profit.annual,
            "recalculated break-even figures"
        );

        AggregateFigures {
            personnel,
            goods,
            operating,
            daily_high,
            daily_winter,
            ticketed,
            fixed,
            event_revenue_annual,
            totals,
        }
    }

    /// Step 1: staffing cost per season, spread over twelve months.
    fn personnel(
        &self,
        roles: &[PersonnelCost],
    ) -> PersonnelFigures {
        let high = self.calendar.factor(Season::High);
        let winter = self.calendar.factor(Season::Winter);
        let annual = SeasonSplit {
            high: total(roles.iter().map(|r| product(&[r.salary, r.high, high]))),
            winter: total(roles.iter().map(|r| product(&[r.salary, r.winter, winter]))),
        };
        PersonnelFigures {
            annual,
            monthly: annual.per_month(),
        }
    }

    /// Step 2: flat monthly costs.
    fn monthly_costs(
        &self,
        lines: &[MonthlyCost],
    ) -> MonthlyAnnual {
        let monthly = total(lines.iter().map(|line| line.monthly));
        MonthlyAnnual {
            monthly,
            annual: per_year(monthly),
        }
    }

    /// Step 3: walk-in revenue for one season.
    fn daily(
        &self,
        season: Season,
        entry: &DailyRevenue,
    ) -> DailyFigures {
        let guests = product(&[
            entry.seating_capacity,
            pct(entry.occupancy),
            entry.table_turnover,
        ]);
        let monthly = product(&[guests, entry.spend, entry.open_days]);
        DailyFigures {
            guests,
            monthly,
            annual: product(&[monthly, self.calendar.factor(season)]),
        }
    }

    /// Step 4: per-line and per-section event revenue.
    fn events<E: SeasonalEvent>(
        &self,
        events: &[E],
    ) -> EventSectionFigures {
        let lines: Vec<EventLineFigures> = events
            .iter()
            .map(|event| {
                let price = event.price();
                EventLineFigures {
                    key: event.key().to_string(),
                    price,
                    seasons: SeasonSplit {
                        high: product(&[price, event.occurrences(Season::High)]),
                        winter: product(&[price, event.occurrences(Season::Winter)]),
                    },
                }
            })
            .collect();
        let annual = SeasonSplit {
            high: total(lines.iter().map(|line| line.seasons.high)),
            winter: total(lines.iter().map(|line| line.seasons.winter)),
        };
        EventSectionFigures {
            lines,
            annual,
            monthly: annual.per_month(),
        }
    }

    /// Step 5: grand totals and profit.
    fn totals(
        &self,
        cost_annual: Decimal,
        revenue_annual: Decimal,
    ) -> Totals {
        let cost_monthly = per_month(cost_annual);
        let revenue_monthly = per_month(revenue_annual);
        Totals {
            cost: MonthlyAnnual {
                monthly: cost_monthly,
                annual: cost_annual,
            },
            revenue: MonthlyAnnual {
                monthly: revenue_monthly,
                annual: revenue_annual,
            },
            profit: MonthlyAnnual {
                monthly: revenue_monthly.saturating_sub(cost_monthly),
                annual: revenue_annual.saturating_sub(cost_annual),
            },
        }
    }
}

/// Calculates the figures with the default season calendar.
pub fn calculate_all(model: &BusinessModel) -> AggregateFigures {
    BreakEvenCalculator::default().calculate(model)
}
