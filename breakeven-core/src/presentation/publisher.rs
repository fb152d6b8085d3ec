use rust_decimal::Decimal;

use crate::calculations::{AggregateFigures, EventSectionFigures};
use crate::coercion::format_guests;
use crate::format::{CurrencyFormatter, Locale};
use crate::models::{BusinessModel, Season};

use super::targets::{self, Period};
use super::{PresentationSink, StyleState};

/// Formats figures and writes them to a [`PresentationSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Publisher {
    currency: CurrencyFormatter,
}

impl Publisher {
    pub fn new(locale: Locale) -> Self {
        Self {
            currency: CurrencyFormatter::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.currency.locale()
    }

    fn money<S: PresentationSink + ?Sized>(
        &self,
        sink: &mut S,
        target: &str,
        amount: Decimal,
    ) {
        sink.set_text(target, &self.currency.format(amount));
    }

    /// Publishes every aggregate figure and the style of the summary slots.
    pub fn publish<S: PresentationSink + ?Sized>(
        &self,
        figures: &AggregateFigures,
        sink: &mut S,
    ) {
        for period in Period::ALL {
            for season in Season::ALL {
                let split = match period {
                    Period::Monthly => figures.personnel.monthly,
                    Period::Annual => figures.personnel.annual,
                };
                self.money(sink, &targets::staff(season, period), split.get(season));
            }
        }

        self.money(sink, targets::GOODS_MONTHLY, figures.goods.monthly);
        self.money(sink, targets::GOODS_ANNUAL, figures.goods.annual);
        self.money(sink, targets::OPERATING_MONTHLY, figures.operating.monthly);
        self.money(sink, targets::OPERATING_ANNUAL, figures.operating.annual);

        for season in Season::ALL {
            let guests = format_guests(figures.daily(season).guests, self.locale());
            sink.set_text(&targets::guests(season), &guests);
        }
        for period in Period::ALL {
            for season in Season::ALL {
                let daily = figures.daily(season);
                let amount = match period {
                    Period::Monthly => daily.monthly,
                    Period::Annual => daily.annual,
                };
                self.money(sink, &targets::daily(season, period), amount);
            }
        }

        self.publish_events(sink, "ticketed", &figures.ticketed);
        self.publish_events(sink, "fixed", &figures.fixed);

        let totals = &figures.totals;
        self.money(sink, targets::SUM_COSTS_MONTHLY, totals.cost.monthly);
        self.money(sink, targets::SUM_COSTS_ANNUAL, totals.cost.annual);
        self.money(sink, targets::SUM_REVENUE_MONTHLY, totals.revenue.monthly);
        self.money(sink, targets::SUM_REVENUE_ANNUAL, totals.revenue.annual);
        self.money(sink, targets::SUM_PROFIT_MONTHLY, totals.profit.monthly);
        self.money(sink, targets::SUM_PROFIT_ANNUAL, totals.profit.annual);

        sink.set_style(targets::SUM_COSTS_MONTHLY, StyleState::Alert);
        sink.set_style(targets::SUM_COSTS_ANNUAL, StyleState::Alert);
        sink.set_style(
            targets::SUM_PROFIT_MONTHLY,
            StyleState::alert_if(totals.is_monthly_loss()),
        );
        sink.set_style(
            targets::SUM_PROFIT_ANNUAL,
            StyleState::alert_if(totals.is_annual_loss()),
        );
    }

    fn publish_events<S: PresentationSink + ?Sized>(
        &self,
        sink: &mut S,
        section: &str,
        events: &EventSectionFigures,
    ) {
        for line in &events.lines {
            for season in Season::ALL {
                let target = targets::event_line(&line.key, season);
                self.money(sink, &target, line.seasons.get(season));
            }
        }
        for period in Period::ALL {
            for season in Season::ALL {
                let split = match period {
                    Period::Monthly => events.monthly,
                    Period::Annual => events.annual,
                };
                let target = targets::event_section(section, season, period);
                self.money(sink, &target, split.get(season));
            }
        }
    }

    /// Shows every field of `model` in the editable tables, labels included.
    pub fn render_inputs<S: PresentationSink + ?Sized>(
        &self,
        model: &BusinessModel,
        sink: &mut S,
    ) {
        for (path, value) in model.flatten() {
            sink.set_input(&path, &value.to_string());
        }
    }
}
