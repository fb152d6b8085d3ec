use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::field::{FieldSpec, FieldValue, Fields, Keyed};

/// Walk-in business for one season.
///
/// `occupancy` may be given either as a fraction (`0.7`) or as a
/// percentage (`70`); the engine normalises it with [`crate::coercion::pct`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub seating_capacity: Decimal,
    pub table_turnover: Decimal,
    pub occupancy: Decimal,
    pub spend: Decimal,
    pub open_days: Decimal,
}

impl Fields for DailyRevenue {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("seatingCapacity"),
        FieldSpec::number("tableTurnover"),
        FieldSpec::number("occupancy"),
        FieldSpec::number("spend"),
        FieldSpec::number("openDays"),
    ];

    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        match name {
            "seatingCapacity" => Some(self.seating_capacity.into()),
            "tableTurnover" => Some(self.table_turnover.into()),
            "occupancy" => Some(self.occupancy.into()),
            "spend" => Some(self.spend.into()),
            "openDays" => Some(self.open_days.into()),
            _ => None,
        }
    }

    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> bool {
        match name {
            "seatingCapacity" => self.seating_capacity = value.to_number(),
            "tableTurnover" => self.table_turnover = value.to_number(),
            "occupancy" => self.occupancy = value.to_number(),
            "spend" => self.spend = value.to_number(),
            "openDays" => self.open_days = value.to_number(),
            _ => return false,
        }
        true
    }
}

/// An event charged per guest: entry fee plus average on-site spend.
///
/// `high` and `winter` count how often the event runs in each season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketedEvent {
    pub key: String,
    pub label: String,
    pub entry_fee: Decimal,
    pub avg_revenue: Decimal,
    pub guests: Decimal,
    pub high: Decimal,
    pub winter: Decimal,
}

impl TicketedEvent {
    pub fn new(
        key: &str,
        label: &str,
        entry_fee: Decimal,
        avg_revenue: Decimal,
        guests: Decimal,
        (high, winter): (Decimal, Decimal),
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            entry_fee,
            avg_revenue,
            guests,
            high,
            winter,
        }
    }
}

impl Keyed for TicketedEvent {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Fields for TicketedEvent {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("label"),
        FieldSpec::number("entryFee"),
        FieldSpec::number("avgRevenue"),
        FieldSpec::number("guests"),
        FieldSpec::number("high"),
        FieldSpec::number("winter"),
    ];

    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        match name {
            "label" => Some(FieldValue::Text(self.label.clone())),
            "entryFee" => Some(self.entry_fee.into()),
            "avgRevenue" => Some(self.avg_revenue.into()),
            "guests" => Some(self.guests.into()),
            "high" => Some(self.high.into()),
            "winter" => Some(self.winter.into()),
            _ => None,
        }
    }

    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> bool {
        match name {
            "label" => self.label = value.to_string(),
            "entryFee" => self.entry_fee = value.to_number(),
            "avgRevenue" => self.avg_revenue = value.to_number(),
            "guests" => self.guests = value.to_number(),
            "high" => self.high = value.to_number(),
            "winter" => self.winter = value.to_number(),
            _ => return false,
        }
        true
    }
}

/// An event booked at a flat price per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub key: String,
    pub label: String,
    pub price: Decimal,
    pub high: Decimal,
    pub winter: Decimal,
}

impl FixedEvent {
    pub fn new(
        key: &str,
        label: &str,
        price: Decimal,
        (high, winter): (Decimal, Decimal),
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            price,
            high,
            winter,
        }
    }
}

impl Keyed for FixedEvent {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Fields for FixedEvent {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("label"),
        FieldSpec::number("price"),
        FieldSpec::number("high"),
        FieldSpec::number("winter"),
    ];

    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        match name {
            "label" => Some(FieldValue::Text(self.label.clone())),
            "price" => Some(self.price.into()),
            "high" => Some(self.high.into()),
            "winter" => Some(self.winter.into()),
            _ => None,
        }
    }

    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> bool {
        match name {
            "label" => self.label = value.to_string(),
            "price" => self.price = value.to_number(),
            "high" => self.high = value.to_number(),
            "winter" => self.winter = value.to_number(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn daily() -> DailyRevenue {
        DailyRevenue {
            seating_capacity: dec!(50),
            table_turnover: dec!(2.5),
            occupancy: dec!(70),
            spend: dec!(10),
            open_days: dec!(20),
        }
    }

    #[test]
    fn daily_fields_use_external_names() {
        let season = daily();

        assert_eq!(
            season.field("seatingCapacity"),
            Some(FieldValue::Number(dec!(50)))
        );
        assert_eq!(season.field("openDays"), Some(FieldValue::Number(dec!(20))));
        assert_eq!(season.field("seating_capacity"), None);
    }

    #[test]
    fn daily_has_no_text_fields() {
        assert!(
            DailyRevenue::FIELDS
                .iter()
                .all(|spec| spec.kind == super::super::field::FieldKind::Number)
        );
    }

    #[test]
    fn ticketed_set_field_updates_guests() {
        let mut event = TicketedEvent::new(
            "trivia-nights",
            "Trivia Nights",
            dec!(10),
            dec!(10),
            dec!(20),
            (dec!(7), dec!(5)),
        );

        assert!(event.set_field("guests", FieldValue::from("25")));

        assert_eq!(event.guests, dec!(25));
    }

    #[test]
    fn ticketed_set_field_takes_label_and_rejects_unknown_names() {
        let mut event = TicketedEvent::new(
            "trivia-nights",
            "Trivia Nights",
            dec!(10),
            dec!(10),
            dec!(20),
            (dec!(7), dec!(5)),
        );
        let before = event.clone();

        assert!(!event.set_field("price", FieldValue::from("99")));
        assert_eq!(event, before);
        assert!(event.set_field("label", FieldValue::from("Quiz Nights")));
        assert_eq!(event.label, "Quiz Nights");
    }

    #[test]
    fn daily_set_field_rejects_unknown_names() {
        let mut season = daily();

        assert!(season.set_field("openDays", FieldValue::from("22")));
        assert!(!season.set_field("label", FieldValue::from("Summer")));
        assert_eq!(season.open_days, dec!(22));
    }

    #[test]
    fn fixed_label_accepts_text() {
        let mut event = FixedEvent::new("weddings", "Weddings", dec!(3000), (dec!(1), dec!(0)));

        assert!(event.set_field("label", FieldValue::from("Small Weddings")));

        assert_eq!(event.label, "Small Weddings");
    }
}
