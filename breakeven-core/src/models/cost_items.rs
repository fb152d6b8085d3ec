use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::field::{FieldSpec, FieldValue, Fields, Keyed};

/// One staffing role.
///
/// `salary` is the monthly wage of a single unit of the role; `high` and
/// `winter` are the number of units staffed in each season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelCost {
    pub key: String,
    pub label: String,
    pub salary: Decimal,
    pub high: Decimal,
    pub winter: Decimal,
}

impl PersonnelCost {
    pub fn new(
        key: &str,
        label: &str,
        salary: Decimal,
        high: Decimal,
        winter: Decimal,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            salary,
            high,
            winter,
        }
    }
}

impl Keyed for PersonnelCost {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Fields for PersonnelCost {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("label"),
        FieldSpec::number("salary"),
        FieldSpec::number("high"),
        FieldSpec::number("winter"),
    ];

    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        match name {
            "label" => Some(FieldValue::Text(self.label.clone())),
            "salary" => Some(self.salary.into()),
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
            "salary" => self.salary = value.to_number(),
            "high" => self.high = value.to_number(),
            "winter" => self.winter = value.to_number(),
            _ => return false,
        }
        true
    }
}

/// A goods or operating cost line with a flat monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCost {
    pub key: String,
    pub label: String,
    pub monthly: Decimal,
}

impl MonthlyCost {
    pub fn new(
        key: &str,
        label: &str,
        monthly: Decimal,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            monthly,
        }
    }
}

impl Keyed for MonthlyCost {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Fields for MonthlyCost {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::text("label"), FieldSpec::number("monthly")];

    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        match name {
            "label" => Some(FieldValue::Text(self.label.clone())),
            "monthly" => Some(self.monthly.into()),
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
            "monthly" => self.monthly = value.to_number(),
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

    #[test]
    fn personnel_leaves_follow_declaration_order() {
        let role = PersonnelCost::new("barista", "Barista", dec!(3000), dec!(1), dec!(0));

        let names: Vec<_> = role.leaves().into_iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["label", "salary", "high", "winter"]);
    }

    #[test]
    fn personnel_set_field_coerces_text() {
        let mut role = PersonnelCost::new("barista", "Barista", dec!(3000), dec!(1), dec!(0));

        assert!(role.set_field("salary", FieldValue::from("3500,50")));

        assert_eq!(role.salary, dec!(3500.50));
    }

    #[test]
    fn set_field_rejects_unknown_name() {
        let mut cost = MonthlyCost::new("rent", "Rent", dec!(1750));

        assert!(!cost.set_field("yearly", FieldValue::Number(dec!(1))));
        assert_eq!(cost.monthly, dec!(1750));
    }

    #[test]
    fn field_kind_reports_text_for_label() {
        assert_eq!(
            MonthlyCost::field_kind("label"),
            Some(super::super::field::FieldKind::Text)
        );
        assert_eq!(MonthlyCost::field_kind("nope"), None);
    }
}
