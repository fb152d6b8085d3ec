//! Single-field edits coming from the user.

use std::str::FromStr;

use thiserror::Error;

use crate::models::{BusinessModel, FieldPath, FieldValue, PathError, Section};

/// Errors produced while parsing or applying an edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The edit text has no `=` between path and value.
    #[error("expected '<path>=<value>', got '{0}'")]
    MissingValue(String),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// One change to one leaf field: the target path and the raw text typed by
/// the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub path: FieldPath,
    pub raw: String,
}

impl EditCommand {
    /// Builds a command from the `(section, item, field, value)` tuple an
    /// input widget reports.
    pub fn new(
        section: Section,
        item: &str,
        field: &str,
        raw: &str,
    ) -> Result<Self, EditError> {
        Ok(Self {
            path: FieldPath::new(section, item, field)?,
            raw: raw.to_string(),
        })
    }

    /// Like [`EditCommand::new`], with the section given by its bare name
    /// (`personnel`, `goods`, `operating`, `daily`, `ticketed` or `fixed`).
    pub fn from_source(
        section: &str,
        item: &str,
        field: &str,
        raw: &str,
    ) -> Result<Self, EditError> {
        let section = Section::from_name(section.trim())
            .ok_or_else(|| PathError::UnknownSection(section.to_string()))?;
        Self::new(section, item, field, raw)
    }
}

impl FromStr for EditCommand {
    type Err = EditError;

    /// Parses `costs.goods.cogs.monthly=2500`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, raw) = s
            .split_once('=')
            .ok_or_else(|| EditError::MissingValue(s.to_string()))?;
        Ok(Self {
            path: path.parse()?,
            raw: raw.to_string(),
        })
    }
}

/// Applies `edit` to `model` and returns the value now stored.
///
/// Numeric fields go through [`crate::coercion::num_value`], so garbage
/// input stores 0 rather than failing. Only an unknown path is an error, and
/// then the model is left as it was.
pub fn apply_edit(
    model: &mut BusinessModel,
    edit: &EditCommand,
) -> Result<FieldValue, EditError> {
    let value = FieldValue::Text(edit.raw.clone()).coerce(edit.path.kind());
    model.set_field(&edit.path, value.clone())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_splits_on_first_equals_sign() {
        let edit: EditCommand = "costs.goods.cogs.label=COGS = goods".parse().unwrap();

        assert_eq!(edit.path.to_string(), "costs.goods.cogs.label");
        assert_eq!(edit.raw, "COGS = goods");
    }

    #[test]
    fn parse_requires_value() {
        let result = "costs.goods.cogs.monthly".parse::<EditCommand>();

        assert_eq!(
            result,
            Err(EditError::MissingValue("costs.goods.cogs.monthly".to_string()))
        );
    }

    #[test]
    fn new_validates_field_name() {
        let result = EditCommand::new(Section::Goods, "cogs", "salary", "1");

        assert!(matches!(
            result,
            Err(EditError::Path(PathError::UnknownField { .. }))
        ));
    }

    #[test]
    fn from_source_accepts_bare_section_name() {
        let edit = EditCommand::from_source("ticketed", "trivia-nights", "guests", "30").unwrap();

        assert_eq!(edit.path.to_string(), "revenue.ticketed.trivia-nights.guests");
        assert_eq!(edit.raw, "30");
    }

    #[test]
    fn from_source_rejects_unknown_section_name() {
        let result = EditCommand::from_source("events", "trivia-nights", "guests", "30");

        assert_eq!(
            result,
            Err(EditError::Path(PathError::UnknownSection("events".to_string())))
        );
    }

    #[test]
    fn from_source_edit_reaches_the_model() {
        let mut model = BusinessModel::default();
        let edit = EditCommand::from_source("personnel", "exp-barista-40h", "high", "3").unwrap();

        apply_edit(&mut model, &edit).unwrap();

        assert_eq!(model.costs.personnel[0].high, dec!(3));
    }

    #[test]
    fn apply_edit_coerces_numeric_input() {
        let mut model = BusinessModel::default();
        let edit = EditCommand::new(Section::Personnel, "exp-barista-40h", "salary", "3200,5")
            .unwrap();

        let stored = apply_edit(&mut model, &edit).unwrap();

        assert_eq!(stored, FieldValue::Number(dec!(3200.5)));
        assert_eq!(model.costs.personnel[0].salary, dec!(3200.5));
    }

    #[test]
    fn apply_edit_stores_zero_for_garbage() {
        let mut model = BusinessModel::default();
        let edit: EditCommand = "revenue.fixed.small-weddings.price=lots".parse().unwrap();

        apply_edit(&mut model, &edit).unwrap();

        assert_eq!(model.revenue.fixed[1].price, Decimal::ZERO);
    }

    #[test]
    fn apply_edit_keeps_text_fields_verbatim() {
        let mut model = BusinessModel::default();
        let edit: EditCommand = "costs.operating.rent.label=Rent (shop)".parse().unwrap();

        apply_edit(&mut model, &edit).unwrap();

        assert_eq!(model.costs.operating[0].label, "Rent (shop)");
    }

    #[test]
    fn apply_edit_rejects_unknown_item() {
        let mut model = BusinessModel::default();
        let before = model.clone();
        let edit: EditCommand = "revenue.ticketed.karaoke.guests=40".parse().unwrap();

        let result = apply_edit(&mut model, &edit);

        assert!(matches!(
            result,
            Err(EditError::Path(PathError::UnknownItem { .. }))
        ));
        assert_eq!(model, before);
    }
}
