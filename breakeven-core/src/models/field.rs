use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coercion::num_value;

/// Storage type of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Number,
    Text,
}

/// A leaf value as it travels through flattening, import and edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Decimal),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Number(_) => FieldKind::Number,
            Self::Text(_) => FieldKind::Text,
        }
    }

    /// Numeric view of the value. Text goes through [`num_value`], so the
    /// result is always usable.
    pub fn to_number(&self) -> Decimal {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => num_value(s),
        }
    }

    /// Converts the value into the representation required by `kind`.
    pub fn coerce(
        self,
        kind: FieldKind,
    ) -> FieldValue {
        match (kind, self) {
            (FieldKind::Number, value) => Self::Number(value.to_number()),
            (FieldKind::Text, Self::Text(s)) => Self::Text(s),
            (FieldKind::Text, Self::Number(n)) => Self::Text(n.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Name and storage type of one field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }
}

/// Field-level access to a line item by its external (camelCase) field name.
///
/// `FIELDS` lists the fields in flatten order.
pub trait Fields {
    const FIELDS: &'static [FieldSpec];

    /// Returns the current value of `name`, or `None` for an unknown field.
    fn field(
        &self,
        name: &str,
    ) -> Option<FieldValue>;

    /// Writes `value` into `name`, coercing it to the field's kind.
    /// Returns `false` for an unknown field.
    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> bool;

    fn field_kind(name: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }

    /// All fields in declaration order.
    fn leaves(&self) -> Vec<(&'static str, FieldValue)> {
        Self::FIELDS
            .iter()
            .filter_map(|spec| self.field(spec.name).map(|value| (spec.name, value)))
            .collect()
    }
}

/// Line items that live in a keyed section.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Looks up a keyed line item.
pub fn find_item<'a, T: Keyed>(
    items: &'a [T],
    key: &str,
) -> Option<&'a T> {
    items.iter().find(|item| item.key() == key)
}

/// Mutable variant of [`find_item`].
pub fn find_item_mut<'a, T: Keyed>(
    items: &'a mut [T],
    key: &str,
) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.key() == key)
}
