use std::collections::BTreeMap;

use super::business_model::BusinessModel;
use super::field::{FieldKind, FieldValue};
use super::path::FieldPath;

/// Map of every known leaf path to its storage type.
///
/// Derived once from a model's shape (normally the built-in default) and
/// consulted by importers instead of inspecting live values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    kinds: BTreeMap<String, FieldKind>,
}

impl Schema {
    /// Schema of the built-in default model.
    pub fn default_shape() -> Self {
        Self::from_model(&BusinessModel::default())
    }

    pub fn from_model(model: &BusinessModel) -> Self {
        let kinds = model
            .flatten()
            .into_iter()
            .map(|(key, value)| (key, value.kind()))
            .collect();
        Self { kinds }
    }

    pub fn kind_of(
        &self,
        key: &str,
    ) -> Option<FieldKind> {
        self.kinds.get(key).copied()
    }

    /// Resolves `key` to a path and converts the raw text by the field's kind.
    ///
    /// Returns `None` for keys outside the schema.
    pub fn resolve(
        &self,
        key: &str,
        raw: &str,
    ) -> Option<(FieldPath, FieldValue)> {
        let kind = self.kind_of(key)?;
        let path = key.parse::<FieldPath>().ok()?;
        Some((path, FieldValue::from(raw).coerce(kind)))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
