//! Dotted field paths into the business model.
//!
//! A path has exactly four segments: `<group>.<section>.<item>.<field>`,
//! e.g. `costs.personnel.exp-barista-40h.salary` or
//! `revenue.daily.high-season-daily.occupancy`. Item keys never contain
//! dots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cost_items::{MonthlyCost, PersonnelCost};
use super::field::{FieldKind, Fields};
use super::revenue_items::{DailyRevenue, FixedEvent, TicketedEvent};

/// Errors produced while resolving a dotted path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path does not have the `<group>.<section>.<item>.<field>` shape.
    #[error("malformed field path '{0}'")]
    Malformed(String),

    /// The `<group>.<section>` prefix names no section.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// The section has no line item with this key.
    #[error("section '{section}' has no item '{item}'")]
    UnknownItem { section: Section, item: String },

    /// The section's line items have no such field.
    #[error("section '{section}' has no field '{field}'")]
    UnknownField { section: Section, field: String },
}

/// The six keyed mappings of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Personnel,
    Goods,
    Operating,
    Daily,
    Ticketed,
    Fixed,
}

impl Section {
    /// Flatten order.
    pub const ALL: [Section; 6] = [
        Section::Personnel,
        Section::Goods,
        Section::Operating,
        Section::Daily,
        Section::Ticketed,
        Section::Fixed,
    ];

    pub fn group(&self) -> &'static str {
        match self {
            Self::Personnel | Self::Goods | Self::Operating => "costs",
            Self::Daily | Self::Ticketed | Self::Fixed => "revenue",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Personnel => "personnel",
            Self::Goods => "goods",
            Self::Operating => "operating",
            Self::Daily => "daily",
            Self::Ticketed => "ticketed",
            Self::Fixed => "fixed",
        }
    }

    /// Dotted prefix shared by every path in the section.
    pub fn prefix(&self) -> String {
        format!("{}.{}", self.group(), self.name())
    }

    pub fn parse(
        group: &str,
        name: &str,
    ) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.group() == group && section.name() == name)
    }

    /// Looks a section up by its bare name, e.g. `personnel` or `ticketed`.
    /// Names are unique across both groups.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.name() == name)
    }

    /// Storage type of `field` for line items of this section.
    pub fn field_kind(
        &self,
        field: &str,
    ) -> Option<FieldKind> {
        match self {
            Self::Personnel => PersonnelCost::field_kind(field),
            Self::Goods | Self::Operating => MonthlyCost::field_kind(field),
            Self::Daily => DailyRevenue::field_kind(field),
            Self::Ticketed => TicketedEvent::field_kind(field),
            Self::Fixed => FixedEvent::field_kind(field),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}.{}", self.group(), self.name())
    }
}

/// The two operating periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    High,
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::High, Season::Winter];

    /// Item key of the season's entry in `revenue.daily`.
    pub fn daily_key(&self) -> &'static str {
        match self {
            Self::High => "high-season-daily",
            Self::Winter => "winter-season-daily",
        }
    }

    pub fn from_daily_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|season| season.daily_key() == key)
    }

    /// Short tag used in display target names.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::High => "hs",
            Self::Winter => "ws",
        }
    }
}

/// A validated-shape path to one leaf field.
///
/// Parsing checks the section and that the field exists for the section;
/// whether the item key exists is only known against a concrete model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub section: Section,
    pub item: String,
    pub field: String,
}

impl FieldPath {
    /// Builds a path from the parts an edit source delivers.
    pub fn new(
        section: Section,
        item: &str,
        field: &str,
    ) -> Result<Self, PathError> {
        if item.is_empty() || item.contains('.') {
            return Err(PathError::Malformed(format!("{section}.{item}.{field}")));
        }
        if section.field_kind(field).is_none() {
            return Err(PathError::UnknownField {
                section,
                field: field.to_string(),
            });
        }
        Ok(Self {
            section,
            item: item.to_string(),
            field: field.to_string(),
        })
    }

    pub fn kind(&self) -> FieldKind {
        // `new` and `from_str` only admit fields the section knows.
        self.section.field_kind(&self.field).unwrap_or(FieldKind::Text)
    }

}

/// Name of the display-text field every line item carries.
const LABEL_FIELD: &str = "label";

/// Whether the dotted `key` ends in the label field.
pub fn is_label_key(key: &str) -> bool {
    key.rsplit('.').next() == Some(LABEL_FIELD)
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim().split('.').collect();
        let [group, name, item, field] = segments.as_slice() else {
            return Err(PathError::Malformed(s.to_string()));
        };
        if [group, name, item, field].iter().any(|seg| seg.is_empty()) {
            return Err(PathError::Malformed(s.to_string()));
        }
        let section = Section::parse(group, name)
            .ok_or_else(|| PathError::UnknownSection(format!("{group}.{name}")))?;
        Self::new(section, item, field)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}.{}.{}", self.section, self.item, self.field)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_personnel_path() {
        let path: FieldPath = "costs.personnel.exp-barista-40h.salary".parse().unwrap();

        assert_eq!(path.section, Section::Personnel);
        assert_eq!(path.item, "exp-barista-40h");
        assert_eq!(path.field, "salary");
        assert_eq!(path.kind(), FieldKind::Number);
    }

    #[test]
    fn display_round_trips_the_dotted_form() {
        let text = "revenue.daily.winter-season-daily.openDays";
        let path: FieldPath = text.parse().unwrap();

        assert_eq!(path.to_string(), text);
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        let result = "costs.personnel.salary".parse::<FieldPath>();

        assert_eq!(
            result,
            Err(PathError::Malformed("costs.personnel.salary".to_string()))
        );
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert!(matches!(
            "costs..rent.monthly".parse::<FieldPath>(),
            Err(PathError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_section_in_wrong_group() {
        let result = "revenue.goods.cogs.monthly".parse::<FieldPath>();

        assert_eq!(
            result,
            Err(PathError::UnknownSection("revenue.goods".to_string()))
        );
    }

    #[test]
    fn parse_rejects_field_unknown_to_section() {
        let result = "revenue.fixed.small-weddings.guests".parse::<FieldPath>();

        assert_eq!(
            result,
            Err(PathError::UnknownField {
                section: Section::Fixed,
                field: "guests".to_string(),
            })
        );
    }

    #[test]
    fn label_paths_are_text() {
        let path: FieldPath = "costs.goods.cogs.label".parse().unwrap();

        assert!(is_label_key(&path.to_string()));
        assert_eq!(path.kind(), FieldKind::Text);
    }

    #[test]
    fn label_key_matches_last_segment_only() {
        assert!(is_label_key("revenue.fixed.small-weddings.label"));
        assert!(!is_label_key("costs.goods.label-printing.monthly"));
        assert!(!is_label_key("revenue.daily.high-season-daily.seats"));
    }

    #[test]
    fn from_name_finds_section_without_group() {
        assert_eq!(Section::from_name("ticketed"), Some(Section::Ticketed));
        assert_eq!(Section::from_name("operating"), Some(Section::Operating));
        assert_eq!(Section::from_name("costs.goods"), None);
        assert_eq!(Section::from_name("events"), None);
    }

    #[test]
    fn season_daily_keys_round_trip() {
        for season in Season::ALL {
            assert_eq!(Season::from_daily_key(season.daily_key()), Some(season));
        }
        assert_eq!(Season::from_daily_key("spring-daily"), None);
    }
}
