use serde::{Deserialize, Serialize};

use super::cost_items::{MonthlyCost, PersonnelCost};
use super::field::{FieldValue, Fields, Keyed, find_item, find_item_mut};
use super::path::{FieldPath, PathError, Season, Section};
use super::revenue_items::{DailyRevenue, FixedEvent, TicketedEvent};

/// The whole break-even model: one snapshot of costs and revenue.
///
/// Created from the built-in defaults ([`BusinessModel::default`]), then
/// mutated leaf by leaf through [`BusinessModel::set_field`]. Item keys are
/// stable: nothing in the crate adds, removes or renames line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessModel {
    pub costs: Costs,
    pub revenue: Revenue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costs {
    pub personnel: Vec<PersonnelCost>,
    pub goods: Vec<MonthlyCost>,
    pub operating: Vec<MonthlyCost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub daily: DailyRevenueBook,
    pub ticketed: Vec<TicketedEvent>,
    pub fixed: Vec<FixedEvent>,
}

/// Exactly one daily-business entry per season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenueBook {
    pub high_season: DailyRevenue,
    pub winter_season: DailyRevenue,
}

impl DailyRevenueBook {
    pub fn season(
        &self,
        season: Season,
    ) -> &DailyRevenue {
        match season {
            Season::High => &self.high_season,
            Season::Winter => &self.winter_season,
        }
    }

    pub fn season_mut(
        &mut self,
        season: Season,
    ) -> &mut DailyRevenue {
        match season {
            Season::High => &mut self.high_season,
            Season::Winter => &mut self.winter_season,
        }
    }
}

fn leaves_of<T: Fields>(
    prefix: &str,
    key: &str,
    item: &T,
    out: &mut Vec<(String, FieldValue)>,
) {
    for (name, value) in item.leaves() {
        out.push((format!("{prefix}.{key}.{name}"), value));
    }
}

fn keyed_leaves<T: Fields + Keyed>(
    section: Section,
    items: &[T],
    out: &mut Vec<(String, FieldValue)>,
) {
    let prefix = section.prefix();
    for item in items {
        leaves_of(&prefix, item.key(), item, out);
    }
}

fn unknown_item(path: &FieldPath) -> PathError {
    PathError::UnknownItem {
        section: path.section,
        item: path.item.clone(),
    }
}

fn unknown_field(path: &FieldPath) -> PathError {
    PathError::UnknownField {
        section: path.section,
        field: path.field.clone(),
    }
}

fn read<T: Fields>(
    item: Option<&T>,
    path: &FieldPath,
) -> Result<FieldValue, PathError> {
    let item = item.ok_or_else(|| unknown_item(path))?;
    item.field(&path.field).ok_or_else(|| unknown_field(path))
}

fn write<T: Fields>(
    item: Option<&mut T>,
    path: &FieldPath,
    value: FieldValue,
) -> Result<(), PathError> {
    let item = item.ok_or_else(|| unknown_item(path))?;
    if item.set_field(&path.field, value) {
        Ok(())
    } else {
        Err(unknown_field(path))
    }
}

impl BusinessModel {
    /// Reads the leaf at `path`.
    pub fn field(
        &self,
        path: &FieldPath,
    ) -> Result<FieldValue, PathError> {
        let key = path.item.as_str();
        match path.section {
            Section::Personnel => read(find_item(&self.costs.personnel, key), path),
            Section::Goods => read(find_item(&self.costs.goods, key), path),
            Section::Operating => read(find_item(&self.costs.operating, key), path),
            Section::Daily => read(
                Season::from_daily_key(key).map(|s| self.revenue.daily.season(s)),
                path,
            ),
            Section::Ticketed => read(find_item(&self.revenue.ticketed, key), path),
            Section::Fixed => read(find_item(&self.revenue.fixed, key), path),
        }
    }

    /// Writes `value` into the leaf at `path`, coerced to the field's kind.
    ///
    /// Fails without touching the model when the item or field is unknown.
    pub fn set_field(
        &mut self,
        path: &FieldPath,
        value: FieldValue,
    ) -> Result<(), PathError> {
        let key = path.item.as_str();
        match path.section {
            Section::Personnel => write(find_item_mut(&mut self.costs.personnel, key), path, value),
            Section::Goods => write(find_item_mut(&mut self.costs.goods, key), path, value),
            Section::Operating => write(find_item_mut(&mut self.costs.operating, key), path, value),
            Section::Daily => match Season::from_daily_key(key) {
                Some(season) => write(Some(self.revenue.daily.season_mut(season)), path, value),
                None => Err(unknown_item(path)),
            },
            Section::Ticketed => write(find_item_mut(&mut self.revenue.ticketed, key), path, value),
            Section::Fixed => write(find_item_mut(&mut self.revenue.fixed, key), path, value),
        }
    }

    /// Every leaf as a `(dotted path, value)` pair, in model order.
    ///
    /// Labels are included; callers that export decide whether to keep them.
    pub fn flatten(&self) -> Vec<(String, FieldValue)> {
        let mut out = Vec::new();
        keyed_leaves(Section::Personnel, &self.costs.personnel, &mut out);
        keyed_leaves(Section::Goods, &self.costs.goods, &mut out);
        keyed_leaves(Section::Operating, &self.costs.operating, &mut out);
        let daily_prefix = Section::Daily.prefix();
        for season in Season::ALL {
            leaves_of(
                &daily_prefix,
                season.daily_key(),
                self.revenue.daily.season(season),
                &mut out,
            );
        }
        keyed_leaves(Section::Ticketed, &self.revenue.ticketed, &mut out);
        keyed_leaves(Section::Fixed, &self.revenue.fixed, &mut out);
        out
    }
}
