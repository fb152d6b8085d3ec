mod business_model;
mod cost_items;
mod defaults;
mod field;
mod path;
mod revenue_items;
mod schema;

pub use business_model::{BusinessModel, Costs, DailyRevenueBook, Revenue};
pub use cost_items::{MonthlyCost, PersonnelCost};
pub use field::{FieldKind, FieldSpec, FieldValue, Fields, Keyed, find_item, find_item_mut};
pub use path::{FieldPath, PathError, Season, Section, is_label_key};
pub use revenue_items::{DailyRevenue, FixedEvent, TicketedEvent};
pub use schema::Schema;
