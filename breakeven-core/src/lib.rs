pub mod calculations;
pub mod coercion;
pub mod edit;
pub mod format;
pub mod models;
pub mod presentation;

pub use calculations::{AggregateFigures, BreakEvenCalculator, SeasonCalendar, calculate_all};
pub use edit::{EditCommand, EditError, apply_edit};
pub use format::{CurrencyFormatter, Locale};
pub use models::*;
pub use presentation::{PresentationSink, Publisher, RecordingSink, StyleState};
