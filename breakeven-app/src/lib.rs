pub mod logging;
pub mod report;
pub mod session;
pub mod settings;

pub use report::{ReportError, ReportFormat, write_report};
pub use session::Session;
pub use settings::{LoggingSettings, SeasonSettings, Settings, SettingsError};
