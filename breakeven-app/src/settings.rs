//! TOML settings file.
//!
//! Every key is optional:
//!
//! ```toml
//! locale = "en-us"
//!
//! [seasons]
//! high_season_months = 7
//! winter_season_months = 5
//!
//! [logging]
//! level = "debug"
//! file = "breakeven.log"
//! ```

use std::path::{Path, PathBuf};

use breakeven_core::Locale;
use breakeven_core::calculations::{
    CalendarError, MONTHS_HIGH_SEASON, MONTHS_WINTER_SEASON, SeasonCalendar,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid season lengths: {0}")]
    Seasons(#[from] CalendarError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: Locale,
    pub seasons: SeasonSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonSettings {
    pub high_season_months: u32,
    pub winter_season_months: u32,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self {
            high_season_months: MONTHS_HIGH_SEASON,
            winter_season_months: MONTHS_WINTER_SEASON,
        }
    }
}

impl SeasonSettings {
    pub fn calendar(&self) -> Result<SeasonCalendar, SettingsError> {
        Ok(SeasonCalendar::new(
            self.high_season_months,
            self.winter_season_months,
        )?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `"info"` or `"breakeven_core=debug"`.
    pub level: Option<String>,
    /// Log file opened in append mode next to the stderr output.
    pub file: Option<PathBuf>,
}

impl Settings {
    /// Parses settings and checks the season lengths.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.seasons.calendar()?;
        Ok(settings)
    }

    pub async fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "loaded settings file");
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.locale, Locale::DeDe);
        assert_eq!(settings.seasons.high_season_months, 7);
        assert_eq!(settings.seasons.winter_season_months, 5);
    }

    #[test]
    fn full_file_is_read() {
        let settings = Settings::from_toml_str(
            r#"
locale = "en-us"

[seasons]
high_season_months = 6
winter_season_months = 4

[logging]
level = "debug"
file = "breakeven.log"
"#,
        )
        .unwrap();

        assert_eq!(settings.locale, Locale::EnUs);
        assert_eq!(
            settings.seasons,
            SeasonSettings {
                high_season_months: 6,
                winter_season_months: 4,
            }
        );
        assert_eq!(settings.logging.level.as_deref(), Some("debug"));
        assert_eq!(settings.logging.file, Some(PathBuf::from("breakeven.log")));
    }

    #[test]
    fn partial_season_table_keeps_other_default() {
        let settings = Settings::from_toml_str("[seasons]\nhigh_season_months = 6\n").unwrap();

        assert_eq!(settings.seasons.high_season_months, 6);
        assert_eq!(settings.seasons.winter_season_months, 5);
    }

    #[test]
    fn seasons_longer_than_a_year_are_rejected() {
        let result = Settings::from_toml_str("[seasons]\nhigh_season_months = 9\n");

        assert!(matches!(
            result,
            Err(SettingsError::Seasons(CalendarError::TooManyMonths(14)))
        ));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = Settings::from_toml_str("locale = \"fr-fr\"\n");

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::from_toml_str("currency = \"usd\"\n");

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let err = Settings::load(Path::new("does/not/exist.toml"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
