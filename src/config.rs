use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Clock, DEFAULT_FORMAT, DEFAULT_LOCALE, DEFAULT_MAX_AGE_YEARS, ErrorKind, consts::MONTHS_PER_YEAR};

/// Error type for rejected validator configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Lower bound is after upper bound.
    #[error("Invalid date bounds: minimum ({min_date}) is after maximum ({max_date})")]
    InvalidBounds { min_date: NaiveDate, max_date: NaiveDate },

    /// Locale identifier is unparsable or has no month names.
    #[error("Unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    /// Pattern cannot be compiled.
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConfigError {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

/// Everything a [`crate::BirthDateValidator`] needs to judge an input.
///
/// Bounds are calendar days and both are inclusive. An absent `min_date`
/// means there is no lower bound at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default = "default_format")]
    format:            String,
    #[serde(default = "default_locale")]
    locale:            String,
    max_date:          NaiveDate,
    #[serde(default)]
    min_date:          Option<NaiveDate>,
    #[serde(default = "enabled")]
    strict_round_trip: bool,
    #[serde(default = "enabled")]
    allow_empty:       bool,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_owned()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

const fn enabled() -> bool {
    true
}

impl ValidatorConfig {
    /// Creates a configuration with the given upper bound, no lower bound and
    /// default pattern, locale and policies
    pub fn new(max_date: NaiveDate) -> Self {
        Self {
            format: default_format(),
            locale: default_locale(),
            max_date,
            min_date: None,
            strict_round_trip: true,
            allow_empty: true,
        }
    }

    /// Creates the default birth date range: from `DEFAULT_MAX_AGE_YEARS`
    /// calendar years ago up to today.
    ///
    /// The clock is read once; the bounds never move afterwards. Subtraction is
    /// calendar-correct, so a 29 February that does not exist a century
    /// earlier clamps to 28 February.
    pub fn from_clock(clock: &impl Clock) -> Self {
        let today = clock.today();
        let min_date = today.checked_sub_months(Months::new(DEFAULT_MAX_AGE_YEARS * MONTHS_PER_YEAR));
        Self {
            min_date,
            ..Self::new(today)
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub const fn with_max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = max_date;
        self
    }

    #[must_use]
    pub const fn with_min_date(mut self, min_date: Option<NaiveDate>) -> Self {
        self.min_date = min_date;
        self
    }

    #[must_use]
    pub const fn with_strict_round_trip(mut self, strict: bool) -> Self {
        self.strict_round_trip = strict;
        self
    }

    #[must_use]
    pub const fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub const fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub const fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Whether re-rendering a parsed date must reproduce the input verbatim
    pub const fn strict_round_trip(&self) -> bool {
        self.strict_round_trip
    }

    /// Whether an empty input counts as "not provided" rather than invalid
    pub const fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Checks that the lower bound is not after the upper bound.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBounds` if `min_date > max_date`.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        match self.min_date {
            Some(min_date) if min_date > self.max_date => Err(ConfigError::InvalidBounds {
                min_date,
                max_date: self.max_date,
            }),
            _ => Ok(()),
        }
    }
}

/// A partial change to a [`ValidatorConfig`].
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    format:            Option<String>,
    locale:            Option<String>,
    max_date:          Option<NaiveDate>,
    min_date:          Option<Option<NaiveDate>>,
    strict_round_trip: Option<bool>,
    allow_empty:       Option<bool>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub const fn max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    #[must_use]
    pub const fn min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(Some(min_date));
        self
    }

    /// Removes the lower bound
    #[must_use]
    pub const fn clear_min_date(mut self) -> Self {
        self.min_date = Some(None);
        self
    }

    #[must_use]
    pub const fn strict_round_trip(mut self, strict: bool) -> Self {
        self.strict_round_trip = Some(strict);
        self
    }

    #[must_use]
    pub const fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = Some(allow_empty);
        self
    }

    /// Returns true if the update changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `config` with this update applied. Nothing is checked here.
    pub fn apply_to(self, config: &ValidatorConfig) -> ValidatorConfig {
        ValidatorConfig {
            format:            self.format.unwrap_or_else(|| config.format.clone()),
            locale:            self.locale.unwrap_or_else(|| config.locale.clone()),
            max_date:          self.max_date.unwrap_or(config.max_date),
            min_date:          self.min_date.unwrap_or(config.min_date),
            strict_round_trip: self.strict_round_trip.unwrap_or(config.strict_round_trip),
            allow_empty:       self.allow_empty.unwrap_or(config.allow_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, test_utils::date};

    #[test]
    fn test_new_defaults() {
        let config = ValidatorConfig::new(date(2024, 1, 1));
        assert_eq!(config.format(), "dd.MM.yyyy");
        assert_eq!(config.locale(), "en_US_POSIX");
        assert_eq!(config.max_date(), date(2024, 1, 1));
        assert_eq!(config.min_date(), None);
        assert!(config.strict_round_trip());
        assert!(config.allow_empty());
    }

    #[test]
    fn test_from_clock_spans_one_hundred_years() {
        let config = ValidatorConfig::from_clock(&FixedClock(date(2024, 6, 15)));
        assert_eq!(config.max_date(), date(2024, 6, 15));
        assert_eq!(config.min_date(), Some(date(1924, 6, 15)));
    }

    #[test]
    fn test_from_clock_clamps_leap_day() {
        // 1900 is not a leap year
        let config = ValidatorConfig::from_clock(&FixedClock(date(2000, 2, 29)));
        assert_eq!(config.min_date(), Some(date(1900, 2, 28)));

        let config = ValidatorConfig::from_clock(&FixedClock(date(2020, 2, 29)));
        assert_eq!(config.min_date(), Some(date(1920, 2, 29)));
    }

    #[test]
    fn test_check_bounds_cases() {
        struct TestCase {
            min_date:       Option<NaiveDate>,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min_date:       None,
                should_succeed: true,
                description:    "no lower bound",
            },
            TestCase {
                min_date:       Some(date(1924, 1, 1)),
                should_succeed: true,
                description:    "min before max",
            },
            TestCase {
                min_date:       Some(date(2024, 1, 1)),
                should_succeed: true,
                description:    "min equal to max",
            },
            TestCase {
                min_date:       Some(date(2024, 1, 2)),
                should_succeed: false,
                description:    "min after max",
            },
        ];

        for case in &cases {
            let config = ValidatorConfig::new(date(2024, 1, 1)).with_min_date(case.min_date);
            assert_eq!(
                config.check_bounds().is_ok(),
                case.should_succeed,
                "Unexpected result for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_invalid_bounds_message() {
        let config = ValidatorConfig::new(date(2000, 1, 1)).with_min_date(Some(date(2010, 1, 1)));
        let err = config.check_bounds().expect_err("inverted bounds should be rejected");
        assert_eq!(
            err.to_string(),
            "Invalid date bounds: minimum (2010-01-01) is after maximum (2000-01-01)"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_update_only_touches_supplied_fields() {
        let config = ValidatorConfig::new(date(2024, 1, 1))
            .with_min_date(Some(date(1924, 1, 1)))
            .with_locale("de_DE");

        let updated = ConfigUpdate::new()
            .format("d.M.yyyy")
            .strict_round_trip(false)
            .apply_to(&config);

        assert_eq!(updated.format(), "d.M.yyyy");
        assert!(!updated.strict_round_trip());
        assert_eq!(updated.locale(), "de_DE");
        assert_eq!(updated.max_date(), date(2024, 1, 1));
        assert_eq!(updated.min_date(), Some(date(1924, 1, 1)));
        assert!(updated.allow_empty());
    }

    #[test]
    fn test_update_can_set_and_clear_min_date() {
        let config = ValidatorConfig::new(date(2024, 1, 1));

        let updated = ConfigUpdate::new().min_date(date(1950, 1, 1)).apply_to(&config);
        assert_eq!(updated.min_date(), Some(date(1950, 1, 1)));

        let cleared = ConfigUpdate::new().clear_min_date().apply_to(&updated);
        assert_eq!(cleared.min_date(), None);
    }

    #[test]
    fn test_empty_update() {
        let config = ValidatorConfig::new(date(2024, 1, 1));
        let update = ConfigUpdate::new();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(&config), config);
        assert!(!ConfigUpdate::new().allow_empty(false).is_empty());
    }

    #[test]
    fn test_serde_defaults() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"max_date":"2024-01-01"}"#).expect("minimal config should deserialize");
        assert_eq!(config, ValidatorConfig::new(date(2024, 1, 1)));
    }

    #[test]
    fn test_serde_full() {
        let config = ValidatorConfig::new(date(2024, 1, 1))
            .with_format("d MMMM yyyy")
            .with_locale("fr_FR")
            .with_min_date(Some(date(1924, 1, 1)))
            .with_allow_empty(false);

        let json = serde_json::to_string(&config).expect("failed to serialize config");
        assert!(json.contains(r#""min_date":"1924-01-01""#));

        let parsed: ValidatorConfig = serde_json::from_str(&json).expect("failed to deserialize config");
        assert_eq!(parsed, config);
    }
}
