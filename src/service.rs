use chrono::{Datelike, Local, NaiveDate};

use crate::{ConfigError, DatePattern, Locale, pattern::window_ending_at};

/// Date parsing and formatting used by the validator.
///
/// The validator never interprets patterns or locales itself; it hands the
/// configured pair to this service.
pub trait DateFormatService {
    /// Checks that `pattern` and `locale` are usable.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPattern` or `ConfigError::UnsupportedLocale`.
    fn check(&self, pattern: &str, locale: &str) -> Result<(), ConfigError>;

    /// Parses `input`, returning `None` when it does not denote a date
    fn parse(&self, pattern: &str, locale: &str, input: &str) -> Option<NaiveDate>;

    /// Renders `date`, returning `None` when it cannot be represented
    fn format(&self, pattern: &str, locale: &str, date: NaiveDate) -> Option<String>;

    /// Parses `input` knowing no valid date lies after `latest`.
    /// Services with two-digit years should resolve them into the century ending at `latest`.
    fn parse_until(&self, pattern: &str, locale: &str, input: &str, latest: NaiveDate) -> Option<NaiveDate> {
        let _ = latest;
        self.parse(pattern, locale, input)
    }

    /// Parses `input` as [`parse_until`](Self::parse_until) does and renders the
    /// result again, for round-trip comparison.
    fn parse_and_render(
        &self,
        pattern: &str,
        locale: &str,
        input: &str,
        latest: NaiveDate,
    ) -> Option<(NaiveDate, Option<String>)> {
        let date = self.parse_until(pattern, locale, input, latest)?;
        Some((date, self.format(pattern, locale, date)))
    }
}

/// The built-in [`DateFormatService`] backed by [`DatePattern`] and [`Locale`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternService;

impl PatternService {
    fn compile(pattern: &str, locale: &str) -> Result<(DatePattern, Locale), ConfigError> {
        Ok((pattern.parse()?, locale.parse()?))
    }
}

impl DateFormatService for PatternService {
    fn check(&self, pattern: &str, locale: &str) -> Result<(), ConfigError> {
        Self::compile(pattern, locale).map(|_| ())
    }

    fn parse(&self, pattern: &str, locale: &str, input: &str) -> Option<NaiveDate> {
        let (pattern, locale) = Self::compile(pattern, locale).ok()?;
        pattern.parse(input, &locale)
    }

    fn format(&self, pattern: &str, locale: &str, date: NaiveDate) -> Option<String> {
        let (pattern, locale) = Self::compile(pattern, locale).ok()?;
        pattern.format(date, &locale)
    }

    fn parse_until(&self, pattern: &str, locale: &str, input: &str, latest: NaiveDate) -> Option<NaiveDate> {
        let (pattern, locale) = Self::compile(pattern, locale).ok()?;
        pattern.parse_in_window(input, &locale, window_ending_at(latest.year()))
    }

    // One compilation serves both directions
    fn parse_and_render(
        &self,
        pattern: &str,
        locale: &str,
        input: &str,
        latest: NaiveDate,
    ) -> Option<(NaiveDate, Option<String>)> {
        let (pattern, locale) = Self::compile(pattern, locale).ok()?;
        let date = pattern.parse_in_window(input, &locale, window_ending_at(latest.year()))?;
        Some((date, pattern.format(date, &locale)))
    }
}

/// Source of the current calendar day
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_check_accepts_valid_configuration() {
        assert_eq!(PatternService.check("dd.MM.yyyy", "en_US_POSIX"), Ok(()));
        assert_eq!(PatternService.check("d MMMM yyyy", "ru_RU"), Ok(()));
    }

    #[test]
    fn test_check_reports_pattern_before_locale() {
        let result = PatternService.check("dd.MM", "xx");
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));

        let result = PatternService.check("dd.MM.yyyy", "xx");
        assert_eq!(result, Err(ConfigError::UnsupportedLocale("xx".to_owned())));
    }

    #[test]
    fn test_parse_and_format() {
        let parsed = PatternService.parse("dd.MM.yyyy", "en", "15.08.1991");
        assert_eq!(parsed, Some(date(1991, 8, 15)));

        let rendered = PatternService.format("d MMM yyyy", "en", date(1991, 8, 15));
        assert_eq!(rendered.as_deref(), Some("15 Aug 1991"));
    }

    #[test]
    fn test_unusable_configuration_yields_none() {
        assert_eq!(PatternService.parse("dd.MM", "en", "15.08"), None);
        assert_eq!(PatternService.format("dd.MM.yyyy", "xx", date(1991, 8, 15)), None);
    }

    #[test]
    fn test_parse_until_resolves_two_digit_years_before_latest() {
        let parsed = PatternService.parse_until("dd.MM.yy", "en", "01.01.30", date(2024, 1, 1));
        assert_eq!(parsed, Some(date(1930, 1, 1)));

        let parsed = PatternService.parse_until("dd.MM.yy", "en", "01.01.24", date(2024, 1, 1));
        assert_eq!(parsed, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_parse_and_render() {
        let result = PatternService.parse_and_render("d.M.yyyy", "en", "01.01.2020", date(2024, 1, 1));
        assert_eq!(result, Some((date(2020, 1, 1), Some("1.1.2020".to_owned()))));

        let result = PatternService.parse_and_render("d.M.yyyy", "en", "1.13.2020", date(2024, 1, 1));
        assert_eq!(result, None);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 1, 1));
        assert_eq!(clock.today(), date(2024, 1, 1));
    }

    #[test]
    fn test_system_clock_is_plausible() {
        let today = SystemClock.today();
        assert!(today > date(2000, 1, 1));
    }
}
