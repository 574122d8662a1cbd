/// Pattern used when none is configured
pub const DEFAULT_FORMAT: &str = "dd.MM.yyyy";

/// Locale used when none is configured (fixed, English month names)
pub const DEFAULT_LOCALE: &str = "en_US_POSIX";

/// Default age span: the lower bound sits this many calendar years before today
pub const DEFAULT_MAX_AGE_YEARS: u32 = 100;

/// Months per year, for calendar-correct year subtraction
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Number of months in a year (December)
pub const MAX_MONTH: u32 = 12;

/// First year of the window two-digit years (`yy`) resolve into when no
/// upper bound is known
pub const TWO_DIGIT_YEAR_START: i32 = 1950;

/// Years covered by a two-digit year window
pub(crate) const TWO_DIGIT_YEAR_SPAN: i32 = 100;

/// Maximum digits accepted for a numeric day or month
pub(crate) const MAX_DAY_MONTH_DIGITS: usize = 2;
/// Maximum digits accepted for a full year
pub(crate) const MAX_YEAR_DIGITS: usize = 4;
/// Exact digits of a two-digit year
pub(crate) const TWO_DIGIT_YEAR_DIGITS: usize = 2;

/// Quote character that opens and closes literal text in a pattern
pub const PATTERN_QUOTE: char = '\'';

/// Placeholder replaced by the configured pattern
pub const FORMAT_PLACEHOLDER: &str = "{format}";
/// Placeholder replaced by the rejected input
pub const VALUE_PLACEHOLDER: &str = "{value}";
/// Placeholder replaced by the violated bound
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Fallback message when no specific failure is known
pub const DEFAULT_GENERAL_MESSAGE: &str = "Birth date is incorrect. Expected format '{format}'";
/// Message for inputs that do not match the pattern
pub const DEFAULT_FORMAT_MESSAGE: &str =
    "Incorrect format. Enter the date as '{format}', but got '{value}'";
/// Message for dates after the upper bound
pub const DEFAULT_MAX_DATE_MESSAGE: &str = "Birth date cannot be later than {date}";
/// Message for dates before the lower bound
pub const DEFAULT_MIN_DATE_MESSAGE: &str = "Birth date cannot be earlier than {date}";
