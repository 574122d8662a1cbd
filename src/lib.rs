//! Birth date validation for form fields.
//!
//! A [`BirthDateValidator`] accepts a raw text value and decides whether it
//! is a plausible birth date: it must parse under a configurable pattern and
//! locale, optionally re-render to exactly the same text, and fall between
//! two inclusive calendar-day bounds.
//!
//! ```
//! use birth_date::{BirthDateValidator, ErrorKind, ValidatorConfig};
//! use chrono::NaiveDate;
//!
//! let max_date = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
//! let validator = BirthDateValidator::new(ValidatorConfig::new(max_date))?;
//!
//! assert!(validator.validate("01.01.2024").is_valid());
//! assert_eq!(validator.validate("02.01.2024").kind(), Some(ErrorKind::MaxDate));
//! assert_eq!(validator.validate("31.13.2024").kind(), Some(ErrorKind::Format));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod consts;
mod locale;
mod messages;
mod outcome;
mod pattern;
mod prelude;
mod service;
mod validator;

pub use config::{ConfigError, ConfigUpdate, ValidatorConfig};
pub use consts::*;
pub use locale::Locale;
pub use messages::ErrorMessages;
pub use outcome::{ErrorKind, ValidationError, ValidationOutcome};
pub use pattern::DatePattern;
pub use service::{Clock, DateFormatService, FixedClock, PatternService, SystemClock};
pub use validator::BirthDateValidator;
