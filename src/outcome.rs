use chrono::NaiveDate;

use crate::prelude::*;

/// Classification of every failure the crate reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Invalid bounds, pattern or locale, raised when a validator is built or updated
    #[display(fmt = "configuration")]
    Configuration,
    /// Input does not parse, or fails the round-trip check
    #[display(fmt = "format")]
    Format,
    /// Date is after the upper bound
    #[display(fmt = "max date")]
    MaxDate,
    /// Date is before the lower bound
    #[display(fmt = "min date")]
    MinDate,
}

/// Why an input was rejected, with the values a message needs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input does not match the configured pattern.
    #[error("Invalid date format: expected '{expected}', got '{value}'")]
    Format { expected: String, value: String },

    /// Date is later than the inclusive upper bound.
    #[error("Date is after {max_date}")]
    MaxDate { max_date: NaiveDate },

    /// Date is earlier than the inclusive lower bound.
    #[error("Date is before {min_date}")]
    MinDate { min_date: NaiveDate },
}

impl ValidationError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            Self::MaxDate { .. } => ErrorKind::MaxDate,
            Self::MinDate { .. } => ErrorKind::MinDate,
        }
    }
}

/// Result of validating one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }

    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err.kind()),
        }
    }

    /// Converts into a `Result` for use with `?`
    ///
    /// # Errors
    /// Returns the rejection reason of an invalid outcome.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(err) => Err(err),
        }
    }
}

impl From<ValidationError> for ValidationOutcome {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_valid_outcome() {
        let outcome = ValidationOutcome::Valid;
        assert!(outcome.is_valid());
        assert_eq!(outcome.error(), None);
        assert_eq!(outcome.kind(), None);
        assert_eq!(outcome.into_result(), Ok(()));
    }

    #[test]
    fn test_invalid_outcome() {
        let err = ValidationError::MaxDate {
            max_date: date(2024, 1, 1),
        };
        let outcome = ValidationOutcome::from(err.clone());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.error(), Some(&err));
        assert_eq!(outcome.kind(), Some(ErrorKind::MaxDate));
        assert_eq!(outcome.into_result(), Err(err));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::Format {
            expected: "dd.MM.yyyy".to_owned(),
            value:    "31.13.2024".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date format: expected 'dd.MM.yyyy', got '31.13.2024'"
        );

        let err = ValidationError::MinDate {
            min_date: date(1924, 1, 1),
        };
        assert_eq!(err.to_string(), "Date is before 1924-01-01");
        assert_eq!(err.kind(), ErrorKind::MinDate);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Configuration.to_string(), "configuration");
        assert_eq!(ErrorKind::MaxDate.to_string(), "max date");
    }
}
