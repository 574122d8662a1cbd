use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    DATE_PLACEHOLDER, DEFAULT_FORMAT_MESSAGE, DEFAULT_GENERAL_MESSAGE, DEFAULT_MAX_DATE_MESSAGE,
    DEFAULT_MIN_DATE_MESSAGE, FORMAT_PLACEHOLDER, VALUE_PLACEHOLDER, ValidationError, ValidationOutcome,
};

/// Message templates for each outcome.
///
/// Templates may use `{format}` (the configured pattern), `{value}` (the
/// rejected input) and `{date}` (the violated bound). Unknown placeholders are
/// left as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    /// Used when no specific reason is known
    pub general:  String,
    pub format:   String,
    pub max_date: String,
    pub min_date: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            general:  DEFAULT_GENERAL_MESSAGE.to_owned(),
            format:   DEFAULT_FORMAT_MESSAGE.to_owned(),
            max_date: DEFAULT_MAX_DATE_MESSAGE.to_owned(),
            min_date: DEFAULT_MIN_DATE_MESSAGE.to_owned(),
        }
    }
}

impl ErrorMessages {
    /// Fills the template matching `outcome`.
    ///
    /// `format` is the configured pattern; `render_date` turns a bound into
    /// display text.
    pub fn render(
        &self,
        outcome: &ValidationOutcome,
        format: &str,
        render_date: impl Fn(NaiveDate) -> String,
    ) -> String {
        match outcome.error() {
            None => fill(&self.general, format, None, None),
            Some(ValidationError::Format { expected, value }) => {
                fill(&self.format, expected, Some(value.as_str()), None)
            },
            Some(ValidationError::MaxDate { max_date }) => {
                fill(&self.max_date, format, None, Some(render_date(*max_date).as_str()))
            },
            Some(ValidationError::MinDate { min_date }) => {
                fill(&self.min_date, format, None, Some(render_date(*min_date).as_str()))
            },
        }
    }
}

// The input is substituted last so text inside it is never treated as a placeholder
fn fill(template: &str, format: &str, value: Option<&str>, date: Option<&str>) -> String {
    let mut message = template.replace(FORMAT_PLACEHOLDER, format);
    if let Some(date) = date {
        message = message.replace(DATE_PLACEHOLDER, date);
    }
    if let Some(value) = value {
        message = message.replace(VALUE_PLACEHOLDER, value);
    }
    message
}
