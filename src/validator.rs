use chrono::NaiveDate;

use crate::{
    Clock, ConfigError, ConfigUpdate, DateFormatService, ErrorMessages, PatternService, ValidationError,
    ValidationOutcome, ValidatorConfig,
};

/// Checks that a text field holds a plausible birth date.
///
/// An input is accepted when it parses under the configured pattern and
/// locale, re-renders to exactly the same text (if `strict_round_trip` is
/// on), and falls within `min_date..=max_date`. Empty input is accepted
/// as "not provided" while `allow_empty` is on.
///
/// Configuration problems surface when the validator is built or updated;
/// [`validate`](Self::validate) itself never fails.
#[derive(Debug, Clone)]
pub struct BirthDateValidator<S = PatternService> {
    config:   ValidatorConfig,
    messages: ErrorMessages,
    service:  S,
}

impl BirthDateValidator {
    /// Creates a validator using the built-in pattern service.
    ///
    /// # Errors
    /// Returns `ConfigError` for an unusable pattern or locale, or inverted bounds.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        Self::with_service(config, PatternService)
    }

    /// Creates a validator for the default range ending today, see
    /// [`ValidatorConfig::from_clock`].
    ///
    /// # Errors
    /// Returns `ConfigError` if the default configuration is rejected.
    pub fn from_clock(clock: &impl Clock) -> Result<Self, ConfigError> {
        Self::new(ValidatorConfig::from_clock(clock))
    }
}

impl<S: DateFormatService> BirthDateValidator<S> {
    /// Creates a validator delegating parsing and formatting to `service`.
    ///
    /// # Errors
    /// Returns `ConfigError` if `service` rejects the pattern or locale, or if
    /// `min_date > max_date`.
    pub fn with_service(config: ValidatorConfig, service: S) -> Result<Self, ConfigError> {
        Self::check(&config, &service)?;
        Ok(Self {
            config,
            messages: ErrorMessages::default(),
            service,
        })
    }

    #[must_use]
    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }

    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub const fn messages(&self) -> &ErrorMessages {
        &self.messages
    }

    fn check(config: &ValidatorConfig, service: &S) -> Result<(), ConfigError> {
        let result = service
            .check(config.format(), config.locale())
            .and_then(|()| config.check_bounds());
        if let Err(ref err) = result {
            tracing::warn!(format = config.format(), locale = config.locale(), "rejected configuration: {err}");
        }
        result
    }

    /// Applies a partial configuration change.
    ///
    /// The updated configuration is checked as a whole before it replaces
    /// the current one; on error nothing changes.
    ///
    /// # Errors
    /// Returns `ConfigError` under the same conditions as construction.
    pub fn update_configuration(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        if update.is_empty() {
            return Ok(());
        }
        let config = update.apply_to(&self.config);
        Self::check(&config, &self.service)?;

        tracing::debug!(
            format = config.format(),
            locale = config.locale(),
            max_date = %config.max_date(),
            min_date = ?config.min_date(),
            strict_round_trip = config.strict_round_trip(),
            allow_empty = config.allow_empty(),
            "updated configuration"
        );
        self.config = config;
        Ok(())
    }

    /// Validates one raw field value
    pub fn validate(&self, input: &str) -> ValidationOutcome {
        let outcome = self.evaluate(input);
        match outcome {
            ValidationOutcome::Valid => tracing::trace!("accepted birth date"),
            ValidationOutcome::Invalid(ref err) => tracing::debug!(kind = %err.kind(), "rejected birth date: {err}"),
        }
        outcome
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }

    fn evaluate(&self, input: &str) -> ValidationOutcome {
        let config = &self.config;
        if input.is_empty() && config.allow_empty() {
            return ValidationOutcome::Valid;
        }

        let format_error = || {
            ValidationOutcome::Invalid(ValidationError::Format {
                expected: config.format().to_owned(),
                value:    input.to_owned(),
            })
        };

        let (format, locale, latest) = (config.format(), config.locale(), config.max_date());
        let parsed = if config.strict_round_trip() {
            self.service
                .parse_and_render(format, locale, input, latest)
                .filter(|(_, rendered)| rendered.as_deref() == Some(input))
                .map(|(date, _)| date)
        } else {
            self.service.parse_until(format, locale, input, latest)
        };
        let Some(date) = parsed else {
            return format_error();
        };

        if date > config.max_date() {
            return ValidationError::MaxDate {
                max_date: config.max_date(),
            }
            .into();
        }

        match config.min_date() {
            Some(min_date) if date < min_date => ValidationError::MinDate { min_date }.into(),
            _ => ValidationOutcome::Valid,
        }
    }

    /// Renders the display message for `outcome`.
    /// Bounds are shown in the configured pattern and locale.
    pub fn error_message(&self, outcome: &ValidationOutcome) -> String {
        self.messages
            .render(outcome, self.config.format(), |date| self.render_date(date))
    }

    fn render_date(&self, date: NaiveDate) -> String {
        self.service
            .format(self.config.format(), self.config.locale(), date)
            .unwrap_or_else(|| date.to_string())
    }
}
