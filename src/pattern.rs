use std::{fmt::Write, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::{
    ConfigError, Locale, MAX_YEAR, PATTERN_QUOTE, TWO_DIGIT_YEAR_START,
    consts::{MAX_DAY_MONTH_DIGITS, MAX_YEAR_DIGITS, TWO_DIGIT_YEAR_DIGITS, TWO_DIGIT_YEAR_SPAN},
    prelude::*,
};

/// A single date field of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// `d` or `dd`
    Day { padded: bool },
    /// `M` or `MM`
    NumericMonth { padded: bool },
    /// `MMM` (abbreviated) or `MMMM` (full)
    MonthName { full: bool },
    /// `y` up to `yyyy`; two letters select the two-digit form
    Year { width: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(Field),
    Literal(String),
}

/// A compiled date pattern using a subset of the Unicode LDML symbols.
///
/// Parsing accepts one or two digits for every numeric day and month field
/// regardless of padding, so `1.1.2020` parses under `dd.MM.yyyy`. Rendering
/// always honors the padding, which is what lets a round-trip comparison
/// detect such inputs. Out-of-range components never roll over.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{source}")]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Returns the pattern text as it was supplied
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parses `input` under this pattern.
    /// Returns `None` unless the whole input matches and names a real calendar day.
    ///
    /// Two-digit years fall in the 100 years starting at `TWO_DIGIT_YEAR_START`.
    pub fn parse(&self, input: &str, locale: &Locale) -> Option<NaiveDate> {
        self.parse_in_window(input, locale, TWO_DIGIT_YEAR_START)
    }

    /// Parses `input`, placing two-digit years in the 100 years starting at `window_start`
    pub fn parse_in_window(&self, input: &str, locale: &Locale, window_start: i32) -> Option<NaiveDate> {
        let mut rest = input;
        let mut day = None;
        let mut month = None;
        let mut year = None;

        for token in &self.tokens {
            match *token {
                Token::Literal(ref text) => rest = rest.strip_prefix(text.as_str())?,
                Token::Field(Field::Day { .. }) => {
                    let (value, remaining) = take_number(rest, 1, MAX_DAY_MONTH_DIGITS)?;
                    day = Some(value);
                    rest = remaining;
                },
                Token::Field(Field::NumericMonth { .. }) => {
                    let (value, remaining) = take_number(rest, 1, MAX_DAY_MONTH_DIGITS)?;
                    month = Some(value);
                    rest = remaining;
                },
                Token::Field(Field::MonthName { .. }) => {
                    let (value, consumed) = locale.match_month(rest)?;
                    month = Some(value);
                    rest = rest.get(consumed..)?;
                },
                Token::Field(Field::Year { width }) if width == TWO_DIGIT_YEAR_DIGITS => {
                    let (value, remaining) = take_number(rest, TWO_DIGIT_YEAR_DIGITS, TWO_DIGIT_YEAR_DIGITS)?;
                    year = Some(resolve_two_digit_year(value, window_start));
                    rest = remaining;
                },
                Token::Field(Field::Year { .. }) => {
                    let (value, remaining) = take_number(rest, 1, MAX_YEAR_DIGITS)?;
                    year = Some(i32::try_from(value).ok()?);
                    rest = remaining;
                },
            }
        }

        if !rest.is_empty() {
            return None;
        }

        let year = year.filter(|y| (1..=MAX_YEAR).contains(y))?;
        NaiveDate::from_ymd_opt(year, month?, day?)
    }

    /// Renders `date` under this pattern.
    /// Returns `None` for years outside `1..=MAX_YEAR`.
    pub fn format(&self, date: NaiveDate, locale: &Locale) -> Option<String> {
        if !(1..=MAX_YEAR).contains(&date.year()) {
            return None;
        }

        let mut out = String::with_capacity(self.source.len() + 4);
        for token in &self.tokens {
            match *token {
                Token::Literal(ref text) => out.push_str(text),
                Token::Field(Field::Day { padded: true }) => write!(out, "{:02}", date.day()).ok()?,
                Token::Field(Field::Day { padded: false }) => write!(out, "{}", date.day()).ok()?,
                Token::Field(Field::NumericMonth { padded: true }) => write!(out, "{:02}", date.month()).ok()?,
                Token::Field(Field::NumericMonth { padded: false }) => write!(out, "{}", date.month()).ok()?,
                Token::Field(Field::MonthName { full: true }) => out.push_str(locale.full_month(date.month())?),
                Token::Field(Field::MonthName { full: false }) => {
                    out.push_str(locale.abbreviated_month(date.month())?);
                },
                Token::Field(Field::Year { width }) if width == TWO_DIGIT_YEAR_DIGITS => {
                    write!(out, "{:02}", date.year() % 100).ok()?;
                },
                Token::Field(Field::Year { width }) => write!(out, "{:0width$}", date.year()).ok()?,
            }
        }
        Some(out)
    }
}

/// Reads between `min` and `max` leading ASCII digits
fn take_number(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = input.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return None;
    }
    let value = input.get(..len)?.parse::<u32>().ok()?;
    Some((value, input.get(len..)?))
}

/// First year of the 100-year two-digit window that ends at `latest_year`
pub(crate) const fn window_ending_at(latest_year: i32) -> i32 {
    latest_year - (TWO_DIGIT_YEAR_SPAN - 1)
}

/// Places a two-digit year in the 100-year window starting at `window_start`
fn resolve_two_digit_year(value: u32, window_start: i32) -> i32 {
    let offset = window_start.rem_euclid(TWO_DIGIT_YEAR_SPAN);
    let century = window_start - offset;
    // value < 100, guaranteed by the two-digit read
    let value = i32::try_from(value).unwrap_or_default();
    if value >= offset { century + value } else { century + TWO_DIGIT_YEAR_SPAN + value }
}

fn field_for(letter: char, count: usize) -> Result<Field, String> {
    match (letter, count) {
        ('d', 1 | 2) => Ok(Field::Day { padded: count == 2 }),
        ('M', 1 | 2) => Ok(Field::NumericMonth { padded: count == 2 }),
        ('M', 3 | 4) => Ok(Field::MonthName { full: count == 4 }),
        ('y', 1..=MAX_YEAR_DIGITS) => Ok(Field::Year { width: count }),
        ('d' | 'M' | 'y', _) => Err(format!("too many '{letter}' letters: {count}")),
        _ => Err(format!("unsupported pattern letter '{letter}'")),
    }
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == PATTERN_QUOTE {
            // '' outside a quoted section is a lone quote
            if chars.next_if_eq(&PATTERN_QUOTE).is_some() {
                literal.push(PATTERN_QUOTE);
                continue;
            }
            let mut closed = false;
            while let Some(q) = chars.next() {
                if q != PATTERN_QUOTE {
                    literal.push(q);
                } else if chars.next_if_eq(&PATTERN_QUOTE).is_some() {
                    literal.push(PATTERN_QUOTE);
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err("unterminated quoted literal".to_owned());
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.next_if_eq(&c).is_some() {
                count += 1;
            }
            let field = field_for(c, count)?;
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field(field));
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn check_fields(tokens: &[Token]) -> Result<(), String> {
    let fields = || {
        tokens.iter().filter_map(|token| match *token {
            Token::Field(field) => Some(field),
            Token::Literal(_) => None,
        })
    };
    let days = fields().filter(|f| matches!(f, Field::Day { .. })).count();
    let months = fields()
        .filter(|f| matches!(f, Field::NumericMonth { .. } | Field::MonthName { .. }))
        .count();
    let years = fields().filter(|f| matches!(f, Field::Year { .. })).count();

    for (name, count) in [("day", days), ("month", months), ("year", years)] {
        if count != 1 {
            return Err(format!("expected exactly one {name} field, found {count}"));
        }
    }
    Ok(())
}

impl FromStr for DatePattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidPattern {
            pattern: s.to_owned(),
            reason,
        };

        let tokens = tokenize(s).map_err(invalid)?;
        check_fields(&tokens).map_err(invalid)?;

        Ok(Self {
            source: s.to_owned(),
            tokens,
        })
    }
}
