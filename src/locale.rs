use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::{ConfigError, MAX_MONTH, prelude::*};

/// Month names of one language, January first
#[derive(Debug, PartialEq, Eq)]
struct MonthNames {
    full:        [&'static str; 12],
    abbreviated: [&'static str; 12],
}

const ENGLISH: MonthNames = MonthNames {
    full:        [
        "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
        "November", "December",
    ],
    abbreviated: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
};

const GERMAN: MonthNames = MonthNames {
    full:        [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November",
        "Dezember",
    ],
    abbreviated: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
    ],
};

const FRENCH: MonthNames = MonthNames {
    full:        [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre", "octobre", "novembre",
        "décembre",
    ],
    abbreviated: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
    ],
};

const SPANISH: MonthNames = MonthNames {
    full:        [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    abbreviated: ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"],
};

// Genitive forms, as used inside a full date ("1 января 2020")
const RUSSIAN: MonthNames = MonthNames {
    full:        [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ],
    abbreviated: [
        "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.", "дек.",
    ],
};

fn month_names(language: &str) -> Option<&'static MonthNames> {
    match language {
        "en" => Some(&ENGLISH),
        "de" => Some(&GERMAN),
        "fr" => Some(&FRENCH),
        "es" => Some(&SPANISH),
        "ru" => Some(&RUSSIAN),
        _ => None,
    }
}

/// A locale identifier accepted by the pattern service.
///
/// Any identifier `unic-langid` understands is parsed (`en_US`, `de-DE`,
/// `en_US_POSIX`); only its language subtag selects the month names.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{id}")]
pub struct Locale {
    id:     String,
    months: &'static MonthNames,
}

impl Locale {
    /// Returns the identifier as it was supplied
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full month name, `month` in `1..=12`
    pub(crate) fn full_month(&self, month: u32) -> Option<&'static str> {
        Self::name_at(&self.months.full, month)
    }

    /// Abbreviated month name, `month` in `1..=12`
    pub(crate) fn abbreviated_month(&self, month: u32) -> Option<&'static str> {
        Self::name_at(&self.months.abbreviated, month)
    }

    fn name_at(names: &[&'static str; 12], month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        names.get(index).copied()
    }

    /// Matches a month name (full or abbreviated, any case) at the start of
    /// `input`. The longest matching name wins.
    ///
    /// Returns the month number and the number of bytes consumed.
    pub(crate) fn match_month(&self, input: &str) -> Option<(u32, usize)> {
        let full = (1..=MAX_MONTH).zip(self.months.full);
        let abbreviated = (1..=MAX_MONTH).zip(self.months.abbreviated);

        let mut best: Option<(u32, usize)> = None;
        for (month, name) in full.chain(abbreviated) {
            let len = name.len();
            let Some(prefix) = input.get(..len) else {
                continue;
            };
            if prefix.to_lowercase() == name.to_lowercase() && best.is_none_or(|(_, matched)| len > matched) {
                best = Some((month, len));
            }
        }
        best
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ConfigError::UnsupportedLocale(s.to_owned());

        let langid = s.parse::<LanguageIdentifier>().map_err(|_| unsupported())?;
        let months = month_names(langid.language.as_str()).ok_or_else(unsupported)?;

        Ok(Self {
            id: s.to_owned(),
            months,
        })
    }
}
