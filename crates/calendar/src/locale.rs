//! Locale setting and the name tables used by the pattern engine.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Language used for month names, weekday names and AM/PM markers, and
/// for the layout of the named styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (United States).
    Us,
    /// Russian (Russia).
    Ru,
}

/// Names a locale renders and recognises.
#[derive(Debug)]
pub(crate) struct LocaleNames {
    /// Month names in formatting context (genitive in Russian).
    pub months: [&'static str; 12],
    /// Month names in standalone (nominative) form; accepted when parsing.
    pub months_standalone: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Monday first.
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub am_pm: [&'static str; 2],
}

static US_NAMES: LocaleNames = LocaleNames {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_standalone: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    am_pm: ["AM", "PM"],
};

static RU_NAMES: LocaleNames = LocaleNames {
    months: [
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
    months_standalone: [
        "январь",
        "февраль",
        "март",
        "апрель",
        "май",
        "июнь",
        "июль",
        "август",
        "сентябрь",
        "октябрь",
        "ноябрь",
        "декабрь",
    ],
    months_short: [
        "янв", "фев", "мар", "апр", "мая", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
    ],
    weekdays: [
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
        "воскресенье",
    ],
    weekdays_short: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
    am_pm: ["ДП", "ПП"],
};

impl Locale {
    /// Resolves a locale key: `"us"` or `"ru"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownLocale`] for any other key.
    pub fn from_key(key: &str) -> Result<Self, CalendarError> {
        match key {
            "us" => Ok(Locale::Us),
            "ru" => Ok(Locale::Ru),
            other => Err(CalendarError::UnknownLocale {
                key: other.to_string(),
            }),
        }
    }

    /// Returns the key of this locale.
    pub fn key(self) -> &'static str {
        match self {
            Locale::Us => "us",
            Locale::Ru => "ru",
        }
    }

    /// Platform default, read from `LC_ALL`, `LC_TIME` then `LANG`.
    ///
    /// The first non-empty variable decides; anything that is not Russian
    /// falls back to [`Locale::Us`].
    pub fn system() -> Self {
        let tag = ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());
        let locale = tag.as_deref().map_or(Locale::Us, Self::from_posix_tag);
        tracing::debug!(tag = ?tag, locale = locale.key(), "system locale");
        locale
    }

    /// Maps a POSIX locale tag such as `ru_RU.UTF-8` to a locale.
    pub(crate) fn from_posix_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ru") {
            Locale::Ru
        } else {
            Locale::Us
        }
    }

    pub(crate) fn names(self) -> &'static LocaleNames {
        match self {
            Locale::Us => &US_NAMES,
            Locale::Ru => &RU_NAMES,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
