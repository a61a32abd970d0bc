//! Named formats and the registry that resolves them to patterns.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::locale::Locale;
use crate::pattern::Pattern;

/// Length of a locale-dependent date or time style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Numeric, e.g. `2/27/09`.
    Short,
    /// Abbreviated month name, e.g. `Feb 27, 2009`.
    Medium,
    /// Full month name, e.g. `February 27, 2009`.
    Long,
    /// Full month and weekday names.
    Full,
}

impl Style {
    fn date_pattern(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Us, Style::Short) => "M/d/yy",
            (Locale::Us, Style::Medium) => "MMM d, yyyy",
            (Locale::Us, Style::Long) => "MMMM d, yyyy",
            (Locale::Us, Style::Full) => "EEEE, MMMM d, yyyy",
            (Locale::Ru, Style::Short) => "dd.MM.yy",
            (Locale::Ru, Style::Medium) => "dd.MM.yyyy",
            (Locale::Ru, Style::Long) => "d MMMM yyyy 'г.'",
            (Locale::Ru, Style::Full) => "EEEE, d MMMM yyyy 'г.'",
        }
    }

    fn time_pattern(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Us, Style::Short) => "h:mm a",
            (Locale::Us, _) => "h:mm:ss a",
            (Locale::Ru, Style::Short) => "H:mm",
            (Locale::Ru, _) => "H:mm:ss",
        }
    }
}

/// How a registered name renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// A fixed pattern, the same in every locale.
    Pattern(String),
    /// A locale-dependent date style, optionally followed by a time style.
    Style {
        /// Style of the date part.
        date: Style,
        /// Style of the time part, if rendered.
        time: Option<Style>,
    },
}

impl Layout {
    /// Returns the pattern this layout uses under `locale`.
    pub fn pattern(&self, locale: Locale) -> String {
        match self {
            Layout::Pattern(pattern) => pattern.clone(),
            Layout::Style { date, time: None } => date.date_pattern(locale).to_string(),
            Layout::Style {
                date,
                time: Some(time),
            } => format!(
                "{} {}",
                date.date_pattern(locale),
                time.time_pattern(locale)
            ),
        }
    }
}

/// The built-in format names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatName {
    /// `yyyy-MM-dd HH:mm:ss`
    Iso8601,
    /// Short date style.
    ShortDate,
    /// Short date and time style.
    ShortDateTime,
    /// Medium date style.
    MediumDate,
    /// Medium date and time style.
    MediumDateTime,
    /// Long date style.
    LongDate,
    /// Long date and time style.
    LongDateTime,
    /// Full date style.
    FullDate,
    /// Full date and time style.
    FullDateTime,
    /// `yyyy-MM-dd hh:mm:ss` (twelve-hour clock, no marker).
    DbDateTime,
    /// `dd MMM ''yy`
    RussianShortDate,
    /// `yyyyMMdd`
    CompactDate,
}

impl FormatName {
    /// Every built-in name.
    pub const ALL: [FormatName; 12] = [
        FormatName::Iso8601,
        FormatName::ShortDate,
        FormatName::ShortDateTime,
        FormatName::MediumDate,
        FormatName::MediumDateTime,
        FormatName::LongDate,
        FormatName::LongDateTime,
        FormatName::FullDate,
        FormatName::FullDateTime,
        FormatName::DbDateTime,
        FormatName::RussianShortDate,
        FormatName::CompactDate,
    ];

    /// Returns the registry key of this name.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatName::Iso8601 => "iso8601",
            FormatName::ShortDate => "short-date",
            FormatName::ShortDateTime => "short-date-time",
            FormatName::MediumDate => "medium-date",
            FormatName::MediumDateTime => "medium-date-time",
            FormatName::LongDate => "long-date",
            FormatName::LongDateTime => "long-date-time",
            FormatName::FullDate => "full-date",
            FormatName::FullDateTime => "full-date-time",
            FormatName::DbDateTime => "db-date-time",
            FormatName::RussianShortDate => "russian-short-date",
            FormatName::CompactDate => "compact-date",
        }
    }

    /// Returns the layout registered for this name.
    pub fn layout(self) -> Layout {
        let style = |date, time| Layout::Style { date, time };
        match self {
            FormatName::Iso8601 => Layout::Pattern("yyyy-MM-dd HH:mm:ss".to_string()),
            FormatName::ShortDate => style(Style::Short, None),
            FormatName::ShortDateTime => style(Style::Short, Some(Style::Short)),
            FormatName::MediumDate => style(Style::Medium, None),
            FormatName::MediumDateTime => style(Style::Medium, Some(Style::Medium)),
            FormatName::LongDate => style(Style::Long, None),
            FormatName::LongDateTime => style(Style::Long, Some(Style::Long)),
            FormatName::FullDate => style(Style::Full, None),
            FormatName::FullDateTime => style(Style::Full, Some(Style::Full)),
            FormatName::DbDateTime => Layout::Pattern("yyyy-MM-dd hh:mm:ss".to_string()),
            FormatName::RussianShortDate => Layout::Pattern("dd MMM ''yy".to_string()),
            FormatName::CompactDate => Layout::Pattern("yyyyMMdd".to_string()),
        }
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatName {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CalendarError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Mapping from format names to layouts.
///
/// Starts with every [`FormatName`]; more names can be added with
/// [`FormatRegistry::register`].
///
/// # Example
///
/// ```
/// use almanac_calendar::{FormatRegistry, Layout, Locale};
///
/// let mut registry = FormatRegistry::new();
/// registry.register("month-year", "MMMM yyyy").unwrap();
/// let layout = registry.get("month-year").unwrap();
/// assert_eq!(layout.pattern(Locale::Us), "MMMM yyyy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRegistry {
    layouts: BTreeMap<String, Layout>,
}

impl FormatRegistry {
    /// Creates a registry holding the built-in names.
    pub fn new() -> Self {
        let layouts = FormatName::ALL
            .into_iter()
            .map(|name| (name.as_str().to_string(), name.layout()))
            .collect();
        Self { layouts }
    }

    /// Adds a named pattern, replacing an earlier custom entry of the same
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] if the pattern does not
    /// compile or the name is built in.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<(), CalendarError> {
        let name = name.into();
        let pattern = pattern.into();
        if name.parse::<FormatName>().is_ok() {
            return Err(CalendarError::InvalidPattern {
                pattern,
                reason: format!("{name:?} is a built-in format name"),
            });
        }
        Pattern::compile(&pattern)?;
        tracing::debug!(%name, %pattern, "registered format");
        self.layouts.insert(name, Layout::Pattern(pattern));
        Ok(())
    }

    /// Looks up a name.
    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    /// Resolves `name` to its pattern under `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownFormat`] if the name is not
    /// registered.
    pub fn resolve(&self, name: &str, locale: Locale) -> Result<String, CalendarError> {
        self.get(name)
            .map(|layout| layout.pattern(locale))
            .ok_or_else(|| CalendarError::UnknownFormat {
                name: name.to_string(),
            })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
