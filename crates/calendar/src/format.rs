//! Format descriptors and the locale-carrying formatter.

use crate::config::FormatConfig;
use crate::date::DateValue;
use crate::error::CalendarError;
use crate::locale::Locale;
use crate::pattern::Pattern;
use crate::registry::{FormatName, FormatRegistry};

/// How to render or parse a date: a registered name or a raw pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// A name looked up in the [`FormatRegistry`].
    Named(String),
    /// A pattern used as is.
    Pattern(String),
}

impl DateFormat {
    /// Creates a named descriptor.
    pub fn named(name: impl Into<String>) -> Self {
        DateFormat::Named(name.into())
    }

    /// Creates a raw pattern descriptor.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        DateFormat::Pattern(pattern.into())
    }
}

impl From<FormatName> for DateFormat {
    fn from(name: FormatName) -> Self {
        DateFormat::Named(name.as_str().to_string())
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        FormatName::Iso8601.into()
    }
}

/// Formats and parses dates under one locale and one registry.
///
/// The locale is carried here rather than in process-wide state, so two
/// formatters with different locales can be used side by side.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DateFormat, DateFormatter, DateValue, FormatName, Locale};
///
/// let formatter = DateFormatter::new(Locale::Us);
/// let date = DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap();
/// let text = formatter
///     .format(date, Some(&FormatName::ShortDateTime.into()))
///     .unwrap();
/// assert_eq!(text, "2/27/09 12:34 PM");
/// ```
#[derive(Debug, Clone)]
pub struct DateFormatter {
    registry: FormatRegistry,
    locale: Locale,
    default_format: DateFormat,
}

impl DateFormatter {
    /// Creates a formatter with the built-in registry and `iso8601` as the
    /// default format.
    pub fn new(locale: Locale) -> Self {
        Self {
            registry: FormatRegistry::new(),
            locale,
            default_format: DateFormat::default(),
        }
    }

    /// Builds a formatter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`FormatConfig::validate`].
    pub fn from_config(config: &FormatConfig) -> Result<Self, CalendarError> {
        let mut formatter = Self::new(config.locale());
        for (name, pattern) in config.patterns() {
            formatter.register(name.clone(), pattern.clone())?;
        }
        formatter.default_format = formatter.descriptor(config.default_format());
        formatter.pattern_for(None)?;
        Ok(formatter)
    }

    /// Replaces the format used when none is given.
    pub fn with_default_format(mut self, format: DateFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Replaces the locale, keeping the registry and default format.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the default format.
    pub fn default_format(&self) -> &DateFormat {
        &self.default_format
    }

    /// Returns the registry.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Adds a custom named pattern. See [`FormatRegistry::register`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] for bad patterns or
    /// built-in names.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<(), CalendarError> {
        self.registry.register(name, pattern)
    }

    /// Interprets a user-supplied key: a registered name becomes
    /// [`DateFormat::Named`], anything else [`DateFormat::Pattern`].
    pub fn descriptor(&self, key: &str) -> DateFormat {
        if self.registry.contains(key) {
            DateFormat::named(key)
        } else {
            DateFormat::pattern(key)
        }
    }

    /// Resolves a descriptor to pattern text under this formatter's locale.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownFormat`] for an unregistered name
    /// and [`CalendarError::InvalidPattern`] if the pattern does not
    /// compile.
    pub fn pattern_for(&self, format: Option<&DateFormat>) -> Result<String, CalendarError> {
        Ok(self.compile(format)?.source().to_string())
    }

    /// Renders `date`. `None` uses the default format.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownFormat`] or
    /// [`CalendarError::InvalidPattern`] if the format cannot be resolved.
    #[tracing::instrument(level = "trace", skip(self), fields(locale = %self.locale))]
    pub fn format(
        &self,
        date: DateValue,
        format: Option<&DateFormat>,
    ) -> Result<String, CalendarError> {
        let pattern = self.compile(format)?;
        Ok(pattern.render(date, self.locale))
    }

    /// Parses `text`. `None` uses the default format.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateParse`] if the text does not match,
    /// and the resolution errors of [`DateFormatter::format`].
    #[tracing::instrument(level = "trace", skip(self), fields(locale = %self.locale))]
    pub fn parse(
        &self,
        text: &str,
        format: Option<&DateFormat>,
    ) -> Result<DateValue, CalendarError> {
        let pattern = self.compile(format)?;
        pattern.parse(text, self.locale).inspect_err(|err| {
            tracing::debug!(%err, "parse failed");
        })
    }

    fn compile(&self, format: Option<&DateFormat>) -> Result<Pattern, CalendarError> {
        let source = match format.unwrap_or(&self.default_format) {
            DateFormat::Named(name) => self.registry.resolve(name, self.locale)?,
            DateFormat::Pattern(pattern) => pattern.clone(),
        };
        tracing::trace!(pattern = %source, "resolved format");
        Pattern::compile(&source)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::system())
    }
}

/// Renders `date` with the built-in registry under `locale`.
///
/// `None` renders as `iso8601`.
///
/// # Errors
///
/// See [`DateFormatter::format`].
pub fn format_date(
    date: DateValue,
    format: Option<&DateFormat>,
    locale: Locale,
) -> Result<String, CalendarError> {
    DateFormatter::new(locale).format(date, format)
}

/// Parses `text` with the built-in registry under `locale`.
///
/// `None` parses as `iso8601`.
///
/// # Errors
///
/// See [`DateFormatter::parse`].
pub fn parse_date(
    text: &str,
    format: Option<&DateFormat>,
    locale: Locale,
) -> Result<DateValue, CalendarError> {
    DateFormatter::new(locale).parse(text, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateValue {
        DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap()
    }

    #[test]
    fn default_is_iso8601() {
        let text = format_date(sample(), None, Locale::Us).unwrap();
        assert_eq!(text, "2009-02-27 12:34:56");
        assert_eq!(parse_date(&text, None, Locale::Us).unwrap(), sample());
    }

    #[test]
    fn strict_named_lookup() {
        let err = format_date(sample(), Some(&DateFormat::named("nope")), Locale::Us).unwrap_err();
        assert_eq!(
            err,
            CalendarError::UnknownFormat {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn raw_pattern() {
        let text = format_date(sample(), Some(&DateFormat::pattern("dd/MM")), Locale::Us).unwrap();
        assert_eq!(text, "27/02");
    }

    #[test]
    fn descriptor_is_lenient() {
        let formatter = DateFormatter::new(Locale::Us);
        assert_eq!(
            formatter.descriptor("short-date"),
            DateFormat::named("short-date")
        );
        assert_eq!(
            formatter.descriptor("yyyy"),
            DateFormat::pattern("yyyy")
        );
    }

    #[test]
    fn custom_default_format() {
        let formatter =
            DateFormatter::new(Locale::Us).with_default_format(FormatName::CompactDate.into());
        assert_eq!(formatter.format(sample(), None).unwrap(), "20090227");
        assert_eq!(
            formatter.parse("20090227", None).unwrap(),
            DateValue::new(2009, 2, 27).unwrap()
        );
    }

    #[test]
    fn registered_pattern_is_used() {
        let mut formatter = DateFormatter::new(Locale::Ru);
        formatter.register("month-year", "LLLL").unwrap_err();
        formatter.register("month-year", "MMMM yyyy").unwrap();
        let text = formatter
            .format(sample(), Some(&DateFormat::named("month-year")))
            .unwrap();
        assert_eq!(text, "февраля 2009");
    }

    #[test]
    fn with_locale_switches_names() {
        let format = DateFormat::from(FormatName::LongDate);
        let us = DateFormatter::new(Locale::Us);
        assert_eq!(us.format(sample(), Some(&format)).unwrap(), "February 27, 2009");
        let ru = us.with_locale(Locale::Ru);
        assert_eq!(ru.locale(), Locale::Ru);
        assert_eq!(
            ru.format(sample(), Some(&format)).unwrap(),
            "27 февраля 2009 г."
        );
    }

    #[test]
    fn from_config_applies_everything() {
        let config = FormatConfig::new()
            .with_locale(Locale::Ru)
            .with_pattern("day-month", "d MMMM")
            .with_default_format("day-month");
        let formatter = DateFormatter::from_config(&config).unwrap();
        assert_eq!(formatter.locale(), Locale::Ru);
        assert_eq!(formatter.default_format(), &DateFormat::named("day-month"));
        assert_eq!(formatter.format(sample(), None).unwrap(), "27 февраля");
    }

    #[test]
    fn from_config_rejects_bad_default_pattern() {
        let config = FormatConfig::new()
            .with_locale(Locale::Us)
            .with_default_format("not a pattern");
        assert!(matches!(
            DateFormatter::from_config(&config),
            Err(CalendarError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn pattern_for_resolves_styles() {
        let formatter = DateFormatter::new(Locale::Us);
        assert_eq!(
            formatter
                .pattern_for(Some(&FormatName::MediumDate.into()))
                .unwrap(),
            "MMM d, yyyy"
        );
        assert_eq!(formatter.pattern_for(None).unwrap(), "yyyy-MM-dd HH:mm:ss");
    }
}
