//! Configuration for building a [`DateFormatter`](crate::DateFormatter).

use crate::error::CalendarError;
use crate::format::DateFormatter;
use crate::locale::Locale;

/// Settings a formatter is built from.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use almanac_calendar::{FormatConfig, Locale};
///
/// let config = FormatConfig::new()
///     .with_locale(Locale::Ru)
///     .with_pattern("month-year", "MMMM yyyy")
///     .with_default_format("month-year");
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// `None` means the platform default.
    locale: Option<Locale>,
    /// Registered name or raw pattern used when no format is given.
    default_format: String,
    /// Custom named patterns, registered in order.
    patterns: Vec<(String, String)>,
}

impl FormatConfig {
    /// Creates a configuration.
    ///
    /// Defaults: system locale, `default_format = "iso8601"`, no custom
    /// patterns.
    pub fn new() -> Self {
        Self {
            locale: None,
            default_format: "iso8601".to_string(),
            patterns: Vec::new(),
        }
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the default format (a name or a pattern).
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    /// Adds a custom named pattern.
    pub fn with_pattern(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.push((name.into(), pattern.into()));
        self
    }

    /// Returns the configured locale, or the system locale if unset.
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::system)
    }

    /// Returns the default format key.
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Returns the custom patterns.
    pub fn patterns(&self) -> &[(String, String)] {
        &self.patterns
    }

    /// Validates this configuration.
    ///
    /// Returns an error if a custom pattern does not compile, reuses a
    /// built-in name, or the default format cannot be resolved.
    pub fn validate(&self) -> Result<(), CalendarError> {
        DateFormatter::from_config(self).map(|_| ())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}
