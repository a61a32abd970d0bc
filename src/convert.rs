//! Pure conversion functions: TOML config structs and CLI strings -> crate API types.

use anyhow::{Context, Result};

use almanac_calendar::{DateFormatter, DateValue, FormatConfig, Locale};

use crate::config::FormatToml;

/// Parses a locale key into the corresponding enum variant.
pub fn parse_locale(s: &str) -> Result<Locale> {
    Locale::from_key(&s.to_lowercase()).with_context(|| format!("invalid locale: {s:?}"))
}

/// Builds a [`FormatConfig`] from the TOML format section.
///
/// `locale_override` (from the command line) wins over the file.
pub fn build_format_config(
    format: &FormatToml,
    locale_override: Option<&str>,
) -> Result<FormatConfig> {
    let mut cfg = FormatConfig::new().with_default_format(&format.default);
    if let Some(key) = locale_override.or(format.locale.as_deref()) {
        cfg = cfg.with_locale(parse_locale(key)?);
    }
    for (name, pattern) in &format.patterns {
        cfg = cfg.with_pattern(name, pattern);
    }
    Ok(cfg)
}

/// Builds the formatter every subcommand shares.
pub fn build_formatter(format: &FormatToml, locale_override: Option<&str>) -> Result<DateFormatter> {
    let cfg = build_format_config(format, locale_override)?;
    DateFormatter::from_config(&cfg).context("invalid [format] configuration")
}

/// Parses a date argument with the formatter's default format.
pub fn parse_date_arg(formatter: &DateFormatter, text: &str) -> Result<DateValue> {
    formatter
        .parse(text, None)
        .with_context(|| format!("invalid date argument: {text:?}"))
}

#[cfg(test)]
mod tests {
    use almanac_calendar::DateFormat;

    use super::*;

    #[test]
    fn locale_keys() {
        assert_eq!(parse_locale("ru").unwrap(), Locale::Ru);
        assert_eq!(parse_locale("US").unwrap(), Locale::Us);
        assert!(parse_locale("fr").is_err());
    }

    #[test]
    fn override_beats_file() {
        let toml = FormatToml {
            locale: Some("ru".to_string()),
            ..FormatToml::default()
        };
        let cfg = build_format_config(&toml, Some("us")).unwrap();
        assert_eq!(cfg.locale(), Locale::Us);
        let cfg = build_format_config(&toml, None).unwrap();
        assert_eq!(cfg.locale(), Locale::Ru);
    }

    #[test]
    fn patterns_are_registered() {
        let mut toml = FormatToml::default();
        toml.patterns
            .insert("month-year".to_string(), "MMMM yyyy".to_string());
        toml.default = "month-year".to_string();
        let formatter = build_formatter(&toml, Some("us")).unwrap();
        assert_eq!(formatter.default_format(), &DateFormat::named("month-year"));
        let date = DateValue::new(2009, 2, 27).unwrap();
        assert_eq!(formatter.format(date, None).unwrap(), "February 2009");
    }

    #[test]
    fn bad_pattern_is_reported() {
        let mut toml = FormatToml::default();
        toml.patterns.insert("zoned".to_string(), "HH z".to_string());
        let err = build_formatter(&toml, Some("us")).unwrap_err();
        assert!(format!("{err:#}").contains("invalid [format] configuration"));
    }

    #[test]
    fn date_argument_uses_default_format() {
        let formatter = build_formatter(&FormatToml::default(), Some("us")).unwrap();
        let date = parse_date_arg(&formatter, "2009-02-27 12:34:56").unwrap();
        assert_eq!(date, DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap());
        assert!(parse_date_arg(&formatter, "2009-02-27").is_err());
    }
}
