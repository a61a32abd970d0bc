use almanac_calendar::{
    CalendarError, DateFormat, DateFormatter, DateValue, FormatName, Locale, format_date,
    parse_date,
};

fn sample() -> DateValue {
    DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap()
}

fn named(name: FormatName) -> DateFormat {
    name.into()
}

#[test]
fn scenario_short_date_time_us() {
    let text = format_date(sample(), Some(&named(FormatName::ShortDateTime)), Locale::Us).unwrap();
    assert_eq!(text, "2/27/09 12:34 PM");
}

#[test]
fn every_builtin_under_us() {
    let f = DateFormatter::new(Locale::Us);
    let render = |name| f.format(sample(), Some(&named(name))).unwrap();
    assert_eq!(render(FormatName::Iso8601), "2009-02-27 12:34:56");
    assert_eq!(render(FormatName::ShortDate), "2/27/09");
    assert_eq!(render(FormatName::MediumDate), "Feb 27, 2009");
    assert_eq!(render(FormatName::MediumDateTime), "Feb 27, 2009 12:34:56 PM");
    assert_eq!(render(FormatName::LongDate), "February 27, 2009");
    assert_eq!(render(FormatName::LongDateTime), "February 27, 2009 12:34:56 PM");
    assert_eq!(render(FormatName::FullDate), "Friday, February 27, 2009");
    assert_eq!(
        render(FormatName::FullDateTime),
        "Friday, February 27, 2009 12:34:56 PM"
    );
    assert_eq!(render(FormatName::DbDateTime), "2009-02-27 12:34:56");
    assert_eq!(render(FormatName::RussianShortDate), "27 Feb '09");
    assert_eq!(render(FormatName::CompactDate), "20090227");
}

#[test]
fn every_builtin_under_ru() {
    let f = DateFormatter::new(Locale::Ru);
    let render = |name| f.format(sample(), Some(&named(name))).unwrap();
    assert_eq!(render(FormatName::ShortDateTime), "27.02.09 12:34");
    assert_eq!(render(FormatName::MediumDate), "27.02.2009");
    assert_eq!(render(FormatName::LongDate), "27 февраля 2009 г.");
    assert_eq!(render(FormatName::FullDate), "пятница, 27 февраля 2009 г.");
    assert_eq!(render(FormatName::RussianShortDate), "27 фев '09");
}

#[test]
fn lossless_formats_round_trip() {
    let dates = [
        DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap(),
        DateValue::with_hms(1999, 12, 31, 23, 59, 59).unwrap(),
        DateValue::new(2024, 2, 29).unwrap(),
        DateValue::new(-44, 3, 15).unwrap(),
    ];
    for locale in [Locale::Us, Locale::Ru] {
        for name in [
            FormatName::Iso8601,
            FormatName::MediumDateTime,
            FormatName::LongDateTime,
            FormatName::FullDateTime,
        ] {
            for date in dates {
                let format = named(name);
                let text = format_date(date, Some(&format), locale).unwrap();
                let back = parse_date(&text, Some(&format), locale).unwrap();
                assert_eq!(back, date, "{name} / {locale}: {text}");
            }
        }
    }
}

#[test]
fn db_date_time_round_trips_before_noon() {
    // The twelve-hour field has no marker, so afternoon hours fold back.
    let format = named(FormatName::DbDateTime);
    let morning = DateValue::with_hms(2009, 2, 27, 9, 5, 7).unwrap();
    let text = format_date(morning, Some(&format), Locale::Us).unwrap();
    assert_eq!(text, "2009-02-27 09:05:07");
    assert_eq!(parse_date(&text, Some(&format), Locale::Us).unwrap(), morning);

    let evening = DateValue::with_hms(2009, 2, 27, 21, 5, 7).unwrap();
    let text = format_date(evening, Some(&format), Locale::Us).unwrap();
    assert_eq!(parse_date(&text, Some(&format), Locale::Us).unwrap(), morning);
}

#[test]
fn short_date_drops_time() {
    let format = named(FormatName::ShortDate);
    let text = format_date(sample(), Some(&format), Locale::Us).unwrap();
    let back = parse_date(&text, Some(&format), Locale::Us).unwrap();
    assert_ne!(back, sample());
    assert_eq!(back, DateValue::new(2009, 2, 27).unwrap());
}

#[test]
fn russian_short_date_parses_in_russian() {
    let format = named(FormatName::RussianShortDate);
    assert_eq!(
        parse_date("27 фев '09", Some(&format), Locale::Ru).unwrap(),
        DateValue::new(2009, 2, 27).unwrap()
    );
    assert!(parse_date("27 фев '09", Some(&format), Locale::Us).is_err());
}

#[test]
fn parse_mismatch_is_date_parse_error() {
    let err = parse_date("27/02/2009", None, Locale::Us).unwrap_err();
    assert!(matches!(
        err,
        CalendarError::DateParse { ref pattern, .. } if pattern == "yyyy-MM-dd HH:mm:ss"
    ));
}

#[test]
fn unknown_locale_key() {
    assert_eq!(
        Locale::from_key("de").unwrap_err(),
        CalendarError::UnknownLocale {
            key: "de".to_string()
        }
    );
}

#[test]
fn lenient_descriptor_falls_back_to_pattern() {
    let f = DateFormatter::new(Locale::Us);
    let descriptor = f.descriptor("yyyy/MM/dd");
    assert_eq!(descriptor, DateFormat::pattern("yyyy/MM/dd"));
    assert_eq!(f.format(sample(), Some(&descriptor)).unwrap(), "2009/02/27");
}
