use almanac_calendar::{CalendarError, DateValue, Field};

#[test]
fn fields_roundtrip_through_constructor() {
    for (y, m, d, h, mi, s) in [
        (2009, 2, 27, 12, 34, 56),
        (1970, 1, 1, 0, 0, 0),
        (2000, 2, 29, 23, 59, 59),
        (1999, 12, 31, 1, 2, 3),
        (-44, 3, 15, 9, 30, 0),
    ] {
        let date = DateValue::with_hms(y, m, d, h, mi, s).unwrap();
        assert_eq!(date.get(Field::Year), y);
        assert_eq!(date.get(Field::Month), m as i32);
        assert_eq!(date.get(Field::Day), d as i32);
        assert_eq!(date.get(Field::Hour), h as i32);
        assert_eq!(date.get(Field::Minute), mi as i32);
        assert_eq!(date.get(Field::Second), s as i32);
    }
}

#[test]
fn scenario_field_lookup_by_key() {
    let date = DateValue::with_hms(2009, 2, 27, 12, 34, 56).unwrap();
    let lookup = |key: &str| date.get(key.parse::<Field>().unwrap());
    assert_eq!(lookup("year"), 2009);
    assert_eq!(lookup("month"), 2);
    assert_eq!(lookup("day"), 27);
    assert_eq!(lookup("hour"), 12);
    assert_eq!(lookup("minute"), 34);
    assert_eq!(lookup("second"), 56);
    assert_eq!(lookup("millis"), 0);
    assert_eq!(lookup("day-of-week"), 5);
}

#[test]
fn unknown_field_key() {
    assert_eq!(
        "fortnight".parse::<Field>().unwrap_err(),
        CalendarError::UnknownUnit {
            unit: "fortnight".to_string(),
            operation: "field lookup",
        }
    );
}

#[test]
fn day_of_week_covers_a_full_week() {
    // 2009-02-23 was a Monday.
    for offset in 0..7 {
        let date = DateValue::new(2009, 2, 23 + offset).unwrap();
        assert_eq!(date.day_of_week(), offset + 1);
    }
}

#[test]
fn invalid_fields_error() {
    assert!(matches!(
        DateValue::new(2009, 0, 1),
        Err(CalendarError::InvalidDate { month: 0, .. })
    ));
    assert!(matches!(
        DateValue::new(2009, 4, 31),
        Err(CalendarError::InvalidDate { day: 31, .. })
    ));
    assert!(matches!(
        DateValue::with_hms(2009, 4, 30, 12, 60, 0),
        Err(CalendarError::InvalidTime { minute: 60, .. })
    ));
}

#[test]
fn display_ignores_millis() {
    let date = DateValue::with_hms_milli(2009, 2, 27, 1, 2, 3, 456).unwrap();
    assert_eq!(date.to_string(), "2009-02-27 01:02:03");
}

#[test]
fn now_is_after_a_fixed_past_date() {
    let past = DateValue::new(2020, 1, 1).unwrap();
    assert!(DateValue::now() > past);
    assert!(DateValue::today() <= DateValue::now());
}
