use almanac_calendar::{DateValue, Unit, date_sequence, later};

#[test]
fn scenario_twelve_hours() {
    let start = DateValue::new(2009, 2, 27).unwrap();
    let noon = DateValue::with_hms(2009, 2, 27, 12, 0, 0).unwrap();
    let hours: Vec<_> = date_sequence(Unit::Hour, start, Some(noon)).collect();
    assert_eq!(hours.len(), 12);
    for (i, date) in hours.iter().enumerate() {
        assert_eq!(date.hour(), i as u32);
        assert_eq!(date.day(), 27);
    }
    for pair in hours.windows(2) {
        assert_eq!(later(pair[0], 1, Unit::Hour).unwrap(), pair[1]);
    }
}

#[test]
fn full_year_of_days() {
    let start = DateValue::new(2008, 1, 1).unwrap();
    let end = DateValue::new(2009, 1, 1).unwrap();
    let days: Vec<_> = date_sequence(Unit::Day, start, Some(end)).collect();
    assert_eq!(days.len(), 366);
    assert_eq!(days[59], DateValue::new(2008, 2, 29).unwrap());
    assert_eq!(*days.last().unwrap(), DateValue::new(2008, 12, 31).unwrap());
}

#[test]
fn unbounded_take() {
    let start = DateValue::new(2009, 1, 1).unwrap();
    let weeks: Vec<_> = date_sequence(Unit::Week, start, None).take(3).collect();
    assert_eq!(
        weeks,
        vec![
            DateValue::new(2009, 1, 1).unwrap(),
            DateValue::new(2009, 1, 8).unwrap(),
            DateValue::new(2009, 1, 15).unwrap(),
        ]
    );
}

#[test]
fn regenerating_gives_same_elements() {
    let start = DateValue::new(2009, 1, 31).unwrap();
    let first: Vec<_> = date_sequence(Unit::Month, start, None).take(5).collect();
    let second: Vec<_> = date_sequence(Unit::Month, start, None).take(5).collect();
    assert_eq!(first, second);
}

#[test]
fn length_always_matches() {
    let start = DateValue::new(2000, 1, 1).unwrap();
    for n in [0, 1, 100, 365, 1000] {
        let end = later(start, n, Unit::Day).unwrap();
        let count = date_sequence(Unit::Day, start, Some(end)).count();
        assert_eq!(count, n as usize, "expected length {n}, got {count}");
    }
}
