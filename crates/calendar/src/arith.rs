//! Relative-date arithmetic, comparisons, elapsed time and period bounds.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::date::DateValue;
use crate::error::CalendarError;
use crate::unit::Unit;

/// Moves `date` forward by `amount` units.
///
/// Year and month steps are calendar-aware and clamp to the last day of
/// the target month (Jan 31 + 1 month = Feb 28 or 29). All other units
/// are fixed-length steps. A negative `amount` moves backward.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be
/// represented.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{DateValue, Unit, later};
///
/// let date = DateValue::new(2009, 2, 27).unwrap();
/// let shifted = later(date, 10, Unit::Day).unwrap();
/// assert_eq!(shifted, DateValue::new(2009, 3, 9).unwrap());
/// ```
pub fn later(date: DateValue, amount: i64, unit: Unit) -> Result<DateValue, CalendarError> {
    let naive = date.as_naive();
    let stepped = match unit {
        Unit::Year => amount
            .checked_mul(12)
            .and_then(|months| add_months(naive, months)),
        Unit::Month => add_months(naive, amount),
        Unit::Week => TimeDelta::try_weeks(amount).and_then(|d| naive.checked_add_signed(d)),
        Unit::Day => TimeDelta::try_days(amount).and_then(|d| naive.checked_add_signed(d)),
        Unit::Hour => TimeDelta::try_hours(amount).and_then(|d| naive.checked_add_signed(d)),
        Unit::Minute => TimeDelta::try_minutes(amount).and_then(|d| naive.checked_add_signed(d)),
        Unit::Second => TimeDelta::try_seconds(amount).and_then(|d| naive.checked_add_signed(d)),
        Unit::Millisecond => {
            TimeDelta::try_milliseconds(amount).and_then(|d| naive.checked_add_signed(d))
        }
    };
    stepped
        .map(DateValue::from)
        .ok_or_else(|| out_of_range(date, amount, unit))
}

/// Moves `date` backward by `amount` units. Same as `later` with a negated
/// amount.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be
/// represented.
pub fn earlier(date: DateValue, amount: i64, unit: Unit) -> Result<DateValue, CalendarError> {
    let negated = amount
        .checked_neg()
        .ok_or_else(|| out_of_range(date, amount, unit))?;
    later(date, negated, unit)
}

/// Returns `true` if `a` is strictly before `b`.
pub fn is_earlier(a: DateValue, b: DateValue) -> bool {
    a < b
}

/// Returns `true` if `a` is strictly after `b`.
pub fn is_later(a: DateValue, b: DateValue) -> bool {
    a > b
}

/// Absolute time between two dates, expressed in `unit`.
///
/// The millisecond difference is converted with the approximate
/// [`Unit::seconds`] factors, so months and years are averages.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{DateValue, Unit, time_between};
///
/// let a = DateValue::new(2009, 2, 27).unwrap();
/// let b = DateValue::new(2009, 2, 25).unwrap();
/// assert_eq!(time_between(a, b, Unit::Day), 2.0);
/// ```
pub fn time_between(a: DateValue, b: DateValue, unit: Unit) -> f64 {
    let millis = a.timestamp_millis().abs_diff(b.timestamp_millis());
    millis as f64 / 1000.0 / unit.seconds()
}

/// Floors `date` to the start of its enclosing period.
///
/// Weeks start on Monday. Every finer field is set to its minimum.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownUnit`] for [`Unit::Millisecond`], and
/// [`CalendarError::OutOfRange`] if the floored week starts before the
/// earliest representable date.
pub fn beginning_of(date: DateValue, unit: Unit) -> Result<DateValue, CalendarError> {
    floor(date, unit, "beginning-of")
}

/// Returns the last whole second of the period enclosing `date`: the start
/// of the next period minus one second.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownUnit`] for [`Unit::Millisecond`], and
/// [`CalendarError::OutOfRange`] near the ends of the representable range.
pub fn end_of(date: DateValue, unit: Unit) -> Result<DateValue, CalendarError> {
    let start = floor(date, unit, "end-of")?;
    let next = later(start, 1, unit)?;
    earlier(next, 1, Unit::Second)
}

fn floor(
    date: DateValue,
    unit: Unit,
    operation: &'static str,
) -> Result<DateValue, CalendarError> {
    let naive = date.as_naive();
    let day = naive.date();
    let floored = match unit {
        Unit::Year => NaiveDate::from_ymd_opt(day.year(), 1, 1).map(at_midnight),
        Unit::Month => NaiveDate::from_ymd_opt(day.year(), day.month(), 1).map(at_midnight),
        Unit::Week => day
            .checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
            .map(at_midnight),
        Unit::Day => Some(at_midnight(day)),
        Unit::Hour => NaiveTime::from_hms_opt(naive.hour(), 0, 0).map(|t| day.and_time(t)),
        Unit::Minute => {
            NaiveTime::from_hms_opt(naive.hour(), naive.minute(), 0).map(|t| day.and_time(t))
        }
        Unit::Second => NaiveTime::from_hms_opt(naive.hour(), naive.minute(), naive.second())
            .map(|t| day.and_time(t)),
        Unit::Millisecond => {
            return Err(CalendarError::UnknownUnit {
                unit: unit.as_str().to_string(),
                operation,
            });
        }
    };
    floored
        .map(DateValue::from)
        .ok_or_else(|| out_of_range(date, 0, unit))
}

fn at_midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn add_months(naive: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        naive.checked_add_months(magnitude)
    } else {
        naive.checked_sub_months(magnitude)
    }
}

fn out_of_range(date: DateValue, amount: i64, unit: Unit) -> CalendarError {
    CalendarError::OutOfRange {
        date: date.to_string(),
        amount,
        unit: unit.as_str(),
    }
}
