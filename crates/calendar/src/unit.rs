//! Unit and field vocabularies.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Granularity of time used for arithmetic, sequences and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Calendar year.
    Year,
    /// Calendar month.
    Month,
    /// Seven calendar days.
    Week,
    /// Calendar day.
    Day,
    /// Hour.
    Hour,
    /// Minute.
    Minute,
    /// Second.
    Second,
    /// Millisecond.
    Millisecond,
}

impl Unit {
    /// Every unit, coarsest first.
    pub const ALL: [Unit; 8] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// Returns the singular key of this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// Approximate length of the unit in seconds.
    ///
    /// Only used to convert elapsed time between units. Calendar arithmetic
    /// never goes through this table: a year is 365.25 days and a month is
    /// 30 days here, which is wrong for stepping dates.
    pub fn seconds(self) -> f64 {
        match self {
            Unit::Year => 31_557_600.0,
            Unit::Month => 2_592_000.0,
            Unit::Week => 604_800.0,
            Unit::Day => 86_400.0,
            Unit::Hour => 3_600.0,
            Unit::Minute => 60.0,
            Unit::Second => 1.0,
            Unit::Millisecond => 0.001,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CalendarError;

    /// Parses a singular unit key. Plural keys are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Unit::Year),
            "month" => Ok(Unit::Month),
            "week" => Ok(Unit::Week),
            "day" => Ok(Unit::Day),
            "hour" => Ok(Unit::Hour),
            "minute" => Ok(Unit::Minute),
            "second" => Ok(Unit::Second),
            "millisecond" | "millis" => Ok(Unit::Millisecond),
            other => Err(CalendarError::UnknownUnit {
                unit: other.to_string(),
                operation: "unit lookup",
            }),
        }
    }
}

/// Calendar field that can be read from a [`DateValue`](crate::DateValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Year.
    Year,
    /// Month (1..=12).
    Month,
    /// Day of month (1..=31).
    Day,
    /// Hour (0..=23).
    Hour,
    /// Minute (0..=59).
    Minute,
    /// Second (0..=59).
    Second,
    /// Millisecond of the second (0..=999).
    Millis,
    /// ISO day of week, 1 = Monday through 7 = Sunday.
    DayOfWeek,
}

impl Field {
    /// Every field, in the order they are usually printed.
    pub const ALL: [Field; 8] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
        Field::Second,
        Field::Millis,
        Field::DayOfWeek,
    ];

    /// Returns the key of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millis => "millis",
            Field::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Field::Year),
            "month" => Ok(Field::Month),
            "day" => Ok(Field::Day),
            "hour" => Ok(Field::Hour),
            "minute" => Ok(Field::Minute),
            "second" => Ok(Field::Second),
            "millis" => Ok(Field::Millis),
            "day-of-week" => Ok(Field::DayOfWeek),
            other => Err(CalendarError::UnknownUnit {
                unit: other.to_string(),
                operation: "field lookup",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_keys_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.as_str().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn unit_millis_alias() {
        assert_eq!("millis".parse::<Unit>().unwrap(), Unit::Millisecond);
    }

    #[test]
    fn unit_plural_rejected() {
        assert_eq!(
            "days".parse::<Unit>().unwrap_err(),
            CalendarError::UnknownUnit {
                unit: "days".to_string(),
                operation: "unit lookup",
            }
        );
    }

    #[test]
    fn unit_seconds_table() {
        assert_eq!(Unit::Day.seconds(), 86_400.0);
        assert_eq!(Unit::Week.seconds(), 7.0 * Unit::Day.seconds());
        assert_eq!(Unit::Year.seconds(), 365.25 * Unit::Day.seconds());
        assert_eq!(Unit::Month.seconds(), 30.0 * Unit::Day.seconds());
    }

    #[test]
    fn field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn field_week_is_unknown() {
        assert!(matches!(
            "week".parse::<Field>(),
            Err(CalendarError::UnknownUnit {
                operation: "field lookup",
                ..
            })
        ));
    }
}
