//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Construction, arithmetic, unit lookup, formatting and parsing all report
/// through this enum. Predicates (`valid_range`, `is_within`,
/// `are_overlapping`) never produce it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when year, month and day do not name a calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when the time-of-day fields are out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}.{millis:03}")]
    InvalidTime {
        /// The hour that was provided.
        hour: u32,
        /// The minute that was provided.
        minute: u32,
        /// The second that was provided.
        second: u32,
        /// The millisecond that was provided.
        millis: u32,
    },

    /// Returned when arithmetic leaves the range the backend can represent.
    #[error("date out of range: {amount} {unit}(s) from {date}")]
    OutOfRange {
        /// Rendered starting date.
        date: String,
        /// Signed amount that was applied.
        amount: i64,
        /// Unit key of the step.
        unit: &'static str,
    },

    /// Returned when a unit or field key is not supported by an operation.
    #[error("unknown unit {unit:?} for {operation}")]
    UnknownUnit {
        /// The offending key.
        unit: String,
        /// Name of the operation that rejected it.
        operation: &'static str,
    },

    /// Returned when text does not match the resolved pattern.
    #[error("cannot parse {text:?} with pattern {pattern:?}: {reason}")]
    DateParse {
        /// Input text.
        text: String,
        /// Pattern the text was matched against.
        pattern: String,
        /// What went wrong.
        reason: String,
    },

    /// Returned for a locale key other than `us` or `ru`.
    #[error("unknown locale {key:?} (expected \"us\" or \"ru\")")]
    UnknownLocale {
        /// The offending key.
        key: String,
    },

    /// Returned when a named format is not registered.
    #[error("unknown format name {name:?}")]
    UnknownFormat {
        /// The offending name.
        name: String,
    },

    /// Returned when a pattern string cannot be compiled or registered.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// What went wrong.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2009,
            month: 13,
            day: 1,
        };
        assert_eq!(err.to_string(), "invalid date: 2009-13-01");
    }

    #[test]
    fn error_invalid_time() {
        let err = CalendarError::InvalidTime {
            hour: 25,
            minute: 0,
            second: 0,
            millis: 0,
        };
        assert_eq!(err.to_string(), "invalid time: 25:00:00.000");
    }

    #[test]
    fn error_unknown_unit() {
        let err = CalendarError::UnknownUnit {
            unit: "fortnight".to_string(),
            operation: "unit lookup",
        };
        assert_eq!(err.to_string(), "unknown unit \"fortnight\" for unit lookup");
    }

    #[test]
    fn error_unknown_locale() {
        let err = CalendarError::UnknownLocale {
            key: "fr".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown locale \"fr\" (expected \"us\" or \"ru\")"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::UnknownFormat {
            name: "x".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let c = CalendarError::UnknownFormat {
            name: "y".to_string(),
        };
        assert_ne!(a, c);
    }
}
