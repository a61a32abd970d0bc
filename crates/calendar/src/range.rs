//! Closed-open date ranges and the predicates over them.
//!
//! None of these functions fail: a missing endpoint or an end that is not
//! after the start simply makes every predicate return `false`.

use crate::date::DateValue;

/// A possibly incomplete `[start, end)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    /// Inclusive start.
    pub start: Option<DateValue>,
    /// Exclusive end.
    pub end: Option<DateValue>,
}

impl DateRange {
    /// Creates a range with both endpoints present.
    pub fn new(start: DateValue, end: DateValue) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range from optional endpoints.
    pub fn from_options(start: Option<DateValue>, end: Option<DateValue>) -> Self {
        Self { start, end }
    }

    /// Returns both endpoints if the range is valid.
    pub fn bounds(&self) -> Option<(DateValue, DateValue)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => None,
        }
    }

    /// `true` iff both endpoints are present and `start < end`.
    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }

    /// `true` iff `start <= date < end` on a valid range.
    pub fn contains(&self, date: DateValue) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= date && date < end)
    }

    /// `true` iff both ranges are valid and share at least one instant.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((s, e)), Some((s1, e1))) => s < e1 && s1 < e,
            _ => false,
        }
    }
}

impl From<(DateValue, DateValue)> for DateRange {
    fn from((start, end): (DateValue, DateValue)) -> Self {
        Self::new(start, end)
    }
}

/// `true` iff both endpoints are present and `start` is strictly before `end`.
pub fn valid_range(range: &DateRange) -> bool {
    range.is_valid()
}

/// `true` iff `date` lies in `[start, end)`. Invalid ranges contain nothing.
pub fn is_within(date: DateValue, range: &DateRange) -> bool {
    range.contains(date)
}

/// `true` iff both ranges are valid and overlap.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DateRange, DateValue, are_overlapping};
///
/// let d = |day| DateValue::new(2020, 1, day).unwrap();
/// let a = DateRange::new(d(1), d(10));
/// let b = DateRange::new(d(5), d(15));
/// assert!(are_overlapping(&a, &b));
///
/// let swapped = DateRange::new(d(15), d(5));
/// assert!(!are_overlapping(&a, &swapped));
/// ```
pub fn are_overlapping(a: &DateRange, b: &DateRange) -> bool {
    a.overlaps(b)
}
