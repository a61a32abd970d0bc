//! Lazy date sequence generation.

use crate::arith::later;
use crate::date::DateValue;
use crate::unit::Unit;

/// Lazy, forward-only sequence of dates one `unit` apart.
///
/// Only the next candidate is held; each call to `next` computes one step.
/// Cloning an unconsumed sequence gives an independent traversal from the
/// same start.
#[derive(Debug, Clone)]
pub struct DateSequence {
    next: Option<DateValue>,
    unit: Unit,
    until: Option<DateValue>,
}

impl DateSequence {
    /// Returns the step unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the exclusive upper bound, if any.
    pub fn until(&self) -> Option<DateValue> {
        self.until
    }

    /// Returns `true` if the sequence has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.until.is_none()
    }
}

impl Iterator for DateSequence {
    type Item = DateValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.until.is_some_and(|until| current >= until) {
            return None;
        }
        // A step past the representable range ends the sequence.
        self.next = later(current, 1, self.unit).ok();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.next, self.until) {
            (None, _) => (0, Some(0)),
            (Some(next), Some(until)) if next >= until => (0, Some(0)),
            // Unbounded sequences still end at the representable limit.
            (Some(_), _) => (1, None),
        }
    }
}

impl std::iter::FusedIterator for DateSequence {}

/// Generates dates starting at `from`, each `unit` after the previous.
///
/// With `to`, the sequence stops before the first date that is not strictly
/// before `to`. Without it the sequence is unbounded; callers bound it with
/// `take` or `take_while`.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DateValue, Unit, date_sequence};
///
/// let start = DateValue::new(2009, 2, 27).unwrap();
/// let noon = DateValue::with_hms(2009, 2, 27, 12, 0, 0).unwrap();
/// let hours: Vec<_> = date_sequence(Unit::Hour, start, Some(noon)).collect();
/// assert_eq!(hours.len(), 12);
/// ```
pub fn date_sequence(unit: Unit, from: DateValue, to: Option<DateValue>) -> DateSequence {
    tracing::trace!(%unit, %from, to = ?to.map(|d| d.to_string()), "date sequence");
    DateSequence {
        next: Some(from),
        unit,
        until: to,
    }
}
