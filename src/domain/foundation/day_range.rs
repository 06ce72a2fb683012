//! DayRange value object for inclusive, 1-based cycle-day spans.

use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// Inclusive range of cycle days, `start..=end`, with `1 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRange {
    start: u32,
    end: u32,
}

impl DayRange {
    /// Creates a range, rejecting day 0 and inverted bounds.
    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start == 0 {
            return Err(ValidationError::out_of_range(
                "start_day",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if end < start {
            return Err(ValidationError::inconsistent(
                "end_day",
                format!("end day {} precedes start day {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns true if `day` falls within the range, bounds included.
    pub fn contains(&self, day: u32) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false; a valid range spans at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "day {}", self.start)
        } else {
            write!(f, "days {}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_range_accepts_single_day() {
        let range = DayRange::new(3, 3).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contains(3));
        assert_eq!(range.to_string(), "day 3");
    }

    #[test]
    fn day_range_rejects_day_zero() {
        let err = DayRange::new(0, 5).unwrap_err();
        assert_eq!(err.field(), "start_day");
    }

    #[test]
    fn day_range_rejects_inverted_bounds() {
        let err = DayRange::new(10, 9).unwrap_err();
        assert!(matches!(err, ValidationError::Inconsistent { .. }));
    }

    #[test]
    fn day_range_contains_is_inclusive() {
        let range = DayRange::new(6, 14).unwrap();
        assert!(!range.contains(5));
        assert!(range.contains(6));
        assert!(range.contains(14));
        assert!(!range.contains(15));
        assert_eq!(range.to_string(), "days 6-14");
    }
}
