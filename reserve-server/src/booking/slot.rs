//! Time slot value type
//!
//! A half-open interval `[start, end)` on a single calendar date. Every entry
//! point that books or blocks a table builds one of these first, so the
//! `start < end` invariant holds everywhere downstream.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::{AppError, AppResult};

/// Half-open time interval on one calendar date. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Construct a slot, rejecting equal or inverted bounds
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::validation(
                "Start time must be before end time",
            ));
        }
        Ok(Self { date, start, end })
    }

    /// Half-open overlap test: `[a, b)` and `[b, c)` do not overlap.
    /// Slots on different dates never overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(date: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(
            date.parse().unwrap(),
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
        .expect("valid slot")
    }

    #[test]
    fn test_rejects_inverted_and_zero_width_bounds() {
        let date: NaiveDate = "2024-06-01".parse().unwrap();
        let t18: NaiveTime = "18:00:00".parse().unwrap();
        let t20: NaiveTime = "20:00:00".parse().unwrap();

        assert!(TimeSlot::new(date, t20, t18).is_err());
        assert!(TimeSlot::new(date, t18, t18).is_err());
        assert!(TimeSlot::new(date, t18, t20).is_ok());
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = slot("2024-06-01", "18:00:00", "20:00:00");
        let b = slot("2024-06-01", "19:00:00", "21:00:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_boundary_touch_is_not_overlap() {
        let a = slot("2024-06-01", "10:00:00", "11:00:00");
        let b = slot("2024-06-01", "11:00:00", "12:00:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = slot("2024-06-01", "18:00:00", "22:00:00");
        let inner = slot("2024-06-01", "19:00:00", "20:00:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_different_dates_never_overlap() {
        let a = slot("2024-06-01", "18:00:00", "20:00:00");
        let b = slot("2024-06-02", "18:00:00", "20:00:00");
        assert!(!a.overlaps(&b));
    }
}
