//! Coarse timeline sizing for a goal.

use jiff::civil::Date;

/// Day, week and month counts for a goal's date range.
///
/// `total_months` is a 30-day bucket count, not a calendar-month count. The
/// expander distributes days over exactly this many buckets, so the same
/// approximation is used end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub total_days: u32,
    pub total_weeks: u32,
    pub total_months: u32,
    pub start_date: Date,
    pub end_date: Date,
}

impl Timeline {
    /// Size a timeline from an explicit day count.
    ///
    /// The day count is taken as given; it is not re-derived from, or checked
    /// against, the two dates.
    pub fn calculate(start_date: Date, target_date: Date, total_days: u32) -> Self {
        Self {
            total_days,
            total_weeks: total_days.div_ceil(7),
            total_months: total_days.div_ceil(30),
            start_date,
            end_date: target_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_bucket_counts() {
        let start = date(2025, 1, 1);
        let t = Timeline::calculate(start, date(2025, 3, 2), 60);
        assert_eq!(t.total_weeks, 9);
        assert_eq!(t.total_months, 2);

        let t = Timeline::calculate(start, date(2025, 1, 2), 1);
        assert_eq!((t.total_weeks, t.total_months), (1, 1));

        let t = Timeline::calculate(start, start, 31);
        assert_eq!((t.total_weeks, t.total_months), (5, 2));
    }

    #[test]
    fn test_dates_pass_through_unvalidated() {
        let start = date(2025, 6, 1);
        let target = date(2025, 5, 1);
        let t = Timeline::calculate(start, target, 14);
        assert_eq!(t.start_date.to_string(), "2025-06-01");
        assert_eq!(t.end_date.to_string(), "2025-05-01");
        assert_eq!(t.total_days, 14);
    }
}
