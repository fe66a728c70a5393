//! Reporting periods and calendar bucketing
//!
//! Pure date helpers used to slice records into reporting windows and to
//! enumerate calendar buckets (days, weeks, months) for time series.
//! Weeks are Sunday-aligned. This layer never reads the clock; callers
//! inject the reference date.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reporting window preset, anchored at a caller-supplied reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Sunday-aligned calendar week containing the reference date
    Week,

    /// Calendar month containing the reference date
    #[default]
    Month,

    /// Trailing three-calendar-month window ending with the reference
    /// month (not a fixed fiscal quarter)
    Quarter,

    /// Calendar year containing the reference date
    Year,
}

impl ReportPeriod {
    /// Parse a period name, falling back to the monthly window for
    /// anything unrecognized
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Self::Week,
            "quarter" => Self::Quarter,
            "year" => Self::Year,
            _ => Self::Month,
        }
    }

    /// The date range this period covers around `reference`
    pub fn range(&self, reference: NaiveDate) -> DateRange {
        match self {
            Self::Week => week_of(reference),
            Self::Month => DateRange::new(first_of_month(reference), last_of_month(reference)),
            Self::Quarter => {
                DateRange::new(months_before(reference, 2), last_of_month(reference))
            }
            Self::Year => {
                let year = reference.year();
                DateRange::new(
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(reference),
                    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(reference),
                )
            }
        }
    }

    /// The same window shape, shifted one period back
    pub fn previous_range(&self, reference: NaiveDate) -> DateRange {
        match self {
            Self::Week => week_of(reference - Duration::days(7)),
            Self::Month => Self::Month.range(first_of_month(reference) - Duration::days(1)),
            Self::Quarter => DateRange::new(
                months_before(reference, 5),
                last_of_month(months_before(reference, 3)),
            ),
            Self::Year => {
                let year = reference.year() - 1;
                DateRange::new(
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(reference),
                    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(reference),
                )
            }
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range covering [start, end]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every calendar day in the range, both endpoints included
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect()
    }

    /// Every Sunday-aligned calendar week overlapping the range, in
    /// order. Weeks are returned whole, even when the range starts or
    /// ends mid-week.
    pub fn weeks(&self) -> Vec<DateRange> {
        let mut weeks = Vec::new();
        let mut cursor = week_of(self.start);
        while cursor.start <= self.end {
            weeks.push(cursor);
            cursor = week_of(cursor.start + Duration::days(7));
        }
        weeks
    }

    /// The first day of every calendar month touched by the range
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let mut cursor = first_of_month(self.start);
        while cursor <= self.end {
            months.push(cursor);
            match cursor.checked_add_months(Months::new(1)) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        months
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_month) => next_month - Duration::days(1),
        None => date,
    }
}

/// First day of the month `months` calendar months before the one
/// containing `date`
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(months)).unwrap_or(first)
}

/// The Sunday-aligned calendar week containing `date`
pub fn week_of(date: NaiveDate) -> DateRange {
    let week = date.week(Weekday::Sun);
    DateRange::new(week.first_day(), week.last_day())
}

/// Stable `YYYY-MM` grouping key; lexical order matches chronological
/// order by construction
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_falls_back_to_month() {
        assert_eq!(ReportPeriod::parse("week"), ReportPeriod::Week);
        assert_eq!(ReportPeriod::parse("Quarter"), ReportPeriod::Quarter);
        assert_eq!(ReportPeriod::parse("year"), ReportPeriod::Year);
        assert_eq!(ReportPeriod::parse("month"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::parse("fortnight"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::parse(""), ReportPeriod::Month);
    }

    #[test]
    fn test_week_range_is_sunday_aligned() {
        // 2025-01-15 is a Wednesday; its week runs Sun 12th to Sat 18th
        let range = ReportPeriod::Week.range(date(2025, 1, 15));
        assert_eq!(range.start, date(2025, 1, 12));
        assert_eq!(range.end, date(2025, 1, 18));
        assert_eq!(range.start.weekday(), Weekday::Sun);
        assert_eq!(range.end.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_month_range() {
        let range = ReportPeriod::Month.range(date(2025, 2, 14));
        assert_eq!(range.start, date(2025, 2, 1));
        assert_eq!(range.end, date(2025, 2, 28));

        let leap = ReportPeriod::Month.range(date(2024, 2, 14));
        assert_eq!(leap.end, date(2024, 2, 29));
    }

    #[test]
    fn test_quarter_is_trailing_three_month_window() {
        let range = ReportPeriod::Quarter.range(date(2025, 5, 20));
        assert_eq!(range.start, date(2025, 3, 1));
        assert_eq!(range.end, date(2025, 5, 31));

        // Crosses a year boundary
        let range = ReportPeriod::Quarter.range(date(2025, 1, 10));
        assert_eq!(range.start, date(2024, 11, 1));
        assert_eq!(range.end, date(2025, 1, 31));
    }

    #[test]
    fn test_year_range() {
        let range = ReportPeriod::Year.range(date(2025, 6, 15));
        assert_eq!(range.start, date(2025, 1, 1));
        assert_eq!(range.end, date(2025, 12, 31));
    }

    #[test]
    fn test_previous_ranges() {
        let week = ReportPeriod::Week.previous_range(date(2025, 1, 15));
        assert_eq!(week.start, date(2025, 1, 5));
        assert_eq!(week.end, date(2025, 1, 11));

        let month = ReportPeriod::Month.previous_range(date(2025, 3, 15));
        assert_eq!(month.start, date(2025, 2, 1));
        assert_eq!(month.end, date(2025, 2, 28));

        let quarter = ReportPeriod::Quarter.previous_range(date(2025, 5, 20));
        assert_eq!(quarter.start, date(2024, 12, 1));
        assert_eq!(quarter.end, date(2025, 2, 28));

        let year = ReportPeriod::Year.previous_range(date(2025, 6, 15));
        assert_eq!(year.start, date(2024, 1, 1));
        assert_eq!(year.end, date(2024, 12, 31));
    }

    #[test]
    fn test_days_enumeration_is_inclusive() {
        let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
        let days = range.days();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2025, 1, 30));
        assert_eq!(days[3], date(2025, 2, 2));
    }

    #[test]
    fn test_weeks_enumeration_covers_partial_weeks() {
        // Jan 10 falls in the week of Jan 5-11, Jan 12 starts a new week
        let range = DateRange::new(date(2025, 1, 10), date(2025, 1, 12));
        let weeks = range.weeks();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].start, date(2025, 1, 5));
        assert_eq!(weeks[0].end, date(2025, 1, 11));
        assert_eq!(weeks[1].start, date(2025, 1, 12));
        assert_eq!(weeks[1].end, date(2025, 1, 18));
    }

    #[test]
    fn test_months_enumeration() {
        let range = DateRange::new(date(2024, 11, 15), date(2025, 2, 3));
        let months = range.months();
        assert_eq!(
            months,
            vec![
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1),
                date(2025, 2, 1),
            ]
        );
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 1, 31)));
        assert!(!range.contains(date(2025, 2, 1)));
        assert!(!range.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_month_key_sorts_lexically() {
        let keys = vec![
            month_key(date(2024, 12, 25)),
            month_key(date(2025, 1, 3)),
            month_key(date(2025, 10, 3)),
            month_key(date(2025, 2, 3)),
        ];
        assert_eq!(keys[0], "2024-12");

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["2024-12", "2025-01", "2025-02", "2025-10"]);
    }

    #[test]
    fn test_serialization() {
        let period = ReportPeriod::Quarter;
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"quarter\"");

        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));
        let json = serde_json::to_string(&range).unwrap();
        let deserialized: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, deserialized);
    }
}
