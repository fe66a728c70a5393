//! Spending time series
//!
//! Monthly totals, weekly trend with a cumulative running average, and
//! the daily-intensity heatmap series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::config::{Intensity, IntensityThresholds};
use crate::models::period::first_of_month;
use crate::models::{DateRange, ExpenseRecord, Money};

/// One calendar month of spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    /// Calendar month index, 1-12
    pub month: u32,
    /// Display label ("January", "February", ...)
    pub label: String,
    pub total: Money,
    pub count: usize,
}

/// One Sunday-aligned week within a trend window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    /// 1-based position within the window
    pub week: usize,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub amount: Money,
    /// Cumulative mean of week amounts through this week, in minor
    /// units (not a rolling window)
    pub running_average: f64,
}

/// One day in the spending heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySpendingPoint {
    pub date: NaiveDate,
    pub amount: Money,
    pub intensity: Intensity,
}

/// Group all expenses by calendar month, sorted chronologically
///
/// Sorting uses the numeric (year, month) key, never the formatted
/// label; "April" sorting before "February" is exactly the bug this
/// avoids.
pub fn monthly_totals(expenses: &[ExpenseRecord]) -> Vec<MonthlyTotal> {
    let mut by_month: HashMap<NaiveDate, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = by_month
            .entry(first_of_month(expense.date))
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut months: Vec<NaiveDate> = by_month.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| {
            let (total, count) = by_month[&month];
            MonthlyTotal {
                year: month.year(),
                month: month.month(),
                label: month.format("%B").to_string(),
                total,
                count,
            }
        })
        .collect()
}

/// Weekly spending across [start, end] with a cumulative running average
///
/// Enumerates every Sunday-aligned week overlapping the window. A
/// week's amount covers its full calendar span, including days that
/// fall just outside the requested window.
pub fn weekly_trend(
    expenses: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeeklyTrendPoint> {
    let mut points = Vec::new();
    let mut cumulative = Money::zero();

    for (index, week) in DateRange::new(start, end).weeks().into_iter().enumerate() {
        let amount: Money = expenses
            .iter()
            .filter(|e| week.contains(e.date))
            .map(|e| e.amount)
            .sum();
        cumulative += amount;

        points.push(WeeklyTrendPoint {
            week: index + 1,
            week_start: week.start,
            week_end: week.end,
            amount,
            running_average: cumulative.as_f64() / (index + 1) as f64,
        });
    }

    points
}

/// Per-day spending across [start, end], classified for the heatmap
///
/// Produces exactly one entry per calendar day, zero days included.
pub fn daily_spending(
    expenses: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
    thresholds: &IntensityThresholds,
) -> Vec<DailySpendingPoint> {
    let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
    for expense in expenses {
        *by_day.entry(expense.date).or_insert(Money::zero()) += expense.amount;
    }

    DateRange::new(start, end)
        .days()
        .into_iter()
        .map(|date| {
            let amount = by_day.get(&date).copied().unwrap_or_default();
            DailySpendingPoint {
                date,
                amount,
                intensity: thresholds.classify(amount),
            }
        })
        .collect()
}
