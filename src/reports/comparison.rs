//! Period comparisons
//!
//! The fixed six-month income-versus-expenses chart series and
//! month-over-month spending change.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::spending::{expenses_in_range, income_in_range, total_expenses, total_income};
use super::{percentage_change, safe_ratio};
use crate::models::period::months_before;
use crate::models::{ExpenseRecord, IncomeRecord, Money, ReportPeriod};

/// How many trailing months the income-versus-expenses chart covers
const COMPARISON_MONTHS: u32 = 6;

/// One calendar month in the income-versus-expenses chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    /// Display label, e.g. "Mar 2025"
    pub label: String,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    /// Net as a share of the month's income; 0 when income is 0
    pub savings_rate: f64,
}

/// Income against expenses for the six calendar months ending at the
/// reference month
///
/// Always returns exactly six entries, zero-filled for months with no
/// activity. The fixed window is a charting contract; it deliberately
/// ignores whatever range the caller used elsewhere.
pub fn income_vs_expenses(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    reference: NaiveDate,
) -> Vec<MonthlyComparison> {
    (0..COMPARISON_MONTHS)
        .rev()
        .map(|offset| {
            let month_start = months_before(reference, offset);
            let range = ReportPeriod::Month.range(month_start);

            let month_income = total_income(&income_in_range(income, &range));
            let month_expenses = total_expenses(&expenses_in_range(expenses, &range));
            let net = month_income - month_expenses;

            MonthlyComparison {
                label: month_start.format("%b %Y").to_string(),
                income: month_income,
                expenses: month_expenses,
                net,
                savings_rate: safe_ratio(net.as_f64(), month_income.as_f64(), 0.0) * 100.0,
            }
        })
        .collect()
}

/// Percentage change in spending between the reference month and the
/// month before it
///
/// A previous month with no spending reports 100 when anything was
/// spent this month and 0 otherwise.
pub fn month_over_month_change(expenses: &[ExpenseRecord], reference: NaiveDate) -> f64 {
    let current_range = ReportPeriod::Month.range(reference);
    let previous_range = ReportPeriod::Month.previous_range(reference);

    let current = total_expenses(&expenses_in_range(expenses, &current_range));
    let previous = total_expenses(&expenses_in_range(expenses, &previous_range));

    percentage_change(current, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: &str, cents: i64, on: NaiveDate) -> ExpenseRecord {
        ExpenseRecord::new(id, Money::from_cents(cents), "groceries", on)
    }

    fn income_record(id: &str, cents: i64, on: NaiveDate) -> IncomeRecord {
        IncomeRecord::new(id, Money::from_cents(cents), "salary", on)
    }

    #[test]
    fn test_always_six_entries_even_with_no_records() {
        let series = income_vs_expenses(&[], &[], date(2025, 6, 15));
        assert_eq!(series.len(), 6);

        assert_eq!(series[0].label, "Jan 2025");
        assert_eq!(series[5].label, "Jun 2025");

        for entry in &series {
            assert_eq!(entry.income, Money::zero());
            assert_eq!(entry.expenses, Money::zero());
            assert_eq!(entry.net, Money::zero());
            assert_eq!(entry.savings_rate, 0.0);
        }
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let series = income_vs_expenses(&[], &[], date(2025, 2, 10));
        assert_eq!(series[0].label, "Sep 2024");
        assert_eq!(series[5].label, "Feb 2025");
    }

    #[test]
    fn test_sparse_months_are_zero_filled() {
        let income = vec![income_record("i1", 200_000, date(2025, 4, 1))];
        let expenses = vec![
            expense("e1", 50_000, date(2025, 4, 12)),
            // Outside the window entirely
            expense("e2", 99_000, date(2024, 11, 1)),
        ];

        let series = income_vs_expenses(&income, &expenses, date(2025, 6, 15));
        assert_eq!(series.len(), 6);

        let april = &series[3];
        assert_eq!(april.label, "Apr 2025");
        assert_eq!(april.income.cents(), 200_000);
        assert_eq!(april.expenses.cents(), 50_000);
        assert_eq!(april.net.cents(), 150_000);
        assert_eq!(april.savings_rate, 75.0);

        let may = &series[4];
        assert_eq!(may.income, Money::zero());
        assert_eq!(may.savings_rate, 0.0);
    }

    #[test]
    fn test_month_over_month_change() {
        let reference = date(2025, 3, 20);

        // previous=1000, current=1500 -> 50
        let expenses = vec![
            expense("e1", 1_000, date(2025, 2, 10)),
            expense("e2", 1_500, date(2025, 3, 5)),
        ];
        assert_eq!(month_over_month_change(&expenses, reference), 50.0);

        // previous=0, current=500 -> 100
        let expenses = vec![expense("e1", 500, date(2025, 3, 5))];
        assert_eq!(month_over_month_change(&expenses, reference), 100.0);

        // previous=0, current=0 -> 0
        assert_eq!(month_over_month_change(&[], reference), 0.0);

        // Spending shrank
        let expenses = vec![
            expense("e1", 2_000, date(2025, 2, 10)),
            expense("e2", 1_000, date(2025, 3, 5)),
        ];
        assert_eq!(month_over_month_change(&expenses, reference), -50.0);
    }
}
