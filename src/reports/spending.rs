//! Spending aggregation
//!
//! Totals, net amount, savings rate, and per-category breakdowns over
//! expense and income records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::safe_ratio;
use crate::models::{CategoryId, DateRange, ExpenseRecord, IncomeRecord, Money};

/// Spending grouped under one category, with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownEntry {
    pub category: CategoryId,
    pub amount: Money,
    /// Share of total expenses, 0-100
    pub percentage: f64,
    /// Number of records in this category
    pub count: usize,
}

/// Sum of all expense amounts; zero for an empty list
pub fn total_expenses(expenses: &[ExpenseRecord]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of all income amounts; zero for an empty list
pub fn total_income(income: &[IncomeRecord]) -> Money {
    income.iter().map(|i| i.amount).sum()
}

/// Income minus expenses; negative when spending exceeds income
pub fn net_amount(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Money {
    total_income(income) - total_expenses(expenses)
}

/// Net amount as a share of income, 0-100 (may be negative)
///
/// Defined as 0 when there is no income, whatever was spent.
pub fn savings_rate(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> f64 {
    let income_total = total_income(income);
    let net = income_total - total_expenses(expenses);
    safe_ratio(net.as_f64(), income_total.as_f64(), 0.0) * 100.0
}

/// Group expenses by category, sorted by amount descending
///
/// Returns an empty list when total spending is zero, so no entry ever
/// carries an undefined percentage. Ties are broken by category id
/// ascending to keep the ordering deterministic.
pub fn category_breakdown(expenses: &[ExpenseRecord]) -> Vec<CategoryBreakdownEntry> {
    let total = total_expenses(expenses);
    if total.is_zero() {
        return Vec::new();
    }

    let mut by_category: HashMap<CategoryId, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = by_category
            .entry(expense.category.clone())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut entries: Vec<CategoryBreakdownEntry> = by_category
        .into_iter()
        .map(|(category, (amount, count))| CategoryBreakdownEntry {
            category,
            amount,
            percentage: safe_ratio(amount.as_f64(), total.as_f64(), 0.0) * 100.0,
            count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    entries
}

/// The category with the highest spending, if any spending exists
pub fn top_category(expenses: &[ExpenseRecord]) -> Option<CategoryBreakdownEntry> {
    category_breakdown(expenses).into_iter().next()
}

/// Restrict expenses to a date range before aggregating
pub fn expenses_in_range(expenses: &[ExpenseRecord], range: &DateRange) -> Vec<ExpenseRecord> {
    expenses
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}

/// Restrict income to a date range before aggregating
pub fn income_in_range(income: &[IncomeRecord], range: &DateRange) -> Vec<IncomeRecord> {
    income
        .iter()
        .filter(|i| range.contains(i.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: &str, cents: i64, category: &str, day: u32) -> ExpenseRecord {
        ExpenseRecord::new(id, Money::from_cents(cents), category, date(2025, 1, day))
    }

    fn income_record(id: &str, cents: i64, day: u32) -> IncomeRecord {
        IncomeRecord::new(id, Money::from_cents(cents), "salary", date(2025, 1, day))
    }

    #[test]
    fn test_totals_of_empty_lists_are_zero() {
        assert_eq!(total_expenses(&[]), Money::zero());
        assert_eq!(total_income(&[]), Money::zero());
        assert_eq!(net_amount(&[], &[]), Money::zero());
    }

    #[test]
    fn test_net_amount_may_be_negative() {
        let income = vec![income_record("i1", 100_000, 1)];
        let expenses = vec![expense("e1", 150_000, "rent", 2)];
        assert_eq!(net_amount(&income, &expenses), Money::from_cents(-50_000));
    }

    #[test]
    fn test_savings_rate() {
        let income = vec![income_record("i1", 200_000, 1)];
        let expenses = vec![expense("e1", 150_000, "rent", 2)];
        assert_eq!(savings_rate(&income, &expenses), 25.0);
    }

    #[test]
    fn test_savings_rate_is_zero_without_income() {
        let expenses = vec![expense("e1", 150_000, "rent", 2)];
        assert_eq!(savings_rate(&[], &expenses), 0.0);
    }

    #[test]
    fn test_category_breakdown_groups_and_sorts() {
        // rent 10000 + 5000, groceries 20000: groceries sorts first
        let expenses = vec![
            expense("e1", 10_000, "rent", 3),
            expense("e2", 20_000, "groceries", 5),
            expense("e3", 5_000, "rent", 9),
        ];

        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown.len(), 2);

        assert_eq!(breakdown[0].category.as_str(), "groceries");
        assert_eq!(breakdown[0].amount.cents(), 20_000);
        assert_eq!(breakdown[0].count, 1);
        assert!((breakdown[0].percentage - 57.142857).abs() < 1e-4);

        assert_eq!(breakdown[1].category.as_str(), "rent");
        assert_eq!(breakdown[1].amount.cents(), 15_000);
        assert_eq!(breakdown[1].count, 2);
        assert!((breakdown[1].percentage - 42.857142).abs() < 1e-4);

        let percentage_sum: f64 = breakdown.iter().map(|e| e.percentage).sum();
        assert!((percentage_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_breakdown_empty_when_no_spending() {
        assert!(category_breakdown(&[]).is_empty());

        // Zero-amount records sum to a zero total and also yield nothing
        let expenses = vec![expense("e1", 0, "rent", 3)];
        assert!(category_breakdown(&expenses).is_empty());
    }

    #[test]
    fn test_category_breakdown_tie_break_is_by_id() {
        let expenses = vec![
            expense("e1", 5_000, "wifi", 3),
            expense("e2", 5_000, "gas", 4),
        ];

        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown[0].category.as_str(), "gas");
        assert_eq!(breakdown[1].category.as_str(), "wifi");
    }

    #[test]
    fn test_top_category() {
        assert!(top_category(&[]).is_none());

        let expenses = vec![
            expense("e1", 10_000, "rent", 3),
            expense("e2", 20_000, "groceries", 5),
        ];
        let top = top_category(&expenses).unwrap();
        assert_eq!(top.category.as_str(), "groceries");
    }

    #[test]
    fn test_range_filters() {
        let expenses = vec![
            expense("e1", 1_000, "rent", 5),
            expense("e2", 2_000, "rent", 20),
        ];
        let income = vec![income_record("i1", 5_000, 5), income_record("i2", 6_000, 25)];

        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 15));
        let filtered = expenses_in_range(&expenses, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "e1");

        let filtered = income_in_range(&income, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(total_income(&filtered).cents(), 5_000);
    }
}
