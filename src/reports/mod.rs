//! Derived reports for finsight-core
//!
//! Pure, synchronous computation over already-loaded records: spending
//! aggregation, time-series trends, period comparisons, and goal
//! progress scoring. Every function here is referentially transparent,
//! so callers are free to memoize on input identity and re-run on every
//! render.

pub mod comparison;
pub mod goals;
pub mod spending;
pub mod trends;

pub use comparison::{income_vs_expenses, month_over_month_change, MonthlyComparison};
pub use goals::{compute_progress, generate_insights, overall_score};
pub use spending::{
    category_breakdown, net_amount, savings_rate, top_category, total_expenses, total_income,
    CategoryBreakdownEntry,
};
pub use trends::{
    daily_spending, monthly_totals, weekly_trend, DailySpendingPoint, MonthlyTotal,
    WeeklyTrendPoint,
};

use crate::models::Money;

/// Ratio with an explicit zero-denominator policy
///
/// Every divide-by-zero site in the crate routes through here so the
/// edge-case behavior stays consistent and testable in one place:
/// savings rate and actual percentages use 0, the goal-score ratio
/// uses 1.
pub fn safe_ratio(numerator: f64, denominator: f64, zero_denominator_result: f64) -> f64 {
    if denominator == 0.0 {
        zero_denominator_result
    } else {
        numerator / denominator
    }
}

/// Percentage change from `previous` to `current`
///
/// When `previous` is zero the change is reported as 100 if anything
/// was spent and 0 otherwise, rather than blowing up or claiming
/// infinite growth.
pub fn percentage_change(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return if current.is_positive() { 100.0 } else { 0.0 };
    }
    safe_ratio(
        (current - previous).as_f64(),
        previous.as_f64(),
        0.0,
    ) * 100.0
}
