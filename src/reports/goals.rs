//! Goal progress report
//!
//! Scores actual spending and saving against the user's allocation
//! targets: per-bucket progress classification, generated insights, and
//! the 0-100 financial-health score.
//!
//! Needs and wants are spend-down buckets (staying under target is
//! good); the rest are accumulation buckets (reaching target is good).
//! Savings is computed residually from income minus expenses. The other
//! accumulation buckets have no record-level tracking of transfers yet,
//! so their actual amounts are always zero.

use log::debug;
use std::collections::HashMap;

use super::safe_ratio;
use super::spending::{total_expenses, total_income};
use crate::config::GoalBucketMap;
use crate::models::{
    ExpenseRecord, GoalAllocation, GoalCategory, GoalInsight, GoalProgress, GoalStatus,
    GoalsAnalytics, IncomeRecord, InsightKind, Money,
};

/// Spend-down: below this fraction of target counts as ahead
const SPEND_DOWN_AHEAD_FACTOR: f64 = 0.8;
/// Accumulation: at or above this fraction of target counts as on track
const ACCUMULATION_ON_TRACK_FACTOR: f64 = 0.9;
/// Accumulation: at or above this fraction of target counts as ahead
const ACCUMULATION_AHEAD_FACTOR: f64 = 1.1;
/// Score penalty per percentage point over a spend-down target
const OVERSPEND_PENALTY_PER_POINT: f64 = 5.0;
/// Share of non-behind buckets that earns the encouraging tip
const ENCOURAGEMENT_SHARE: f64 = 0.7;

/// Compute per-bucket progress against an allocation set
pub fn compute_progress(
    allocations: &[GoalAllocation],
    expenses: &[ExpenseRecord],
    income: &[IncomeRecord],
    map: &GoalBucketMap,
) -> Vec<GoalProgress> {
    let income_total = total_income(income);
    let expense_total = total_expenses(expenses);

    let mut spent_by_bucket: HashMap<GoalCategory, Money> = HashMap::new();
    for expense in expenses {
        *spent_by_bucket
            .entry(map.classify(&expense.category))
            .or_insert(Money::zero()) += expense.amount;
    }

    // Whatever income survives the month counts as savings; a shortfall
    // counts as zero saved, not negative.
    let leftover = (income_total - expense_total).positive_or_zero();

    allocations
        .iter()
        .map(|allocation| {
            let target_amount = Money::from_cents(
                (income_total.as_f64() * allocation.target_percentage / 100.0).round() as i64,
            );
            let actual_amount = match allocation.category {
                GoalCategory::Savings => leftover,
                bucket if bucket.is_spend_down() => {
                    spent_by_bucket.get(&bucket).copied().unwrap_or_default()
                }
                _ => Money::zero(),
            };
            let actual_percentage =
                safe_ratio(actual_amount.as_f64(), income_total.as_f64(), 0.0) * 100.0;

            GoalProgress {
                category: allocation.category,
                target_percentage: allocation.target_percentage,
                actual_percentage,
                target_amount,
                actual_amount,
                difference: actual_amount - target_amount,
                status: classify_status(allocation.category, actual_amount, target_amount),
            }
        })
        .collect()
}

fn classify_status(bucket: GoalCategory, actual: Money, target: Money) -> GoalStatus {
    let actual_cents = actual.as_f64();
    let target_cents = target.as_f64();

    if bucket.is_spend_down() {
        if actual_cents < target_cents * SPEND_DOWN_AHEAD_FACTOR {
            GoalStatus::Ahead
        } else if actual <= target {
            GoalStatus::OnTrack
        } else {
            GoalStatus::Behind
        }
    } else if actual_cents >= target_cents * ACCUMULATION_AHEAD_FACTOR {
        GoalStatus::Ahead
    } else if actual_cents >= target_cents * ACCUMULATION_ON_TRACK_FACTOR {
        GoalStatus::OnTrack
    } else {
        GoalStatus::Behind
    }
}

/// Generate dashboard insights from a progress set
///
/// Behind buckets produce warnings (overspend phrasing for spend-down
/// buckets, shortfall phrasing for accumulation buckets), ahead buckets
/// produce successes, and one aggregate message closes the list when
/// enough buckets are healthy.
pub fn generate_insights(progress: &[GoalProgress]) -> Vec<GoalInsight> {
    if progress.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::new();
    for entry in progress {
        match entry.status {
            GoalStatus::Behind if entry.category.is_spend_down() => {
                let over = entry.actual_amount - entry.target_amount;
                insights.push(GoalInsight {
                    kind: InsightKind::Warning,
                    category: Some(entry.category),
                    message: format!(
                        "You are overspending on {} by {}",
                        entry.category.display_name(),
                        over
                    ),
                    action: Some(format!(
                        "Review recent {} expenses",
                        entry.category.display_name().to_lowercase()
                    )),
                });
            }
            GoalStatus::Behind => {
                insights.push(GoalInsight {
                    kind: InsightKind::Warning,
                    category: Some(entry.category),
                    message: format!(
                        "{} is {:.1}% below your {:.0}% target",
                        entry.category.display_name(),
                        entry.target_percentage - entry.actual_percentage,
                        entry.target_percentage
                    ),
                    action: Some("Set aside more toward this goal".into()),
                });
            }
            GoalStatus::Ahead if entry.category.is_spend_down() => {
                insights.push(GoalInsight {
                    kind: InsightKind::Success,
                    category: Some(entry.category),
                    message: format!(
                        "Nice work keeping {} well under budget",
                        entry.category.display_name()
                    ),
                    action: None,
                });
            }
            GoalStatus::Ahead => {
                insights.push(GoalInsight {
                    kind: InsightKind::Success,
                    category: Some(entry.category),
                    message: format!("{} is ahead of target", entry.category.display_name()),
                    action: None,
                });
            }
            GoalStatus::OnTrack => {}
        }
    }

    let healthy = progress
        .iter()
        .filter(|p| p.status != GoalStatus::Behind)
        .count();
    if healthy == progress.len() {
        insights.push(GoalInsight {
            kind: InsightKind::Success,
            category: None,
            message: "All your budget goals are on track. Keep it up!".into(),
            action: None,
        });
    } else if healthy as f64 / progress.len() as f64 >= ENCOURAGEMENT_SHARE {
        insights.push(GoalInsight {
            kind: InsightKind::Tip,
            category: None,
            message: "Most of your goals are on track. A small adjustment would get the rest there."
                .into(),
            action: None,
        });
    }

    insights
}

/// Aggregate health score, 0-100
///
/// Per-bucket scores are averaged with equal weight and rounded to the
/// nearest integer. An empty progress list scores 0.
pub fn overall_score(progress: &[GoalProgress]) -> u8 {
    if progress.is_empty() {
        return 0;
    }

    let total: f64 = progress.iter().map(bucket_score).sum();
    (total / progress.len() as f64).round() as u8
}

fn bucket_score(entry: &GoalProgress) -> f64 {
    if entry.category.is_spend_down() {
        if entry.actual_amount <= entry.target_amount {
            100.0
        } else {
            let over_points = entry.actual_percentage - entry.target_percentage;
            (100.0 - over_points * OVERSPEND_PENALTY_PER_POINT).max(0.0)
        }
    } else {
        // Ratio of actual to target share; a zero target counts as met
        (safe_ratio(entry.actual_percentage, entry.target_percentage, 1.0) * 100.0).min(100.0)
    }
}

impl GoalsAnalytics {
    /// Assemble the full goals report for one computation pass
    pub fn generate(
        allocations: &[GoalAllocation],
        expenses: &[ExpenseRecord],
        income: &[IncomeRecord],
        map: &GoalBucketMap,
    ) -> Self {
        let progress = compute_progress(allocations, expenses, income, map);
        let total_allocated: Money = progress.iter().map(|p| p.target_amount).sum();
        let score = overall_score(&progress);
        let insights = generate_insights(&progress);

        debug!(
            "goals report: score {} across {} buckets",
            score,
            progress.len()
        );

        Self {
            total_income: total_income(income),
            total_allocated,
            overall_score: score,
            // Historical comparison is not implemented yet
            trend: 0.0,
            insights,
            progress,
        }
    }
}
