//! Budget goal models
//!
//! Users allocate a percentage of income to each of six fixed buckets.
//! Expense categories are classified many-to-one into these buckets,
//! and the goals report scores actual behavior against the targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The six fixed budget-allocation buckets
///
/// Closed by design: the scoring rules depend on exhaustive matching
/// over these variants. Expense categories, by contrast, are an open
/// string namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Savings,
    Investments,
    Needs,
    Wants,
    DebtRepayment,
    EmergencyFund,
}

impl GoalCategory {
    /// All buckets, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Needs,
            Self::Wants,
            Self::Savings,
            Self::Investments,
            Self::EmergencyFund,
            Self::DebtRepayment,
        ]
    }

    /// Spend-down buckets reward staying under target
    pub fn is_spend_down(&self) -> bool {
        matches!(self, Self::Needs | Self::Wants)
    }

    /// Accumulation buckets reward reaching or exceeding target
    pub fn is_accumulation(&self) -> bool {
        !self.is_spend_down()
    }

    /// Display name for this bucket
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Investments => "Investments",
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::DebtRepayment => "Debt Repayment",
            Self::EmergencyFund => "Emergency Fund",
        }
    }

    /// Icon identifier for the UI
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Savings => "piggy-bank",
            Self::Investments => "trending-up",
            Self::Needs => "home",
            Self::Wants => "shopping-bag",
            Self::DebtRepayment => "credit-card",
            Self::EmergencyFund => "shield",
        }
    }

    /// Display color (hex) for the UI
    pub fn color(&self) -> &'static str {
        match self {
            Self::Savings => "#22c55e",
            Self::Investments => "#8b5cf6",
            Self::Needs => "#3b82f6",
            Self::Wants => "#f59e0b",
            Self::DebtRepayment => "#ef4444",
            Self::EmergencyFund => "#06b6d4",
        }
    }

    /// One-line description shown alongside the allocation slider
    pub fn description(&self) -> &'static str {
        match self {
            Self::Savings => "Money left over after spending",
            Self::Investments => "Contributions toward long-term growth",
            Self::Needs => "Essential living costs like housing and groceries",
            Self::Wants => "Discretionary spending and lifestyle",
            Self::DebtRepayment => "Payments beyond minimums toward debt",
            Self::EmergencyFund => "Cushion for unexpected expenses",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Progress classification for one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    Behind,
    Ahead,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on track"),
            Self::Behind => write!(f, "behind"),
            Self::Ahead => write!(f, "ahead"),
        }
    }
}

/// A user's target allocation for one bucket
///
/// A full plan holds one allocation per bucket. Percentages typically
/// sum to 100 but the core does not enforce that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAllocation {
    pub category: GoalCategory,

    /// Target share of income, 0-100
    pub target_percentage: f64,

    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: String,
}

impl GoalAllocation {
    /// Create an allocation with the bucket's standard display metadata
    pub fn new(category: GoalCategory, target_percentage: f64) -> Self {
        Self {
            category,
            target_percentage,
            name: category.display_name().to_string(),
            icon: category.icon().to_string(),
            color: category.color().to_string(),
            description: category.description().to_string(),
        }
    }

    /// Validate the target percentage
    pub fn validate(&self) -> Result<(), AllocationValidationError> {
        if !(0.0..=100.0).contains(&self.target_percentage) || self.target_percentage.is_nan() {
            return Err(AllocationValidationError::PercentageOutOfRange(
                self.target_percentage,
            ));
        }
        Ok(())
    }
}

/// Validation errors for goal allocations
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationValidationError {
    PercentageOutOfRange(f64),
}

impl fmt::Display for AllocationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentageOutOfRange(pct) => {
                write!(f, "Target percentage must be between 0 and 100, got {}", pct)
            }
        }
    }
}

impl std::error::Error for AllocationValidationError {}

/// Derived progress for one bucket in one computation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub category: GoalCategory,

    /// Target share of income, 0-100
    pub target_percentage: f64,

    /// Actual share of income, 0-100 (0 when income is 0)
    pub actual_percentage: f64,

    /// Income multiplied by the target percentage
    pub target_amount: Money,

    /// Amount attributed to this bucket
    pub actual_amount: Money,

    /// actual - target; negative when under target
    pub difference: Money,

    pub status: GoalStatus,
}

/// The tone of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Tip,
}

/// A generated textual insight for the goals dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInsight {
    pub kind: InsightKind,

    /// The bucket this insight refers to; aggregate insights carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GoalCategory>,

    pub message: String,

    /// Suggested next step, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Top-level goals report, recomputed on every relevant input change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsAnalytics {
    pub total_income: Money,

    /// Sum of all target amounts
    pub total_allocated: Money,

    pub progress: Vec<GoalProgress>,

    /// Weighted health score, 0-100
    pub overall_score: u8,

    /// Change versus the prior period. Historical comparison is not
    /// implemented yet; always reported as a flat 0.
    pub trend: f64,

    pub insights: Vec<GoalInsight>,
}
