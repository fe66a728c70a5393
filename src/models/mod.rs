//! Core data models for finsight-core
//!
//! This module contains the data structures the analytics core reads
//! and produces: money, expense/income records, categories, goals, and
//! reporting periods.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;

pub use category::{
    BuiltinCategory, CategoryKind, CategoryValidationError, CustomCategory, UnifiedCategory,
};
pub use expense::ExpenseRecord;
pub use goal::{
    AllocationValidationError, GoalAllocation, GoalCategory, GoalInsight, GoalProgress,
    GoalStatus, GoalsAnalytics, InsightKind,
};
pub use ids::{CategoryId, ExpenseId, IncomeId, IncomeTypeId};
pub use income::IncomeRecord;
pub use money::Money;
pub use period::{DateRange, ReportPeriod};
