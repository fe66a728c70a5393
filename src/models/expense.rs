//! Expense record model
//!
//! Represents a single spending entry as loaded from the storage
//! collaborator. Records are immutable inputs for a computation pass:
//! the core reads them, never writes them back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A single spending entry
///
/// `amount` is non-negative; negative entries are rejected upstream by
/// the data-entry layer before records reach this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned by the storage layer
    pub id: ExpenseId,

    /// Amount spent, in minor currency units
    pub amount: Money,

    /// The category this expense belongs to (built-in or custom)
    pub category: CategoryId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Whether this expense repeats on a schedule
    #[serde(default)]
    pub is_recurring: bool,

    /// Free-form labels attached by the user
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        id: impl Into<ExpenseId>,
        amount: Money,
        category: impl Into<CategoryId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            date,
            is_recurring: false,
            tags: Vec::new(),
        }
    }

    /// Mark this expense as recurring
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Attach tags to this expense
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
