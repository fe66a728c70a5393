//! Income record model
//!
//! Represents a single income entry as loaded from the storage
//! collaborator. Like expenses, these are read-only inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{IncomeId, IncomeTypeId};
use super::money::Money;

/// A single income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// Unique identifier, assigned by the storage layer
    pub id: IncomeId,

    /// Amount received, in minor currency units; non-negative
    pub amount: Money,

    /// The kind of income (salary, freelance, gift, ...); open-ended
    /// because income types are user-configurable
    pub income_type: IncomeTypeId,

    /// Calendar date the income was received
    pub date: NaiveDate,

    /// Whether this income arrives on a regular schedule
    #[serde(default)]
    pub is_regular: bool,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(
        id: impl Into<IncomeId>,
        amount: Money,
        income_type: impl Into<IncomeTypeId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            income_type: income_type.into(),
            date,
            is_regular: false,
        }
    }

    /// Mark this income as regular (e.g. a salary)
    pub fn regular(mut self) -> Self {
        self.is_regular = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
        let income = IncomeRecord::new("i1", Money::from_cents(350000), "salary", date).regular();

        assert_eq!(income.amount.cents(), 350000);
        assert_eq!(income.income_type.as_str(), "salary");
        assert!(income.is_regular);
    }

    #[test]
    fn test_serialization_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let income = IncomeRecord::new("i2", Money::from_cents(12000), "freelance", date);

        let json = serde_json::to_string(&income).unwrap();
        let deserialized: IncomeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(income, deserialized);
    }
}
