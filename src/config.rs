//! Injectable configuration for the analytics core
//!
//! Classification rules and display catalogs are supplied as data
//! rather than inlined in the algorithms, so they stay independently
//! testable and adjustable: the spending-intensity thresholds, the
//! expense-category to goal-bucket classification table, the default
//! allocation split, and the built-in category catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{
    BuiltinCategory, CategoryId, CategoryKind, GoalAllocation, GoalCategory, Money,
};

/// Heatmap intensity level for one day of spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Light,
    Moderate,
    Heavy,
    Extreme,
}

impl Intensity {
    /// Numeric level 0-4, the contract consumed by the heatmap chart
    pub fn level(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Light => 1,
            Self::Moderate => 2,
            Self::Heavy => 3,
            Self::Extreme => 4,
        }
    }
}

/// Daily-spending thresholds for the intensity heatmap, in minor units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityThresholds {
    /// Below this a day counts as light spending
    pub light: Money,
    /// Below this a day counts as moderate spending
    pub moderate: Money,
    /// Below this a day counts as heavy spending; at or above, extreme
    pub heavy: Money,
}

impl Default for IntensityThresholds {
    fn default() -> Self {
        Self {
            light: Money::from_cents(5_000),
            moderate: Money::from_cents(10_000),
            heavy: Money::from_cents(20_000),
        }
    }
}

impl IntensityThresholds {
    /// Classify one day's total spending
    pub fn classify(&self, amount: Money) -> Intensity {
        if amount.is_zero() {
            Intensity::None
        } else if amount < self.light {
            Intensity::Light
        } else if amount < self.moderate {
            Intensity::Moderate
        } else if amount < self.heavy {
            Intensity::Heavy
        } else {
            Intensity::Extreme
        }
    }
}

/// Many-to-one classification of expense categories into goal buckets
///
/// Categories missing from the table (including all custom categories,
/// unless the table is extended) classify into the fallback bucket:
/// unmapped spending is treated as discretionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalBucketMap {
    entries: HashMap<CategoryId, GoalCategory>,
    fallback: GoalCategory,
}

impl GoalBucketMap {
    /// Build a classification table with an explicit fallback bucket
    pub fn new(entries: HashMap<CategoryId, GoalCategory>, fallback: GoalCategory) -> Self {
        Self { entries, fallback }
    }

    /// Classify an expense category into its goal bucket
    pub fn classify(&self, category: &CategoryId) -> GoalCategory {
        self.entries.get(category).copied().unwrap_or(self.fallback)
    }

    /// Add or replace a classification entry
    pub fn insert(&mut self, category: CategoryId, bucket: GoalCategory) {
        self.entries.insert(category, bucket);
    }

    /// The fallback bucket for unmapped categories
    pub fn fallback(&self) -> GoalCategory {
        self.fallback
    }
}

impl Default for GoalBucketMap {
    fn default() -> Self {
        let mut entries = HashMap::new();
        for id in ["rent", "electricity", "gas", "wifi", "groceries"] {
            entries.insert(CategoryId::from(id), GoalCategory::Needs);
        }
        for id in ["amazon", "eating_out", "miscellaneous"] {
            entries.insert(CategoryId::from(id), GoalCategory::Wants);
        }
        Self::new(entries, GoalCategory::Wants)
    }
}

/// The default allocation plan: 50/20/15/10/5 across needs, wants,
/// savings, investments, and emergency fund, with no debt-repayment
/// target until the user sets one
pub fn default_allocations() -> Vec<GoalAllocation> {
    vec![
        GoalAllocation::new(GoalCategory::Needs, 50.0),
        GoalAllocation::new(GoalCategory::Wants, 20.0),
        GoalAllocation::new(GoalCategory::Savings, 15.0),
        GoalAllocation::new(GoalCategory::Investments, 10.0),
        GoalAllocation::new(GoalCategory::EmergencyFund, 5.0),
        GoalAllocation::new(GoalCategory::DebtRepayment, 0.0),
    ]
}

/// The built-in category catalog
///
/// Injected into `CategoryRegistry` at construction; tests may supply
/// an alternate catalog.
pub fn default_catalog() -> Vec<BuiltinCategory> {
    vec![
        BuiltinCategory::new("rent", "Rent", "home", "#ef4444", CategoryKind::Fixed, 0),
        BuiltinCategory::new(
            "electricity",
            "Electricity",
            "zap",
            "#f59e0b",
            CategoryKind::Fixed,
            1,
        ),
        BuiltinCategory::new("gas", "Gas", "flame", "#f97316", CategoryKind::Fixed, 2),
        BuiltinCategory::new("wifi", "Wifi", "wifi", "#06b6d4", CategoryKind::Fixed, 3),
        BuiltinCategory::new(
            "groceries",
            "Groceries",
            "shopping-cart",
            "#22c55e",
            CategoryKind::Variable,
            4,
        ),
        BuiltinCategory::new(
            "amazon",
            "Amazon",
            "package",
            "#8b5cf6",
            CategoryKind::Variable,
            5,
        ),
        BuiltinCategory::new(
            "eating_out",
            "Eating Out",
            "utensils",
            "#ec4899",
            CategoryKind::Variable,
            6,
        ),
        BuiltinCategory::new(
            "miscellaneous",
            "Miscellaneous",
            "more-horizontal",
            "#6b7280",
            CategoryKind::Variable,
            7,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_thresholds() {
        let thresholds = IntensityThresholds::default();

        assert_eq!(thresholds.classify(Money::zero()), Intensity::None);
        assert_eq!(thresholds.classify(Money::from_cents(1)), Intensity::Light);
        assert_eq!(
            thresholds.classify(Money::from_cents(4_999)),
            Intensity::Light
        );
        assert_eq!(
            thresholds.classify(Money::from_cents(5_000)),
            Intensity::Moderate
        );
        assert_eq!(
            thresholds.classify(Money::from_cents(9_999)),
            Intensity::Moderate
        );
        assert_eq!(
            thresholds.classify(Money::from_cents(10_000)),
            Intensity::Heavy
        );
        assert_eq!(
            thresholds.classify(Money::from_cents(19_999)),
            Intensity::Heavy
        );
        assert_eq!(
            thresholds.classify(Money::from_cents(20_000)),
            Intensity::Extreme
        );
    }

    #[test]
    fn test_intensity_levels() {
        assert_eq!(Intensity::None.level(), 0);
        assert_eq!(Intensity::Extreme.level(), 4);
    }

    #[test]
    fn test_default_bucket_map() {
        let map = GoalBucketMap::default();

        assert_eq!(map.classify(&CategoryId::from("rent")), GoalCategory::Needs);
        assert_eq!(
            map.classify(&CategoryId::from("groceries")),
            GoalCategory::Needs
        );
        assert_eq!(
            map.classify(&CategoryId::from("eating_out")),
            GoalCategory::Wants
        );
        // Unmapped and custom categories fall back to discretionary
        assert_eq!(
            map.classify(&CategoryId::from("custom-abc123")),
            GoalCategory::Wants
        );
    }

    #[test]
    fn test_bucket_map_extension() {
        let mut map = GoalBucketMap::default();
        map.insert(CategoryId::from("brokerage"), GoalCategory::Investments);
        assert_eq!(
            map.classify(&CategoryId::from("brokerage")),
            GoalCategory::Investments
        );
    }

    #[test]
    fn test_default_allocations() {
        let allocations = default_allocations();
        assert_eq!(allocations.len(), 6);

        let total: f64 = allocations.iter().map(|a| a.target_percentage).sum();
        assert_eq!(total, 100.0);

        for allocation in &allocations {
            assert!(allocation.validate().is_ok());
        }
    }

    #[test]
    fn test_default_catalog_ids_are_unique_and_ordered() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);

        let mut ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());

        for (i, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.order, i as i32);
        }
    }
}
