//! Allocation plan lifecycle
//!
//! Holds the user's target allocation set. The plan starts from the
//! standard split on first access, is replaced wholesale on save, and
//! can be reset back to the defaults. Percentages are validated
//! individually; the plan deliberately does not require them to sum
//! to 100.

use log::debug;

use crate::config::default_allocations;
use crate::error::{FinsightError, FinsightResult};
use crate::models::GoalAllocation;

/// The user's current set of budget-allocation targets
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationPlan {
    allocations: Vec<GoalAllocation>,
}

impl AllocationPlan {
    /// Create a plan holding the default split
    pub fn new() -> Self {
        Self {
            allocations: default_allocations(),
        }
    }

    /// The current allocations
    pub fn allocations(&self) -> &[GoalAllocation] {
        &self.allocations
    }

    /// Replace the plan wholesale
    ///
    /// Every target percentage must be within 0..=100. On any invalid
    /// entry the existing plan is left untouched.
    pub fn replace(&mut self, allocations: Vec<GoalAllocation>) -> FinsightResult<()> {
        for allocation in &allocations {
            allocation
                .validate()
                .map_err(|e| FinsightError::Validation(e.to_string()))?;
        }

        debug!("replacing allocation plan ({} targets)", allocations.len());
        self.allocations = allocations;
        Ok(())
    }

    /// Reset the plan back to the default split
    pub fn reset(&mut self) {
        debug!("resetting allocation plan to defaults");
        self.allocations = default_allocations();
    }
}

impl Default for AllocationPlan {
    fn default() -> Self {
        Self::new()
    }
}
