//! finsight-core - Analytics and goal-scoring core for the Finsight
//! personal finance tracker
//!
//! The surrounding application handles storage, authentication, and
//! rendering; this crate is the pure computation layer between them. It
//! consumes already-loaded expense and income records plus category and
//! goal configuration, and produces the derived structures the
//! dashboards render: category breakdowns, trend series, period
//! comparisons, and the scored goals report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: injectable configuration data (catalog, thresholds,
//!   classification table, default allocations)
//! - `error`: custom error types
//! - `models`: core data models (money, records, categories, goals,
//!   periods)
//! - `services`: stateful business logic (category registry, allocation
//!   plan)
//! - `reports`: pure derived reports (spending, trends, comparisons,
//!   goals)
//!
//! Every report function is deterministic for equal inputs; "now" is
//! always a caller-supplied reference date, never read from the clock.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use finsight_core::models::{ExpenseRecord, Money};
//! use finsight_core::reports::category_breakdown;
//!
//! let expenses = vec![
//!     ExpenseRecord::new(
//!         "e1",
//!         Money::from_cents(15_000),
//!         "groceries",
//!         NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
//!     ),
//!     ExpenseRecord::new(
//!         "e2",
//!         Money::from_cents(90_000),
//!         "rent",
//!         NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     ),
//! ];
//!
//! let breakdown = category_breakdown(&expenses);
//! assert_eq!(breakdown[0].category.as_str(), "rent");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{FinsightError, FinsightResult};
