//! Service layer for finsight-core
//!
//! Stateful business logic over in-memory collections: the category
//! registry and the allocation plan lifecycle. The report functions in
//! `reports` stay pure; anything that mutates or validates lives here.

pub mod category;
pub mod goals;

pub use category::CategoryRegistry;
pub use goals::AllocationPlan;
