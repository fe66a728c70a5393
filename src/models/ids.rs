//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from
//! different entity types at compile time. Unlike locally-minted UUIDs,
//! these wrap open strings: records and categories originate in an
//! external document store, and custom category ids must remain
//! resolvable for as long as historical records reference them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_string_id!(ExpenseId);
define_string_id!(IncomeId);
define_string_id!(CategoryId);
define_string_id!(IncomeTypeId);

impl CategoryId {
    /// Prefix carried by every user-created category id
    pub const CUSTOM_PREFIX: &'static str = "custom-";

    /// Mint a fresh id for a user-created category
    pub fn custom() -> Self {
        Self(format!("{}{}", Self::CUSTOM_PREFIX, Uuid::new_v4()))
    }

    /// Check whether this id belongs to a user-created category
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(Self::CUSTOM_PREFIX)
    }
}
