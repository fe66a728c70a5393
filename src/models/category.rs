//! Category models
//!
//! Two namespaces of expense categories coexist: a fixed built-in
//! catalog (static configuration) and user-created custom categories.
//! Custom categories are soft-deletable: deletion hides them from
//! selection pickers but their ids stay resolvable so historical
//! records keep rendering correctly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Whether a category represents a fixed obligation or variable spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Recurring obligations with stable amounts (rent, utilities)
    Fixed,
    /// Discretionary or fluctuating spending
    #[default]
    Variable,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// A built-in catalog entry
///
/// The catalog is injected into the registry at construction rather
/// than read from a global, so alternate catalogs can be tested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltinCategory {
    /// Stable string key (e.g. "rent", "groceries")
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Icon identifier for the UI
    pub icon: String,

    /// Display color (hex)
    pub color: String,

    /// Fixed or variable spending
    pub kind: CategoryKind,

    /// Sort priority for pickers and tie-breaking
    pub order: i32,
}

impl BuiltinCategory {
    /// Create a catalog entry
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        kind: CategoryKind,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            kind,
            order,
        }
    }
}

/// A user-created category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCategory {
    /// Unique id in the `custom-` namespace
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Icon identifier for the UI
    pub icon: String,

    /// Display color (hex)
    pub color: String,

    /// Fixed or variable spending
    #[serde(default)]
    pub kind: CategoryKind,

    /// Sort priority; assigned after the built-in catalog
    pub order: i32,

    /// Soft-delete flag; the id stays resolvable when set
    #[serde(default)]
    pub is_deleted: bool,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl CustomCategory {
    /// Create a new custom category with a freshly minted id
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        kind: CategoryKind,
        order: i32,
    ) -> Self {
        Self {
            id: CategoryId::custom(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            kind,
            order,
            is_deleted: false,
            created_at: Utc::now(),
        }
    }

    /// Flip the soft-delete flag; never removes the record
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for CustomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Merged display view over built-in and custom categories
///
/// This is what the rest of the crate (and the UI) consumes; whether a
/// category came from the catalog or from the user only matters for
/// lifecycle operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub kind: CategoryKind,
    pub order: i32,
    pub is_custom: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl UnifiedCategory {
    /// Build the unified view of a catalog entry
    pub fn from_builtin(builtin: &BuiltinCategory) -> Self {
        Self {
            id: builtin.id.clone(),
            name: builtin.name.clone(),
            icon: builtin.icon.clone(),
            color: builtin.color.clone(),
            kind: builtin.kind,
            order: builtin.order,
            is_custom: false,
            is_deleted: false,
        }
    }

    /// Build the unified view of a custom category
    pub fn from_custom(custom: &CustomCategory) -> Self {
        Self {
            id: custom.id.clone(),
            name: custom.name.clone(),
            icon: custom.icon.clone(),
            color: custom.color.clone(),
            kind: custom.kind,
            order: custom.order,
            is_custom: true,
            is_deleted: custom.is_deleted,
        }
    }
}

impl fmt::Display for UnifiedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
