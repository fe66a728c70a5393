//! Category registry
//!
//! Maintains the merged, ordered view of built-in and custom
//! categories used by breakdown labeling and selection pickers. The
//! built-in catalog is injected at construction. Custom categories are
//! soft-deletable: `resolve_by_id` keeps finding them after deletion so
//! historical records never render as unknown, while
//! `active_categories` hides them from pickers.

use log::debug;

use crate::config::default_catalog;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{BuiltinCategory, CategoryId, CategoryKind, CustomCategory, UnifiedCategory};

/// Merged registry over the built-in catalog and custom categories
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    builtins: Vec<BuiltinCategory>,
    customs: Vec<CustomCategory>,
}

impl CategoryRegistry {
    /// Create a registry over an injected catalog, with no custom
    /// categories yet
    pub fn new(catalog: Vec<BuiltinCategory>) -> Self {
        Self {
            builtins: catalog,
            customs: Vec::new(),
        }
    }

    /// Create a registry over the standard catalog
    pub fn with_defaults() -> Self {
        Self::new(default_catalog())
    }

    /// Hydrate custom categories loaded from storage
    ///
    /// Rejects any record whose id collides with the catalog or with a
    /// previously registered custom category.
    pub fn register_custom(&mut self, custom: CustomCategory) -> FinsightResult<()> {
        if self.resolve_by_id(&custom.id).is_some() {
            return Err(FinsightError::duplicate_category(custom.id.to_string()));
        }
        custom
            .validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;

        debug!("registered custom category {}", custom.id);
        self.customs.push(custom);
        Ok(())
    }

    /// Create a new custom category with a freshly minted id
    ///
    /// The new category sorts after everything already registered.
    pub fn create_custom(
        &mut self,
        name: &str,
        icon: &str,
        color: &str,
        kind: CategoryKind,
    ) -> FinsightResult<CustomCategory> {
        let max_order = self
            .builtins
            .iter()
            .map(|b| b.order)
            .chain(self.customs.iter().map(|c| c.order))
            .max()
            .unwrap_or(-1);

        let custom = CustomCategory::new(name.trim(), icon, color, kind, max_order + 1);
        custom
            .validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;

        debug!("created custom category {} ({})", custom.id, custom.name);
        self.customs.push(custom.clone());
        Ok(custom)
    }

    /// Rename a custom category
    pub fn rename_custom(&mut self, id: &CategoryId, name: &str) -> FinsightResult<()> {
        let custom = self
            .customs
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| FinsightError::category_not_found(id.to_string()))?;

        let previous = std::mem::replace(&mut custom.name, name.trim().to_string());
        if let Err(e) = custom.validate() {
            custom.name = previous;
            return Err(FinsightError::Validation(e.to_string()));
        }
        Ok(())
    }

    /// Soft-delete a custom category
    ///
    /// Built-in categories cannot be deleted. The id stays resolvable;
    /// only the active view stops returning it.
    pub fn soft_delete(&mut self, id: &CategoryId) -> FinsightResult<()> {
        if self.builtins.iter().any(|b| &b.id == id) {
            return Err(FinsightError::Validation(format!(
                "Built-in category '{}' cannot be deleted",
                id
            )));
        }

        let custom = self
            .customs
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| FinsightError::category_not_found(id.to_string()))?;

        custom.soft_delete();
        debug!("soft-deleted custom category {}", id);
        Ok(())
    }

    /// Resolve a category id to its unified view
    ///
    /// Finds soft-deleted custom categories too; deletion only hides a
    /// category from selection, never from historical lookup.
    pub fn resolve_by_id(&self, id: &CategoryId) -> Option<UnifiedCategory> {
        if let Some(builtin) = self.builtins.iter().find(|b| &b.id == id) {
            return Some(UnifiedCategory::from_builtin(builtin));
        }
        self.customs
            .iter()
            .find(|c| &c.id == id)
            .map(UnifiedCategory::from_custom)
    }

    /// Categories available for selection, sorted by order ascending
    ///
    /// Excludes soft-deleted custom categories.
    pub fn active_categories(&self) -> Vec<UnifiedCategory> {
        let mut categories: Vec<UnifiedCategory> = self
            .builtins
            .iter()
            .map(UnifiedCategory::from_builtin)
            .chain(
                self.customs
                    .iter()
                    .filter(|c| !c.is_deleted)
                    .map(UnifiedCategory::from_custom),
            )
            .collect();
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// The full merged view, deleted categories included, sorted by
    /// order ascending
    pub fn all_categories_including_deleted(&self) -> Vec<UnifiedCategory> {
        let mut categories: Vec<UnifiedCategory> = self
            .builtins
            .iter()
            .map(UnifiedCategory::from_builtin)
            .chain(self.customs.iter().map(UnifiedCategory::from_custom))
            .collect();
        categories.sort_by_key(|c| c.order);
        categories
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
