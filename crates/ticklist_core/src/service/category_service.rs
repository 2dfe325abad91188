//! Category use-case service.
//!
//! # Responsibility
//! - Provide the category screen's create/list/delete entry points.
//! - Assign a random flat-palette color at creation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::category::{Category, CategoryId};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::RepoResult;
use crate::theme::palette::random_flat_hex;

/// Use-case service wrapper for category operations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a category with a randomly assigned flat-palette color.
    ///
    /// # Contract
    /// - Empty names are accepted as empty-string records.
    /// - Returns the persisted record including the assigned color.
    pub fn create_category(&self, name: impl Into<String>) -> RepoResult<Category> {
        self.create_category_with_color(name, random_flat_hex())
    }

    /// Creates a category with a caller-chosen color.
    ///
    /// Used by deterministic callers (tests, import paths).
    pub fn create_category_with_color(
        &self,
        name: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> RepoResult<Category> {
        let category = Category::new(name, color_hex);
        self.repo.create_category(&category)?;
        Ok(category)
    }

    /// Gets one category by id.
    pub fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        self.repo.get_category(id)
    }

    /// Lists every category in creation order.
    pub fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.repo.list_categories()
    }

    /// Deletes one category together with its items.
    pub fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        self.repo.delete_category(id)
    }
}
