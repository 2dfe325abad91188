//! Item use-case service.
//!
//! # Responsibility
//! - Provide the item screen's add/list/toggle/delete entry points.
//!
//! # Invariants
//! - New items start with `done=false` and the current timestamp.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemListQuery, ItemRepository, ItemSort};
use crate::repo::RepoResult;

/// Use-case service wrapper for item operations.
#[derive(Debug)]
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a new item to the category.
    ///
    /// # Contract
    /// - `done` starts as `false`, `created_at` is the current time.
    /// - Empty titles are accepted as empty-string records.
    /// - Returns the persisted record.
    pub fn add_item(&self, category: CategoryId, title: impl Into<String>) -> RepoResult<Item> {
        let item = Item::new(category, title);
        self.repo.create_item(&item)?;
        Ok(item)
    }

    /// Lists items using the provided query options.
    pub fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>> {
        self.repo.list_items(query)
    }

    /// Lists one category's items in default screen order (title ascending).
    pub fn screen_items(&self, category: CategoryId) -> RepoResult<Vec<Item>> {
        self.repo.list_items(&ItemListQuery::new(category))
    }

    /// Lists items matching a search term, newest first.
    pub fn search_items(&self, category: CategoryId, term: &str) -> RepoResult<Vec<Item>> {
        self.repo.list_items(&ItemListQuery {
            category,
            title_contains: Some(term.to_string()),
            sort: ItemSort::CreatedDescending,
        })
    }

    /// Flips the done flag and returns the new value.
    pub fn toggle_done(&self, id: ItemId) -> RepoResult<bool> {
        self.repo.toggle_done(id)
    }

    /// Deletes one item.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        self.repo.delete_item(id)
    }
}
